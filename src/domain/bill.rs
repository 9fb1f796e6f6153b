use chrono::NaiveDate;

use crate::domain::{Category, Dated, Error, Money};

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: u32,
    pub name: String,
    pub due_date: NaiveDate,
    pub amount: Money,
    pub paid: bool,
    pub category: Category,
}

impl Bill {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        due_date: NaiveDate,
        amount: Money,
        paid: bool,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            due_date,
            amount,
            paid,
            category,
        }
    }

    /// Fails with a conflict if the bill was already paid; a paid bill never
    /// goes back to unpaid.
    pub fn ensure_unpaid(&self) -> Result<(), Error> {
        if self.paid {
            return Err(Error::Conflict(format!("{} bill is already paid", self.name)));
        }
        Ok(())
    }
}

impl Dated for Bill {
    fn date(&self) -> NaiveDate {
        self.due_date
    }
}

use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current,
    Investment,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
            AccountKind::Investment => "investment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: u32,
    pub name: String,
    pub number: String, // masked, e.g. ****7890
    pub balance: Money,
    pub kind: AccountKind,
}

impl Account {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        number: impl Into<String>,
        balance: Money,
        kind: AccountKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            balance,
            kind,
        }
    }

    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    pub fn debit(&mut self, amount: Money) {
        self.balance -= amount;
    }

    pub fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }
}

use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::{Dated, Money, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Positive amounts are credits; everything else is a debit.
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Shopping,
    Housing,
    Utilities,
    Transfer,
    Investment,
    Credit,
    Communication,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "income",
            Category::Shopping => "shopping",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Transfer => "transfer",
            Category::Investment => "investment",
            Category::Credit => "credit",
            Category::Communication => "communication",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Category::Income),
            "shopping" => Ok(Category::Shopping),
            "housing" => Ok(Category::Housing),
            "utilities" => Ok(Category::Utilities),
            "transfer" => Ok(Category::Transfer),
            "investment" => Ok(Category::Investment),
            "credit" => Ok(Category::Credit),
            "communication" => Ok(Category::Communication),
            _ => Err(ValidationError::unknown("category", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u32,
    pub account: String, // account name, not a key
    pub amount: Money,
    pub direction: Direction,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub status: Status,
}

impl Transaction {
    /// Builds a transaction whose direction follows the sign of `amount`.
    pub fn new(
        id: u32,
        account: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        status: Status,
    ) -> Self {
        Self {
            id,
            account: account.into(),
            amount,
            direction: Direction::of(amount),
            date,
            description: description.into(),
            category,
            status,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.direction == Direction::Credit
    }
}

impl Dated for Transaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "tx={},account={},amount={},{},date={},category={},{}",
            self.id,
            self.account,
            self.amount,
            self.direction.as_str(),
            self.date,
            self.category.as_str(),
            self.status.as_str()
        )
    }
}

/// One row of the payment history, derived from a [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentHistoryEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub status: Status,
}

impl From<&Transaction> for PaymentHistoryEntry {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            date: tx.date,
            description: tx.description.clone(),
            amount: tx.amount,
            status: tx.status,
        }
    }
}

impl Dated for PaymentHistoryEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

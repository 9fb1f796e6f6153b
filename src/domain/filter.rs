use std::str::FromStr;

use crate::domain::{CardNetwork, Category, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionFilter {
    #[default]
    All,
    Category(Category),
}

impl FromStr for TransactionFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(TransactionFilter::All);
        }
        s.parse()
            .map(TransactionFilter::Category)
            .map_err(|_| ValidationError::unknown("transaction filter", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillFilter {
    #[default]
    All,
    Paid,
    Unpaid,
    Category(Category),
}

impl FromStr for BillFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BillFilter::All),
            "paid" => Ok(BillFilter::Paid),
            "unpaid" => Ok(BillFilter::Unpaid),
            other => other
                .parse()
                .map(BillFilter::Category)
                .map_err(|_| ValidationError::unknown("bill filter", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFilter {
    #[default]
    All,
    Network(CardNetwork),
}

impl FromStr for CardFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CardFilter::All);
        }
        s.parse()
            .map(CardFilter::Network)
            .map_err(|_| ValidationError::unknown("card filter", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(ValidationError::unknown("sort order", s)),
        }
    }
}

/// A change to one of the dashboard's filter or sort selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    TransactionFilter(TransactionFilter),
    SortOrder(SortOrder),
    BillFilter(BillFilter),
    CardFilter(CardFilter),
}

impl ViewChange {
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        match field.trim().to_ascii_lowercase().as_str() {
            "transactions" | "transaction_filter" => value.parse().map(ViewChange::TransactionFilter),
            "sort" | "sort_order" => value.parse().map(ViewChange::SortOrder),
            "bills" | "bill_filter" => value.parse().map(ViewChange::BillFilter),
            "cards" | "card_filter" => value.parse().map(ViewChange::CardFilter),
            _ => Err(ValidationError::unknown("view", field)),
        }
    }
}

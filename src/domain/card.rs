use std::str::FromStr;

use crate::domain::{Money, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardNetwork {
    Visa,
    Mastercard,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::Mastercard => "mastercard",
        }
    }
}

impl FromStr for CardNetwork {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardNetwork::Visa),
            "mastercard" => Ok(CardNetwork::Mastercard),
            _ => Err(ValidationError::unknown("card type", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub network: CardNetwork,
    pub number: String, // masked
    pub name: String,
    pub expiry: String, // MM/YY
    pub cvv: String,    // masked
    pub limit: Money,
    pub available: Money,
    pub transactions: u32,
}

impl Card {
    /// `available` is capped at `limit`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        network: CardNetwork,
        number: impl Into<String>,
        name: impl Into<String>,
        expiry: impl Into<String>,
        limit: Money,
        available: Money,
        transactions: u32,
    ) -> Self {
        Self {
            id,
            network,
            number: number.into(),
            name: name.into(),
            expiry: expiry.into(),
            cvv: "•••".to_string(),
            limit,
            available: available.min(limit),
            transactions,
        }
    }

    /// Last four characters of the masked number.
    pub fn last_four(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.number[start..]
    }
}

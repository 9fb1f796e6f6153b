use std::str::FromStr;

use crate::domain::{Money, SettingChange, ValidationError, ViewChange};

/// Name of the sentinel destination for transfers leaving the bank.
pub const EXTERNAL_ACCOUNT: &str = "External";

/// Raw transfer form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    pub amount: String,
    pub note: Option<String>,
}

impl TransferRequest {
    pub fn new(
        from_account: impl Into<String>,
        to_account: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            amount: amount.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Field-level checks that need no ledger state: presence first, then amount.
    pub fn validate(&self) -> Result<Transfer, ValidationError> {
        let from = self.from_account.trim();
        let to = self.to_account.trim();
        let amount = self.amount.trim();
        if from.is_empty() {
            return Err(ValidationError::MissingField("from account"));
        }
        if to.is_empty() {
            return Err(ValidationError::MissingField("to account"));
        }
        if amount.is_empty() {
            return Err(ValidationError::MissingField("amount"));
        }

        let amount = Money::from_decimal_str(amount)
            .filter(Money::is_positive)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;

        if from == to {
            return Err(ValidationError::SameAccount(from.to_string()));
        }

        Ok(Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            note: self
                .note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        })
    }
}

/// A transfer whose fields passed [`TransferRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
    pub note: Option<String>,
}

/// Shortcut buttons on the dashboard that answer without a typed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Invest,
    Cards,
}

impl FromStr for QuickAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "invest" => Ok(QuickAction::Invest),
            "cards" => Ok(QuickAction::Cards),
            _ => Err(ValidationError::unknown("quick action", s)),
        }
    }
}

/// One dashboard interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Transfer(TransferRequest),
    PayBill { bill_id: u32 },
    Ask { query: String },
    QuickAction(QuickAction),
    Setting(SettingChange),
    View(ViewChange),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_reported_before_amount() {
        let err = TransferRequest::new("", "External", "abc").validate();
        assert_eq!(err, Err(ValidationError::MissingField("from account")));

        let err = TransferRequest::new("Prime Savings", " ", "").validate();
        assert_eq!(err, Err(ValidationError::MissingField("to account")));
    }

    #[test]
    fn amount_must_be_positive_number() {
        for bad in ["0", "-5", "ten", "1e"] {
            let err = TransferRequest::new("A", "B", bad).validate();
            assert_eq!(err, Err(ValidationError::InvalidAmount(bad.to_string())));
        }
    }

    #[test]
    fn same_account_is_rejected() {
        let err = TransferRequest::new("A", "A", "10").validate();
        assert_eq!(err, Err(ValidationError::SameAccount("A".to_string())));
    }

    #[test]
    fn blank_note_is_dropped() {
        let transfer = TransferRequest::new("A", "B", " 250.5 ")
            .with_note("   ")
            .validate()
            .unwrap();
        assert_eq!(transfer.amount, Money::from_decimal_str("250.50").unwrap());
        assert_eq!(transfer.note, None);
    }
}

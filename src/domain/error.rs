use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown bill or account. Transfers from an account that does not exist
    /// land here instead of being booked without a debit.
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Another operation is already in progress")]
    Busy,

    #[error("Engine failed with: {0}")]
    Engine(String),
}

impl Error {
    /// Text shown to the user in the dashboard toast.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(e) => e.user_message(),
            Error::NotFound(_) | Error::Conflict(_) => self.to_string(),
            Error::Busy => "Please wait for the current operation to finish".to_string(),
            Error::IO(_) | Error::Ingestion(_) | Error::Engine(_) => {
                "Operation failed".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("insufficient funds in {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: String,
        requested: Money,
        available: Money,
    },

    #[error("cannot transfer from {0} to itself")]
    SameAccount(String),

    #[error("unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

impl ValidationError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        ValidationError::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }

    fn user_message(&self) -> String {
        match self {
            ValidationError::MissingField(_) => "Please fill all required fields".to_string(),
            ValidationError::InvalidAmount(_) => "Please enter a valid amount".to_string(),
            ValidationError::InsufficientFunds { .. } => {
                "Insufficient funds for this transfer".to_string()
            }
            ValidationError::SameAccount(_) => "Please choose two different accounts".to_string(),
            ValidationError::UnknownValue { .. } => self.to_string(),
        }
    }
}

pub mod account;
pub mod bill;
pub mod card;
pub mod error;
pub mod filter;
pub mod money;
pub mod notification;
pub mod operation;
pub mod settings;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use bill::Bill;
pub use card::{Card, CardNetwork};
pub use error::{Error, ValidationError};
pub use filter::{BillFilter, CardFilter, SortOrder, TransactionFilter, ViewChange};
pub use money::Money;
pub use notification::{Notification, Severity};
pub use operation::{EXTERNAL_ACCOUNT, Operation, QuickAction, Transfer, TransferRequest};
pub use settings::{Currency, Language, Locale, SettingChange, Settings, StatementFrequency};
pub use traits::{Clock, Dated, Notifier, OperationStream};
pub use transaction::{Category, Direction, PaymentHistoryEntry, Status, Transaction};

pub mod assistant;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod engine;
pub mod format;
pub mod ingestion;
pub mod ledger;
pub mod notifier;
pub mod query;
pub mod statement;

pub use dashboard::{Dashboard, ViewState};
pub use engine::{Engine, EngineConfig, Receipt};
pub use ledger::Ledger;

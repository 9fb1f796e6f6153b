use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::domain::{Currency, Locale, Settings};
use crate::engine::EngineConfig;

/// Replay a script of dashboard operations against the demo ledger.
#[derive(Debug, Parser)]
#[command(name = "neo-ledger", version)]
pub struct Args {
    /// CSV script with the header `op,from,to,amount,bill,text`.
    pub script: PathBuf,

    /// Display currency (INR, USD, EUR, GBP).
    #[arg(long, env = "NEO_CURRENCY", default_value = "INR")]
    pub currency: Currency,

    /// Number formatting locale (en-IN, en-US, en-GB, de-DE).
    #[arg(long, env = "NEO_LOCALE", default_value = "en-IN")]
    pub locale: Locale,

    /// Simulated latency of a transfer, in milliseconds.
    #[arg(long, env = "NEO_TRANSFER_DELAY_MS", default_value_t = 1500)]
    pub transfer_delay_ms: u64,

    /// Simulated latency of a bill payment, in milliseconds.
    #[arg(long, env = "NEO_BILL_DELAY_MS", default_value_t = 1000)]
    pub bill_delay_ms: u64,

    /// Also write the payment-history statement as HTML to this path.
    #[arg(long)]
    pub statement: Option<PathBuf>,

    /// Name printed on the statement.
    #[arg(long, default_value = "User")]
    pub user: String,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            currency: self.currency,
            locale: self.locale,
            ..Settings::default()
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            transfer_delay: Duration::from_millis(self.transfer_delay_ms),
            bill_delay: Duration::from_millis(self.bill_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let args = Args::try_parse_from(["neo-ledger", "ops.csv"]).unwrap();
        assert_eq!(args.settings(), Settings::default());
        assert_eq!(args.engine_config(), EngineConfig::default());
        assert_eq!(args.user, "User");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "neo-ledger",
            "ops.csv",
            "--currency",
            "usd",
            "--locale",
            "en-US",
            "--transfer-delay-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(args.settings().currency, Currency::Usd);
        assert_eq!(args.settings().locale, Locale::EnUs);
        assert_eq!(args.engine_config().transfer_delay, Duration::ZERO);
    }

    #[test]
    fn unknown_currency_is_rejected() {
        assert!(Args::try_parse_from(["neo-ledger", "ops.csv", "--currency", "XYZ"]).is_err());
    }
}

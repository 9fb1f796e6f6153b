use std::fs::{self, File};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use neo_ledger::clock::SystemClock;
use neo_ledger::config::Args;
use neo_ledger::domain::Clock;
use neo_ledger::ingestion::CsvReader;
use neo_ledger::notifier::TracingNotifier;
use neo_ledger::{Dashboard, Engine, Ledger, statement};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger();

    let file = File::open(&args.script)?;
    let mut ingestion = CsvReader::new(file)?;

    let dashboard = Dashboard::new(Ledger::demo(), args.settings());
    let engine = Engine::new(
        dashboard,
        TracingNotifier::default(),
        SystemClock,
        args.engine_config(),
    );

    for reply in engine.process(&mut ingestion).await? {
        println!("{}", reply);
    }

    let dashboard = engine.snapshot()?;
    println!("account,number,type,balance");
    for account in dashboard.ledger.accounts() {
        println!(
            "{},{},{},{}",
            account.name,
            account.number,
            account.kind.as_str(),
            account.balance
        );
    }

    if let Some(path) = &args.statement {
        let html = statement::render_html(&dashboard, &args.user, SystemClock.today());
        fs::write(path, html)?;
        info!(path = %path.display(), "statement written");
    }

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! Keyword intent classifier behind the dashboard assistant.
//!
//! A query is lowercased and tested against [`INTENTS`] in order; the first
//! entry with a keyword contained in the query wins. Order matters: "transfer
//! my balance" is a balance question.

use crate::dashboard::Dashboard;
use crate::domain::{Money, QuickAction};
use crate::query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Balance,
    Transfer,
    Loan,
    Transactions,
    Greeting,
    PayBill,
    Cards,
    Settings,
    Help,
}

pub const INTENTS: &[(Intent, &[&str])] = &[
    (Intent::Balance, &["balance"]),
    (Intent::Transfer, &["transfer"]),
    (Intent::Loan, &["loan"]),
    (Intent::Transactions, &["transaction"]),
    (Intent::Greeting, &["hi", "hello"]),
    (Intent::PayBill, &["pay bill"]),
    (Intent::Cards, &["card"]),
    (Intent::Settings, &["settings"]),
];

const RECENT_TRANSACTIONS: usize = 3;
const PERSONAL_LOAN: i64 = 150_000;
const HOME_LOAN: i64 = 5_000_000;

pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();
    INTENTS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Help)
}

pub fn respond(query: &str, dashboard: &Dashboard) -> String {
    let intent = classify(query);
    tracing::debug!(?intent, "assistant query classified");

    match intent {
        Intent::Balance => {
            let accounts = dashboard.ledger.accounts();
            let mut reply = format!(
                "Your total balance is {}.",
                dashboard.money(query::total_balance(accounts))
            );
            for acc in accounts {
                reply.push_str(&format!("\n{}: {}", acc.name, dashboard.money(acc.balance)));
            }
            reply
        }
        Intent::Transfer => {
            "Go to the 'Transfer' tab or tell me the amount and recipient.".to_string()
        }
        Intent::Loan => format!(
            "You're pre-approved for:\n- Personal Loan: {} at 9.5%\n- Home Loan: {} at 8.2%",
            dashboard.money(Money::from_major(PERSONAL_LOAN)),
            dashboard.money(Money::from_major(HOME_LOAN))
        ),
        Intent::Transactions => {
            let mut reply = "Recent transactions:".to_string();
            for tx in dashboard
                .visible_transactions()
                .iter()
                .take(RECENT_TRANSACTIONS)
            {
                reply.push_str(&format!(
                    "\n- {} {} ({})",
                    dashboard.money(tx.amount.abs()),
                    if tx.is_credit() { "credited" } else { "debited" },
                    tx.description
                ));
            }
            reply
        }
        Intent::Greeting => "Hello! Ask about balances, transfers, loans, or transactions.".to_string(),
        Intent::PayBill => "You can pay bills in the Payments tab. I can help with:\n\
             - Electricity\n- Water\n- Credit Card\n- Internet"
            .to_string(),
        Intent::Cards => {
            let mut reply = "Your cards:".to_string();
            for card in dashboard.ledger.cards() {
                reply.push_str(&format!(
                    "\n- {}: {} ({} available)",
                    card.name,
                    card.number,
                    dashboard.money(card.available)
                ));
            }
            reply
        }
        Intent::Settings => {
            let settings = &dashboard.settings;
            format!(
                "Settings options:\n- Notifications: {}\n- 2FA: {}\n- Language: {}",
                on_off(settings.notifications),
                on_off(settings.two_factor_auth),
                settings.language.code()
            )
        }
        Intent::Help => "I can help with:\n1. Account balances\n2. Fund transfers\n3. Loan info\n\
             4. Transactions\n5. Bill payments\n6. Investments\n7. Card details\n8. Settings"
            .to_string(),
    }
}

pub fn quick_action(action: QuickAction, dashboard: &Dashboard) -> String {
    match action {
        QuickAction::Invest => "Invest 40% in Equity, 30% Debt, 20% Gold, 10% Crypto.".to_string(),
        QuickAction::Cards => match dashboard.ledger.cards().first() {
            Some(card) => format!(
                "Your {} (•••• {}) has {} available credit.",
                card.name,
                card.last_four(),
                dashboard.money(card.available)
            ),
            None => "You don't have any cards yet.".to_string(),
        },
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

//! "Print Statement" export: the payment history as a standalone HTML page.

use chrono::{Datelike, NaiveDate};

use crate::dashboard::Dashboard;
use crate::domain::Status;
use crate::format::format_date;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{width:100%;border-collapse:collapse}\
th,td{padding:8px;border-bottom:1px solid #ddd;text-align:left}\
.credit{color:#2e7d32}.debit{color:#c62828}.pending{color:#ef6c00}";

pub fn render_html(dashboard: &Dashboard, user_name: &str, generated_on: NaiveDate) -> String {
    let user = escape(user_name);
    let locale = dashboard.settings.locale;
    let (account_name, account_number) = dashboard
        .ledger
        .primary_account()
        .map(|acc| (escape(&acc.name), escape(&acc.number)))
        .unwrap_or_default();

    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Payment History - {user}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <header>\n<h1>Payment History</h1>\n<p>Generated on: {generated}</p>\n\
         <p><strong>User:</strong> {user}</p>\n\
         <p><strong>Account:</strong> {account_name} ({account_number})</p>\n</header>\n\
         <table>\n<thead><tr><th>Date</th><th>Description</th><th>Amount</th><th>Status</th></tr></thead>\n\
         <tbody>\n",
        generated = format_date(generated_on, locale),
    );

    for entry in dashboard.ledger.payment_history() {
        let amount_class = if entry.amount.is_positive() { "credit" } else { "debit" };
        let status_class = if entry.status == Status::Pending { "pending" } else { "" };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"{}\">{}</td><td class=\"{}\">{}</td></tr>\n",
            format_date(entry.date, locale),
            escape(&entry.description),
            amount_class,
            escape(&dashboard.money(entry.amount)),
            status_class,
            entry.status.as_str()
        ));
    }

    html.push_str(&format!(
        "</tbody>\n</table>\n<footer><p>&copy; {} NEO Bank - All rights reserved</p></footer>\n\
         </body>\n</html>\n",
        generated_on.year()
    ));
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Settings;
    use crate::ledger::Ledger;

    fn statement(user: &str) -> String {
        let dashboard = Dashboard::new(Ledger::demo(), Settings::default());
        render_html(&dashboard, user, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap())
    }

    #[test]
    fn has_header_and_one_row_per_history_entry() {
        let html = statement("Asha");
        assert!(html.contains("<title>Payment History - Asha</title>"));
        assert!(html.contains("Generated on: 30 Jun 2023"));
        assert!(html.contains("<strong>Account:</strong> Prime Savings (****7890)"));
        assert_eq!(html.matches("<tr><td>").count(), 6);
        assert!(html.contains("&copy; 2023 NEO Bank"));
    }

    #[test]
    fn rows_carry_credit_debit_and_pending_classes() {
        let html = statement("Asha");
        assert!(html.contains(
            "<tr><td>15 Jun 2023</td><td>Salary Deposit</td><td class=\"credit\">₹5,000.00</td><td class=\"\">completed</td></tr>"
        ));
        assert!(html.contains(
            "<td>Mutual Fund Investment</td><td class=\"debit\">-₹10,000.00</td><td class=\"pending\">pending</td>"
        ));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = statement("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}

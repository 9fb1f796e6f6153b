//! Locale-aware rendering of amounts and dates.

use chrono::NaiveDate;

use crate::domain::{Currency, Locale, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

struct NumberStyle {
    grouping: Grouping,
    group_separator: char,
    decimal_separator: char,
    symbol_after: bool,
}

fn number_style(locale: Locale) -> NumberStyle {
    match locale {
        Locale::EnIn => NumberStyle {
            grouping: Grouping::Indian,
            group_separator: ',',
            decimal_separator: '.',
            symbol_after: false,
        },
        Locale::EnUs | Locale::EnGb => NumberStyle {
            grouping: Grouping::Thousands,
            group_separator: ',',
            decimal_separator: '.',
            symbol_after: false,
        },
        Locale::DeDe => NumberStyle {
            grouping: Grouping::Thousands,
            group_separator: '.',
            decimal_separator: ',',
            symbol_after: true,
        },
    }
}

/// Renders `amount` with the currency symbol, grouping and decimal mark of
/// `locale`, always with two fraction digits. Negative amounts carry a
/// leading `-`.
pub fn format_currency(amount: Money, locale: Locale, currency: Currency) -> String {
    let style = number_style(locale);
    let mut value = amount.value().round_dp(Money::DECIMALS);
    let negative = value.is_sign_negative() && !value.is_zero();
    value.set_sign_positive(true);
    value.rescale(Money::DECIMALS);

    let digits = value.to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let number = format!(
        "{}{}{}",
        group_digits(int_part, style.grouping, style.group_separator),
        style.decimal_separator,
        frac_part
    );

    let sign = if negative { "-" } else { "" };
    if style.symbol_after {
        format!("{sign}{number}\u{a0}{}", currency.symbol())
    } else {
        format!("{sign}{}{number}", currency.symbol())
    }
}

fn group_digits(digits: &str, grouping: Grouping, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(&separator.to_string());
    out.push(separator);
    out.push_str(tail);
    out
}

/// Short human date as printed on statements.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let pattern = match locale {
        Locale::EnIn | Locale::EnGb => "%-d %b %Y",
        Locale::EnUs => "%b %-d, %Y",
        Locale::DeDe => "%d.%m.%Y",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_decimal_str(s).unwrap()
    }

    #[test]
    fn indian_grouping_uses_lakhs() {
        assert_eq!(
            format_currency(money("125000"), Locale::EnIn, Currency::Inr),
            "₹1,25,000.00"
        );
        assert_eq!(
            format_currency(money("1200000"), Locale::EnIn, Currency::Inr),
            "₹12,00,000.00"
        );
        assert_eq!(
            format_currency(money("599"), Locale::EnIn, Currency::Inr),
            "₹599.00"
        );
    }

    #[test]
    fn thousands_grouping_and_sign() {
        assert_eq!(
            format_currency(money("-1234567.5"), Locale::EnUs, Currency::Usd),
            "-$1,234,567.50"
        );
        assert_eq!(
            format_currency(money("1000"), Locale::EnGb, Currency::Gbp),
            "£1,000.00"
        );
    }

    #[test]
    fn german_locale_puts_symbol_last() {
        assert_eq!(
            format_currency(money("1234.5"), Locale::DeDe, Currency::Eur),
            "1.234,50\u{a0}€"
        );
    }

    #[test]
    fn rounding_to_zero_drops_the_sign() {
        assert_eq!(
            format_currency(money("-0.004"), Locale::EnUs, Currency::Usd),
            "$0.00"
        );
    }

    #[test]
    fn dates_follow_locale() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(format_date(date, Locale::EnIn), "5 Jun 2023");
        assert_eq!(format_date(date, Locale::EnUs), "Jun 5, 2023");
        assert_eq!(format_date(date, Locale::DeDe), "05.06.2023");
    }
}

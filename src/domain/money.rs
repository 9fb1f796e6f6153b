use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A signed currency amount held to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const DECIMALS: u32 = 2;
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value.round_dp(Self::DECIMALS))
    }

    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parses user input such as `"1500"` or `" 99.995 "`. Extra precision is
    /// rounded half-to-even.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let value = Decimal::from_str(s).ok()?;
        Some(Self::new(value))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut value = self.0.round_dp(Self::DECIMALS);
        value.rescale(Self::DECIMALS);
        write!(f, "{}", value)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn bankers_round_half_even() {
        let v = Money::from_decimal_str("1.005").unwrap();
        assert_eq!(format!("{}", v), "1.00");
        let v = Money::from_decimal_str("1.015").unwrap();
        assert_eq!(format!("{}", v), "1.02");
        let v = Money::from_decimal_str("-1.005").unwrap();
        assert_eq!(format!("{}", v), "-1.00");
        let v = Money::from_decimal_str("-1.015").unwrap();
        assert_eq!(format!("{}", v), "-1.02");
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(Money::from_decimal_str(""), None);
        assert_eq!(Money::from_decimal_str("   "), None);
        assert_eq!(Money::from_decimal_str("abc"), None);
        assert_eq!(Money::from_decimal_str("NaN"), None);
        assert_eq!(Money::from_decimal_str("1.2.3"), None);
    }

    #[test]
    fn integral_amounts_display_two_places() {
        assert_eq!(Money::from_major(500).to_string(), "500.00");
        assert_eq!((-Money::from_major(42)).to_string(), "-42.00");
    }

    #[test]
    fn sums_borrowed_amounts() {
        let amounts = [Money::from_major(1), Money::from_major(2), -Money::from_major(4)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, -Money::from_major(1));
    }
}

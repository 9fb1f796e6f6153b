use std::str::FromStr;

use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(ValidationError::unknown("currency", s)),
        }
    }
}

/// Number and date formatting conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnIn,
    EnUs,
    EnGb,
    DeDe,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnIn => "en-IN",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
        }
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Ok(Locale::EnIn),
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" => Ok(Locale::DeDe),
            _ => Err(ValidationError::unknown("locale", s)),
        }
    }
}

/// Display language of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Ta,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Ta => "ta",
        }
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "mr" => Ok(Language::Mr),
            "ta" => Ok(Language::Ta),
            _ => Err(ValidationError::unknown("language", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatementFrequency {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl FromStr for StatementFrequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(StatementFrequency::Weekly),
            "monthly" => Ok(StatementFrequency::Monthly),
            "quarterly" => Ok(StatementFrequency::Quarterly),
            _ => Err(ValidationError::unknown("statement frequency", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub notifications: bool,
    pub two_factor_auth: bool,
    pub biometrics: bool,
    pub dark_mode: bool,
    pub language: Language,
    pub currency: Currency,
    pub locale: Locale,
    pub statement_frequency: StatementFrequency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            two_factor_auth: false,
            biometrics: true,
            dark_mode: false,
            language: Language::default(),
            currency: Currency::default(),
            locale: Locale::default(),
            statement_frequency: StatementFrequency::default(),
        }
    }
}

impl Settings {
    pub fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::Notifications(on) => self.notifications = on,
            SettingChange::TwoFactorAuth(on) => self.two_factor_auth = on,
            SettingChange::Biometrics(on) => self.biometrics = on,
            SettingChange::DarkMode(on) => self.dark_mode = on,
            SettingChange::Language(language) => self.language = language,
            SettingChange::Currency(currency) => self.currency = currency,
            SettingChange::StatementFrequency(frequency) => self.statement_frequency = frequency,
        }
    }
}

/// A single user edit on the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    Notifications(bool),
    TwoFactorAuth(bool),
    Biometrics(bool),
    DarkMode(bool),
    Language(Language),
    Currency(Currency),
    StatementFrequency(StatementFrequency),
}

impl SettingChange {
    /// Accepts the dashboard's field names (`twoFactorAuth`) as well as snake case.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        let key: String = field
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "notifications" => parse_switch(value).map(SettingChange::Notifications),
            "twofactorauth" | "2fa" => parse_switch(value).map(SettingChange::TwoFactorAuth),
            "biometrics" => parse_switch(value).map(SettingChange::Biometrics),
            "darkmode" => parse_switch(value).map(SettingChange::DarkMode),
            "language" => value.parse().map(SettingChange::Language),
            "currency" => value.parse().map(SettingChange::Currency),
            "statementfrequency" => value.parse().map(SettingChange::StatementFrequency),
            _ => Err(ValidationError::unknown("setting", field)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingChange::Notifications(_) => "Notifications",
            SettingChange::TwoFactorAuth(_) => "Two Factor Auth",
            SettingChange::Biometrics(_) => "Biometrics",
            SettingChange::DarkMode(_) => "Dark Mode",
            SettingChange::Language(_) => "Language",
            SettingChange::Currency(_) => "Currency",
            SettingChange::StatementFrequency(_) => "Statement Frequency",
        }
    }
}

fn parse_switch(value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ValidationError::unknown("switch value", value)),
    }
}

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> &str {
        match self.0.as_str() {
            "BRL" => "R$",
            "USD" => "$",
            "EUR" => "€",
            _ => self.0.as_str(),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("BRL")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Formats a monetary value with the locale's separators and the currency
/// symbol, e.g. `R$ 1.234,56`.
pub fn format_amount(value: f64, locale: &LocaleConfig, currency: &CurrencyCode) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(locale.grouping_separator);
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {}{}{:02}",
        if negative { "-" } else { "" },
        currency.symbol(),
        grouped,
        locale.decimal_separator,
        fraction
    )
}

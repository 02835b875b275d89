//! Countries offered by the registration form.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub display_name: &'static str,
    /// ISO 4217 currency code.
    pub currency_code: &'static str,
}

pub static COUNTRIES: &[Country] = &[
    Country { code: "US", display_name: "United States", currency_code: "USD" },
    Country { code: "GB", display_name: "United Kingdom", currency_code: "GBP" },
    Country { code: "CA", display_name: "Canada", currency_code: "CAD" },
    Country { code: "AU", display_name: "Australia", currency_code: "AUD" },
    Country { code: "DE", display_name: "Germany", currency_code: "EUR" },
    Country { code: "FR", display_name: "France", currency_code: "EUR" },
    Country { code: "NL", display_name: "Netherlands", currency_code: "EUR" },
    Country { code: "CH", display_name: "Switzerland", currency_code: "CHF" },
    Country { code: "SG", display_name: "Singapore", currency_code: "SGD" },
    Country { code: "JP", display_name: "Japan", currency_code: "JPY" },
    Country { code: "IN", display_name: "India", currency_code: "INR" },
    Country { code: "BR", display_name: "Brazil", currency_code: "BRL" },
    Country { code: "NG", display_name: "Nigeria", currency_code: "NGN" },
    Country { code: "AE", display_name: "United Arab Emirates", currency_code: "AED" },
];

/// Look up a country by code, ignoring ASCII case.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

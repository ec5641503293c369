//! Tariffs, entitlements and currency codes.

use serde::Serialize;

/// Quota granted by the unlimited tariff.
pub const UNLIMITED_REQUESTS: u32 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tariff {
    Starter,
    Advanced,
    Unlimited,
}

impl Tariff {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "starter"   => Some(Tariff::Starter),
            "advanced"  => Some(Tariff::Advanced),
            "unlimited" => Some(Tariff::Unlimited),
            _           => None,
        }
    }
}

/// What a succeeded payment grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    pub requests_added: u32,
    pub subscription_type: Option<&'static str>,
}

impl Entitlement {
    /// Unknown tariffs grant nothing.
    pub fn for_tariff(tariff: &str) -> Self {
        match Tariff::parse(tariff) {
            Some(Tariff::Starter)   => Self { requests_added: 20, subscription_type: None },
            Some(Tariff::Advanced)  => Self { requests_added: 40, subscription_type: None },
            Some(Tariff::Unlimited) => Self {
                requests_added: UNLIMITED_REQUESTS,
                subscription_type: Some("unlimited"),
            },
            None => Self { requests_added: 0, subscription_type: None },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Currency {
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    /// Maps a display symbol to its currency. Anything unrecognised is roubles.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "$" => Currency::Usd,
            "€" => Currency::Eur,
            "£" => Currency::Gbp,
            _   => Currency::Rub,
        }
    }

    pub fn iso(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

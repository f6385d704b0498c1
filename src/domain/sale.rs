//! Domain model for sale records and their categorical labels.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Dated, Identifiable};
use crate::errors::DashboardError;

/// A single sale. `amount` is always denominated in the base currency
/// (Real); conversion happens once, at normalization, never retroactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Store-assigned identifier, absent until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    /// Wall-clock `HH:MM` of insertion, set by the normalizer.
    pub time: String,
    pub amount: f64,
    pub package: Package,
    pub origin: Origin,
    /// Currency the amount was entered in, kept for display and audit.
    pub currency: Currency,
    pub client_name: String,
    /// Creation instant, for audit ordering only.
    pub timestamp: DateTime<Utc>,
}

impl Identifiable for Sale {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

impl Dated for Sale {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Amounted for Sale {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the closed set of sale packages.
pub enum Package {
    Simples,
    Bronze,
    Prata,
    Ouro,
    #[serde(rename = "VIP")]
    Vip,
    Upsell,
}

impl Package {
    pub const ALL: [Package; 6] = [
        Package::Simples,
        Package::Bronze,
        Package::Prata,
        Package::Ouro,
        Package::Vip,
        Package::Upsell,
    ];
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Package::Simples => "Simples",
            Package::Bronze => "Bronze",
            Package::Prata => "Prata",
            Package::Ouro => "Ouro",
            Package::Vip => "VIP",
            Package::Upsell => "Upsell",
        };
        f.write_str(label)
    }
}

impl FromStr for Package {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Simples" => Ok(Package::Simples),
            "Bronze" => Ok(Package::Bronze),
            "Prata" => Ok(Package::Prata),
            "Ouro" => Ok(Package::Ouro),
            "VIP" => Ok(Package::Vip),
            "Upsell" => Ok(Package::Upsell),
            other => Err(DashboardError::InvalidRecord(format!(
                "unknown package `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the closed set of lead origins.
pub enum Origin {
    BR,
    USA,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Origin::BR => "BR",
            Origin::USA => "USA",
        };
        f.write_str(label)
    }
}

impl FromStr for Origin {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BR" => Ok(Origin::BR),
            "USA" => Ok(Origin::USA),
            other => Err(DashboardError::InvalidRecord(format!(
                "unknown origin `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Enumerates the currencies a sale amount can be entered in.
pub enum Currency {
    Real,
    #[serde(rename = "Dólar")]
    Dolar,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Currency::Real => "Real",
            Currency::Dolar => "Dólar",
        };
        f.write_str(label)
    }
}

impl FromStr for Currency {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Real" => Ok(Currency::Real),
            // ASCII fallback for inputs typed without the accent.
            "Dólar" | "Dolar" => Ok(Currency::Dolar),
            other => Err(DashboardError::InvalidRecord(format!(
                "unknown currency `{other}`"
            ))),
        }
    }
}

use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;

use crate::{bar_kind::BarKind, unit::Unit};

/// The fixed catalog of bars and handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Bar {
    #[default]
    Olympic,
    Womens,
    EzCurl,
    Trap,
    Dumbbell,
    Custom,
}

impl Bar {
    pub const ALL: [Bar; 6] = [
        Bar::Olympic,
        Bar::Womens,
        Bar::EzCurl,
        Bar::Trap,
        Bar::Dumbbell,
        Bar::Custom,
    ];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Bar::Olympic => "olympic",
            Bar::Womens => "womens",
            Bar::EzCurl => "ez-curl",
            Bar::Trap => "trap",
            Bar::Dumbbell => "dumbbell",
            Bar::Custom => "custom",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Bar::Olympic => "Olympic Barbell",
            Bar::Womens => "Women's Barbell",
            Bar::EzCurl => "EZ Curl Bar",
            Bar::Trap => "Trap Bar",
            Bar::Dumbbell => "Dumbbell Handle",
            Bar::Custom => "Custom",
        }
    }

    #[must_use]
    pub fn kind(&self) -> BarKind {
        match self {
            Bar::Dumbbell => BarKind::Dumbbell,
            _ => BarKind::Barbell,
        }
    }

    /// Catalog weight in `unit`. The pound figures are the conventional
    /// ones, not converted from kilograms.
    #[must_use]
    pub fn default_weight(&self, unit: Unit) -> f64 {
        let (kg, lb) = match self {
            Bar::Olympic => (20.0, 45.0),
            Bar::Womens => (15.0, 35.0),
            Bar::EzCurl => (11.0, 25.0),
            Bar::Trap => (25.0, 55.0),
            Bar::Dumbbell => (0.5, 1.0),
            Bar::Custom => (0.0, 0.0),
        };
        match unit {
            Unit::Kg => kg,
            Unit::Lb => lb,
        }
    }

    /// The bar weight in `unit`. Custom bars and dumbbell handles use the
    /// user's own value, which is read as-is in the current unit.
    #[must_use]
    pub fn weight(&self, unit: Unit, custom_bar_weight: f64, handle_weight: f64) -> f64 {
        match self {
            Bar::Custom => custom_bar_weight,
            Bar::Dumbbell => handle_weight,
            _ => self.default_weight(unit),
        }
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Bar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bar::ALL
            .into_iter()
            .find(|bar| bar.id() == s)
            .ok_or_else(|| format!("Unknown equipment '{s}'."))
    }
}

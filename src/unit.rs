//! Display units and the single kg/lb conversion used everywhere else.
//!
//! All calculation happens in kilograms; a [`Unit`] only decides how numbers
//! are read from and shown to the user.

use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;
use thiserror::Error;

pub const KG_TO_LB: f64 = 2.20462;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Unit {
    #[default]
    Kg,
    Lb,
}

#[derive(Error, Debug, PartialEq)]
pub enum UnitError {
    #[error("Invalid unit '{0}', expected kg or lb.")]
    InvalidUnit(String),
    #[error("Invalid weight '{0}'.")]
    InvalidWeight(String),
}

impl Unit {
    #[must_use]
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            Unit::Kg => value,
            Unit::Lb => value / KG_TO_LB,
        }
    }

    #[must_use]
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            Unit::Kg => kg,
            Unit::Lb => kg * KG_TO_LB,
        }
    }

    /// Granularity of the target weight input.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Unit::Kg => 0.5,
            Unit::Lb => 1.0,
        }
    }

    /// `kg` shown in this unit, rounded to one decimal in pounds.
    #[must_use]
    pub fn display(self, kg: f64) -> f64 {
        match self {
            Unit::Kg => kg,
            Unit::Lb => round_to(self.from_kg(kg), 10.0),
        }
    }

    /// Like [`Unit::display`] with two decimals, for listing plate sizes.
    #[must_use]
    pub fn display_precise(self, kg: f64) -> f64 {
        match self {
            Unit::Kg => kg,
            Unit::Lb => round_to(self.from_kg(kg), 100.0),
        }
    }
}

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lb => write!(f, "lb"),
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lb),
            _ => Err(UnitError::InvalidUnit(s.to_string())),
        }
    }
}

/// A number typed by the user, optionally suffixed with its unit (`100`, `100kg`, `225lb`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Weight {
    /// Canonical kilograms, reading an unsuffixed value in `fallback`.
    #[must_use]
    pub fn to_kg(&self, fallback: Unit) -> f64 {
        self.unit.unwrap_or(fallback).to_kg(self.value)
    }
}

impl FromStr for Weight {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Only a trailing run of letters is a unit, so `1e2` stays a number.
        let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let suffix = &s[number.len()..];

        let value = number
            .trim()
            .parse::<f64>()
            .map_err(|_| UnitError::InvalidWeight(s.to_string()))?;
        if !value.is_finite() {
            return Err(UnitError::InvalidWeight(s.to_string()));
        }

        let unit = match suffix {
            "" => None,
            suffix => Some(suffix.parse::<Unit>()?),
        };

        Ok(Weight { value, unit })
    }
}

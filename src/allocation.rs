use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

use crate::plate::PlateCount;

/// The plates chosen for one side, the resulting total, and how far short of the
/// requested target it falls.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Allocation {
    plates: Vec<PlateCount>,
    total_weight: f64,
    shortfall: f64,
}

impl Allocation {
    #[must_use]
    pub fn new(plates: Vec<PlateCount>, total_weight: f64, shortfall: f64) -> Self {
        Allocation {
            plates,
            total_weight,
            shortfall,
        }
    }

    #[must_use]
    pub fn empty(fixed_weight: f64) -> Self {
        Allocation::new(Vec::new(), fixed_weight, 0.0)
    }

    /// Heaviest first, one entry per weight.
    #[must_use]
    pub fn plates(&self) -> &[PlateCount] {
        &self.plates
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn shortfall(&self) -> f64 {
        self.shortfall
    }

    #[must_use]
    pub fn loaded_per_side(&self) -> f64 {
        self.plates.iter().map(PlateCount::load).sum()
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.shortfall == 0.0
    }

    /// Nothing to load and nothing missing: the bar alone is the answer.
    #[must_use]
    pub fn is_bar_only(&self) -> bool {
        self.plates.is_empty() && self.is_exact()
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plates = self
            .plates
            .iter()
            .map(|p| format!("{}x{}", p.count, p.weight))
            .join(", ");

        write!(f, "[{plates}] ({}kg", self.total_weight)?;
        if !self.is_exact() {
            write!(f, ", {}kg short", self.shortfall)?;
        }
        write!(f, ")")
    }
}

use serde::{Deserialize, Serialize};

/// A plate denomination and how many of it are available per side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    weight: f64,
    quantity: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64, quantity: u32) -> Self {
        Plate { weight, quantity }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Plates with zero quantity or a non-positive weight never load the bar.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.quantity > 0 && self.weight > 0.0
    }

    #[must_use]
    pub fn from_weights(weights: &[f64], quantity: u32) -> Vec<Plate> {
        weights.iter().map(|w| Plate::new(*w, quantity)).collect()
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Vec<Plate> {
        pairs
            .iter()
            .map(|(weight, quantity)| Plate::new(*weight, *quantity))
            .collect()
    }
}

/// How many plates of one weight go on each side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u32,
}

impl PlateCount {
    #[must_use]
    pub fn new(weight: f64, count: u32) -> Self {
        PlateCount { weight, count }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn load(&self) -> f64 {
        self.weight * f64::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_requires_positive_weight_and_quantity() {
        assert!(Plate::new(2.5, 1).is_usable());
        assert!(!Plate::new(2.5, 0).is_usable());
        assert!(!Plate::new(0.0, 4).is_usable());
        assert!(!Plate::new(-5.0, 4).is_usable());
    }

    #[test]
    fn from_weights_uses_shared_quantity() {
        let plates = Plate::from_weights(&[20.0, 10.0], 2);
        assert_eq!(plates, vec![Plate::new(20.0, 2), Plate::new(10.0, 2)]);
    }

    #[test]
    fn plate_count_load() {
        assert!((PlateCount::new(1.25, 3).load() - 3.75).abs() < 1e-9);
    }
}

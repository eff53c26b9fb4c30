use crate::{allocation::Allocation, allocator, plate::Plate};

/// Everything the allocator needs for one calculation, in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub target_total_weight: f64,
    pub fixed_weight: f64,
    pub plates: Vec<Plate>,
    pub side_count: u32,
}

impl LoadRequest {
    #[must_use]
    pub fn new(target_total_weight: f64, fixed_weight: f64, plates: Vec<Plate>) -> Self {
        LoadRequest {
            target_total_weight,
            fixed_weight,
            plates,
            side_count: 2,
        }
    }

    #[must_use]
    pub fn with_sides(mut self, side_count: u32) -> Self {
        self.side_count = side_count;
        self
    }

    #[must_use]
    pub fn per_side_target(&self) -> f64 {
        let weight_to_load = self.target_total_weight - self.fixed_weight;
        if weight_to_load <= 0.0 {
            0.0
        } else {
            weight_to_load / f64::from(self.side_count.max(1))
        }
    }

    #[must_use]
    pub fn allocate(&self) -> Allocation {
        allocator::allocate(
            self.target_total_weight,
            self.fixed_weight,
            &self.plates,
            self.side_count,
        )
    }
}

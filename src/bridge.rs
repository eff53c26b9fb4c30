use crate::allocation::Allocation;
use crate::allocator::allocate;
use crate::plate::{Plate, PlateCount};

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Plate;
        type PlateCount;
        type Allocation;

        #[swift_bridge(init)]
        fn new(weight: f64, quantity: u32) -> Plate;
        fn weight(self: &Plate) -> f64;
        fn quantity(self: &Plate) -> u32;

        fn allocate_plates(
            target_total_weight: f64,
            fixed_weight: f64,
            plates: Vec<Plate>,
            side_count: u32,
        ) -> Allocation;

        fn total_weight(self: &Allocation) -> f64;
        fn shortfall(self: &Allocation) -> f64;
        fn plate_counts(self: &Allocation) -> Vec<PlateCount>;

        fn weight(self: &PlateCount) -> f64;
        fn count(self: &PlateCount) -> u32;
    }
}

#[allow(clippy::needless_pass_by_value)]
fn allocate_plates(
    target_total_weight: f64,
    fixed_weight: f64,
    plates: Vec<Plate>,
    side_count: u32,
) -> Allocation {
    allocate(target_total_weight, fixed_weight, &plates, side_count)
}

impl Allocation {
    /// Owned copy of the selection for callers across the FFI boundary.
    #[must_use]
    pub fn plate_counts(&self) -> Vec<PlateCount> {
        self.plates().to_vec()
    }
}

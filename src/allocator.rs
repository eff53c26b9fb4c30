//! Greedy, quantity-bounded plate selection.
//!
//! The allocator always takes as many of the heaviest available plate as fit
//! before moving to the next lighter one, the same way plates are loaded by
//! hand. It does not search for a closer combination when greedy falls short.

use itertools::Itertools;

use crate::{allocation::Allocation, plate::Plate, plate::PlateCount};

/// Remaining per-side weight is rounded to this many thousandths after every
/// subtraction so binary drift cannot turn an exact fit into a shortfall.
const PRECISION: f64 = 1000.0;

#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

/// Select plates for `target_total_weight` on a bar weighing `fixed_weight`.
///
/// `side_count` is the number of mirrored sides (2 for a barbell or a
/// dumbbell). A count of 0 is treated as 1. The inventory is only read.
///
/// Never fails: a target that cannot be met exactly is reported through
/// [`Allocation::shortfall`].
#[must_use]
pub fn allocate(
    target_total_weight: f64,
    fixed_weight: f64,
    plates: &[Plate],
    side_count: u32,
) -> Allocation {
    let weight_to_load = target_total_weight - fixed_weight;
    if weight_to_load <= 0.0 {
        return Allocation::empty(fixed_weight);
    }

    let sides = f64::from(side_count.max(1));
    let mut remaining = weight_to_load / sides;
    let mut selected: Vec<PlateCount> = Vec::new();

    for plate in plates
        .iter()
        .filter(|plate| plate.is_usable())
        .sorted_by(|a, b| b.weight().total_cmp(&a.weight()))
    {
        let count = fit(remaining, plate);
        if count == 0 {
            continue;
        }

        // Duplicate weights are separate pools but share one output entry.
        match selected.last_mut() {
            Some(last) if last.weight == plate.weight() => last.count += count,
            _ => selected.push(PlateCount::new(plate.weight(), count)),
        }

        remaining = round3(remaining - plate.weight() * f64::from(count));
    }

    let loaded_per_side: f64 = selected.iter().map(PlateCount::load).sum();
    let total_weight = fixed_weight + loaded_per_side * sides;
    let shortfall = round3(target_total_weight - total_weight);

    Allocation::new(
        selected,
        total_weight,
        if shortfall > 0.0 { shortfall } else { 0.0 },
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fit(remaining: f64, plate: &Plate) -> u32 {
    let by_weight = (remaining / plate.weight()).floor();
    if by_weight >= 1.0 {
        // `as` saturates, so an infinite remainder just means "all of them".
        (by_weight as u32).min(plate.quantity())
    } else {
        0
    }
}

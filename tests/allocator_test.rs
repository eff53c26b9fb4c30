//! Allocator scenarios and the properties every allocation must satisfy.

use plates_rs::{
    allocation::Allocation,
    allocator::allocate,
    plate::{Plate, PlateCount},
};

const EPSILON: f64 = 1e-6;

fn standard_plates() -> Vec<Plate> {
    Plate::from_weights(&[25.0, 20.0, 15.0, 10.0, 5.0, 2.5], 2)
}

fn dumbbell_plates() -> Vec<Plate> {
    Plate::from_weights(&[10.0, 5.0, 2.5, 1.25, 1.0, 0.5], 4)
}

fn assert_allocation(allocation: &Allocation, plates: &[(f64, u32)], total: f64, shortfall: f64) {
    let expected = plates
        .iter()
        .map(|(weight, count)| PlateCount::new(*weight, *count))
        .collect::<Vec<_>>();
    assert_eq!(allocation.plates(), expected.as_slice());
    assert!(
        (allocation.total_weight() - total).abs() < EPSILON,
        "total {} != {total}",
        allocation.total_weight()
    );
    assert!(
        (allocation.shortfall() - shortfall).abs() < EPSILON,
        "shortfall {} != {shortfall}",
        allocation.shortfall()
    );
}

// -----------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------

#[test]
fn hundred_kilos_on_olympic_bar() {
    let allocation = allocate(100.0, 20.0, &standard_plates(), 2);
    assert_allocation(&allocation, &[(25.0, 1), (15.0, 1)], 100.0, 0.0);
}

#[test]
fn half_kilo_per_side_is_unreachable() {
    let allocation = allocate(61.0, 20.0, &standard_plates(), 2);
    assert_allocation(&allocation, &[(20.0, 1)], 60.0, 1.0);
}

#[test]
fn bar_weight_alone() {
    let allocation = allocate(20.0, 20.0, &standard_plates(), 2);
    assert_allocation(&allocation, &[], 20.0, 0.0);
}

#[test]
fn single_plates_of_each_size() {
    let plates = Plate::from_pairs(&[(20.0, 1), (10.0, 1)]);
    let allocation = allocate(80.0, 20.0, &plates, 2);
    assert_allocation(&allocation, &[(20.0, 1), (10.0, 1)], 80.0, 0.0);
}

#[test]
fn runs_out_of_plates() {
    let plates = Plate::from_pairs(&[(10.0, 1)]);
    let allocation = allocate(50.0, 0.0, &plates, 2);
    assert_allocation(&allocation, &[(10.0, 1)], 20.0, 30.0);
}

#[test]
fn uses_every_big_plate() {
    let allocation = allocate(220.0, 20.0, &standard_plates(), 2);
    assert_allocation(&allocation, &[(25.0, 2), (20.0, 2), (10.0, 1)], 220.0, 0.0);
}

#[test]
fn empty_inventory_reports_full_shortfall() {
    let allocation = allocate(60.0, 20.0, &[], 2);
    assert_allocation(&allocation, &[], 20.0, 40.0);

    let zeroes = Plate::from_weights(&[20.0, 10.0], 0);
    let allocation = allocate(60.0, 20.0, &zeroes, 2);
    assert_allocation(&allocation, &[], 20.0, 40.0);
}

#[test]
fn single_sided_loading() {
    let allocation = allocate(70.0, 20.0, &standard_plates(), 1);
    assert_allocation(&allocation, &[(25.0, 2)], 70.0, 0.0);
}

#[test]
fn zero_sides_are_clamped_to_one() {
    let clamped = allocate(70.0, 20.0, &standard_plates(), 0);
    assert_eq!(clamped, allocate(70.0, 20.0, &standard_plates(), 1));
}

#[test]
fn greedy_does_not_search_for_exact_fit() {
    // 30 per side is reachable as 15 + 15, but greedy grabs the 25 first.
    let plates = Plate::from_pairs(&[(25.0, 1), (15.0, 2)]);
    let allocation = allocate(60.0, 0.0, &plates, 2);
    assert_allocation(&allocation, &[(25.0, 1)], 50.0, 10.0);
}

#[test]
fn many_small_plates_do_not_drift() {
    let plates = Plate::from_pairs(&[(0.1, 100), (0.05, 10)]);
    let allocation = allocate(15.0, 0.0, &plates, 2);
    assert_allocation(&allocation, &[(0.1, 75)], 15.0, 0.0);

    let allocation = allocate(20.5, 0.5, &dumbbell_plates(), 2);
    assert_allocation(&allocation, &[(10.0, 1)], 20.5, 0.0);
}

// -----------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------

fn targets() -> impl Iterator<Item = f64> {
    (0..=600).map(|i| f64::from(i) * 0.5)
}

#[test]
fn conservation_holds() {
    for plates in [standard_plates(), dumbbell_plates()] {
        for target in targets() {
            let allocation = allocate(target, 20.0, &plates, 2);
            let loaded: f64 = allocation.plates().iter().map(PlateCount::load).sum();

            assert!((allocation.total_weight() - (20.0 + loaded * 2.0)).abs() < EPSILON);
            assert!(allocation.shortfall() >= 0.0);
            if target > 20.0 {
                assert!(
                    (target - allocation.total_weight() - allocation.shortfall()).abs() < 1e-3,
                    "target {target}: {allocation}"
                );
            }
        }
    }
}

#[test]
fn below_bar_weight_loads_nothing() {
    for target in [-50.0, 0.0, 10.0, 19.999, 20.0] {
        let allocation = allocate(target, 20.0, &standard_plates(), 2);
        assert_eq!(allocation, Allocation::empty(20.0));
    }
}

#[test]
fn quantities_are_respected() {
    let plates = Plate::from_pairs(&[(20.0, 3), (5.0, 1), (2.5, 5)]);
    for target in targets() {
        let allocation = allocate(target, 0.0, &plates, 2);
        for selected in allocation.plates() {
            let available: u32 = plates
                .iter()
                .filter(|p| p.weight() == selected.weight())
                .map(Plate::quantity)
                .sum();
            assert!(selected.count() <= available);
        }
    }
}

#[test]
fn input_is_not_mutated() {
    let plates = Plate::from_pairs(&[(5.0, 2), (25.0, 1), (10.0, 0), (20.0, 2)]);
    let before = plates.clone();
    let _ = allocate(150.0, 20.0, &plates, 2);
    assert_eq!(plates, before);
}

#[test]
fn order_does_not_matter() {
    let plates = standard_plates();
    let mut reversed = plates.clone();
    reversed.reverse();
    let mut shuffled = plates.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 5);

    for target in targets() {
        let expected = allocate(target, 20.0, &plates, 2);
        assert_eq!(allocate(target, 20.0, &reversed, 2), expected);
        assert_eq!(allocate(target, 20.0, &shuffled, 2), expected);
    }
}

#[test]
fn heavier_plates_are_exhausted_first() {
    let plates = standard_plates();
    for target in targets() {
        let allocation = allocate(target, 20.0, &plates, 2);
        let per_side = (target - 20.0) / 2.0;
        let mut remaining = per_side;

        for plate in &plates {
            let used = allocation
                .plates()
                .iter()
                .find(|p| p.weight() == plate.weight())
                .map_or(0, PlateCount::count);
            remaining -= plate.weight() * f64::from(used);
            // Any spare plate of this size would no longer have fit.
            if used < plate.quantity() {
                assert!(remaining < plate.weight() + 1e-3, "target {target}: {allocation}");
            }
        }
    }
}

#[test]
fn selection_is_heaviest_first_without_duplicates() {
    let plates = Plate::from_pairs(&[(5.0, 1), (10.0, 1), (5.0, 1), (10.0, 1)]);
    let allocation = allocate(60.0, 0.0, &plates, 2);
    assert_allocation(&allocation, &[(10.0, 2), (5.0, 2)], 60.0, 0.0);
}

use crate::{allocation::Allocation, bar_kind::BarKind, diagram, unit::Unit};

/// Renders an allocation for people: the diagram, what goes on each side,
/// the total, and how far off the target it is.
#[must_use]
pub fn render(
    allocation: &Allocation,
    bar_weight_kg: f64,
    unit: Unit,
    kind: BarKind,
    color: bool,
) -> String {
    if allocation.is_bar_only() {
        return format!("Just the {}, no plates needed.", kind.fixed_part());
    }

    let mut out = diagram::render(allocation.plates(), bar_weight_kg, unit, color);
    out.push_str("\n\n");

    out.push_str("Per side");
    if kind == BarKind::Dumbbell {
        out.push_str(" (per dumbbell)");
    }
    out.push('\n');

    for plate in allocation.plates() {
        out.push_str(&format!("  {} × {} {unit}\n", plate.count, unit.display(plate.weight)));
    }

    let total = unit.display(allocation.total_weight());
    out.push_str(&format!("Total: {total} {unit}"));

    if allocation.shortfall() > 0.0 {
        out.push_str(&format!(
            "\nCannot reach exact target: {} {unit} short. Loaded {total} {unit} instead.",
            unit.display(allocation.shortfall()),
        ));
    }

    out
}

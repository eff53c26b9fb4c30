//! A text picture of the loaded bar, plates sized by weight.

use itertools::Itertools;

use crate::{plate::PlateCount, unit::Unit};

const PLATE_COLORS: [(f64, &str); 9] = [
    (25.0, "#e74c3c"),
    (20.0, "#3498db"),
    (15.0, "#f1c40f"),
    (10.0, "#2ecc71"),
    (5.0, "#9b59b6"),
    (2.5, "#e67e22"),
    (1.25, "#1abc9c"),
    (1.0, "#34495e"),
    (0.5, "#95a5a6"),
];

const FALLBACK_COLOR: &str = "#7f8c8d";

const MAX_PLATE_WEIGHT: f64 = 25.0;
const MIN_HEIGHT: f64 = 30.0;
const MAX_HEIGHT: f64 = 100.0;

/// Pixels per text row.
const ROW_HEIGHT: f64 = 10.0;

#[must_use]
pub fn plate_color(weight: f64) -> &'static str {
    PLATE_COLORS
        .iter()
        .find(|(w, _)| (w - weight).abs() < f64::EPSILON)
        .map_or(FALLBACK_COLOR, |(_, color)| color)
}

/// Heavier plates are taller; a 25kg plate is the full height.
#[must_use]
pub fn plate_height(weight: f64) -> f64 {
    MIN_HEIGHT + (weight / MAX_PLATE_WEIGHT) * (MAX_HEIGHT - MIN_HEIGHT)
}

/// Above this many plates of one weight a single column stands for all of them.
pub const MAX_DRAWN_PER_WEIGHT: u32 = 6;

/// A drawn plate: its weight, and the count it stands for when it is a stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawn {
    pub weight: f64,
    pub stack: Option<u32>,
}

/// One entry per physical plate, heaviest (innermost) first. Counts above
/// [`MAX_DRAWN_PER_WEIGHT`] collapse into one stacked entry.
#[must_use]
pub fn expand(plates: &[PlateCount]) -> Vec<Drawn> {
    plates
        .iter()
        .flat_map(|p| {
            let (drawn, stack) = if p.count > MAX_DRAWN_PER_WEIGHT {
                (1, Some(p.count))
            } else {
                (p.count, None)
            };
            std::iter::repeat_n(
                Drawn {
                    weight: p.weight,
                    stack,
                },
                drawn as usize,
            )
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rows(weight: f64) -> usize {
    (plate_height(weight) / ROW_HEIGHT).round().max(1.0) as usize
}

struct Column {
    label: String,
    rows: usize,
    color: Option<&'static str>,
}

/// Draws both sides mirrored around the bar, innermost plates next to it.
#[must_use]
pub fn render(plates: &[PlateCount], bar_weight_kg: f64, unit: Unit, color: bool) -> String {
    let expanded = expand(plates);
    let column = |drawn: &Drawn| Column {
        label: match drawn.stack {
            Some(count) => format!("{}x{count}", unit.display(drawn.weight)),
            None => format!("{}", unit.display(drawn.weight)),
        },
        rows: rows(drawn.weight),
        color: color.then(|| plate_color(drawn.weight)),
    };

    let right = expanded.iter().map(column).collect::<Vec<_>>();
    let left = expanded.iter().rev().map(column).collect::<Vec<_>>();

    let width = right.iter().map(|c| c.label.len()).max().unwrap_or(0).max(3);
    let height = right
        .iter()
        .map(|c| c.rows)
        .max()
        .unwrap_or(1)
        .max(3);
    let middle = height / 2;
    let bar_label = format!("{} {unit}", unit.display(bar_weight_kg));
    let shaft = bar_label.len() + 2;

    let mut lines = (0..height)
        .map(|row| {
            let side = |columns: &[Column]| {
                columns
                    .iter()
                    .map(|c| cell(c, row, height, width))
                    .join(" ")
            };
            // One blank each side keeps full-width labels off the shaft.
            let centre = if row == middle {
                format!(" {} ", "=".repeat(shaft))
            } else {
                " ".repeat(shaft + 2)
            };
            format!("{}{}{}", side(&left), centre, side(&right))
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();

    let left_width = (left.len() * (width + 1)).saturating_sub(1);
    lines.push(format!("{}  {bar_label}", " ".repeat(left_width)));
    lines.join("\n")
}

fn cell(column: &Column, row: usize, height: usize, width: usize) -> String {
    let top = (height - column.rows) / 2;
    if row < top || row >= top + column.rows {
        return " ".repeat(width);
    }

    let text = if row == height / 2 {
        format!("{:^width$}", column.label)
    } else {
        "#".repeat(width)
    };

    match column.color {
        Some(hex) => paint(&text, hex),
        None => text,
    }
}

fn paint(text: &str, hex: &str) -> String {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .unwrap_or(0)
    };
    format!(
        "\x1b[38;2;{};{};{}m{text}\x1b[0m",
        channel(1..3),
        channel(3..5),
        channel(5..7)
    )
}

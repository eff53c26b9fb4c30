use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    Dumbbell,
    Barbell,
}

impl BarKind {
    /// What sits between the plates.
    #[must_use]
    pub fn fixed_part(&self) -> &'static str {
        match self {
            BarKind::Dumbbell => "handle",
            BarKind::Barbell => "bar",
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            BarKind::Dumbbell => "Dumbbell",
            BarKind::Barbell => "Barbell",
        })
    }
}

use crate::{
    allocation::Allocation,
    allocator::round3,
    bar::Bar,
    bar_kind::BarKind,
    inventory::Inventory,
    load_request::LoadRequest,
    preferences::Preferences,
    unit::Unit,
};

/// Everything a calculation depends on, held explicitly and handed to the
/// allocator on every recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub target_weight: f64,
    pub unit: Unit,
    pub bar: Bar,
    pub preferences: Preferences,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(100.0, Unit::Kg, Bar::Olympic, Preferences::default())
    }
}

impl AppState {
    #[must_use]
    pub fn new(target_weight: f64, unit: Unit, bar: Bar, preferences: Preferences) -> Self {
        AppState {
            target_weight,
            unit,
            bar,
            preferences,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BarKind {
        self.bar.kind()
    }

    #[must_use]
    pub fn target_kg(&self) -> f64 {
        self.unit.to_kg(self.target_weight)
    }

    /// Bar weight in the display unit.
    #[must_use]
    pub fn bar_weight_display(&self) -> f64 {
        self.bar.weight(
            self.unit,
            self.preferences.custom_bar_weight,
            self.preferences.dumbbell_handle_weight,
        )
    }

    #[must_use]
    pub fn bar_weight_kg(&self) -> f64 {
        self.unit.to_kg(self.bar_weight_display())
    }

    /// Dumbbells draw from their own plate inventory.
    #[must_use]
    pub fn active_plates(&self) -> &Inventory {
        match self.kind() {
            BarKind::Dumbbell => &self.preferences.dumbbell_plates,
            BarKind::Barbell => &self.preferences.barbell_plates,
        }
    }

    pub fn active_plates_mut(&mut self) -> &mut Inventory {
        match self.kind() {
            BarKind::Dumbbell => &mut self.preferences.dumbbell_plates,
            BarKind::Barbell => &mut self.preferences.barbell_plates,
        }
    }

    /// Results are only worth showing for a positive target.
    #[must_use]
    pub fn should_show_result(&self) -> bool {
        self.target_weight > 0.0
    }

    /// Whether the target lands on the input granularity of the current unit.
    #[must_use]
    pub fn target_on_step(&self) -> bool {
        let steps = self.target_weight / self.unit.step();
        round3(steps - steps.round()) == 0.0
    }

    #[must_use]
    pub fn request(&self) -> LoadRequest {
        LoadRequest::new(
            self.target_kg(),
            self.bar_weight_kg(),
            self.active_plates().plates().to_vec(),
        )
    }

    #[must_use]
    pub fn calculate(&self) -> Allocation {
        let request = self.request();
        tracing::debug!(
            target_kg = request.target_total_weight,
            bar_kg = request.fixed_weight,
            per_side_kg = request.per_side_target(),
            plate_types = request.plates.len(),
            "calculating plates"
        );
        request.allocate()
    }
}

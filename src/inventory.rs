use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{allocator::round3, inventory_error::InventoryError, plate::Plate, unit::Unit};

/// Two weights closer than this are the same plate.
const DUPLICATE_TOLERANCE: f64 = 0.001;

/// Plates added through the editor start with a pair.
pub const NEW_PLATE_QUANTITY: u32 = 2;

/// An editable, ordered list of plate types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    plates: Vec<Plate>,
}

impl Inventory {
    #[must_use]
    pub fn new(plates: Vec<Plate>) -> Self {
        Inventory { plates }
    }

    #[must_use]
    pub fn default_barbell() -> Self {
        Inventory::new(Plate::from_weights(&[25.0, 20.0, 15.0, 10.0, 5.0, 2.5], 2))
    }

    #[must_use]
    pub fn default_dumbbell() -> Self {
        Inventory::new(Plate::from_weights(&[10.0, 5.0, 2.5, 1.25, 1.0, 0.5], 4))
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Sets the quantity at `index`, flooring negative values at zero.
    ///
    /// # Errors
    /// If `index` is out of range.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<(), InventoryError> {
        let plate = self
            .plates
            .get_mut(index)
            .ok_or(InventoryError::NoSuchPlate(index))?;
        plate.set_quantity(u32::try_from(quantity.max(0)).unwrap_or(u32::MAX));
        Ok(())
    }

    /// # Errors
    /// If `index` is out of range.
    pub fn increment(&mut self, index: usize) -> Result<(), InventoryError> {
        let quantity = self.quantity_at(index)?;
        self.set_quantity(index, quantity + 1)
    }

    /// # Errors
    /// If `index` is out of range.
    pub fn decrement(&mut self, index: usize) -> Result<(), InventoryError> {
        let quantity = self.quantity_at(index)?;
        self.set_quantity(index, quantity - 1)
    }

    /// # Errors
    /// If `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Plate, InventoryError> {
        if index >= self.plates.len() {
            return Err(InventoryError::NoSuchPlate(index));
        }
        Ok(self.plates.remove(index))
    }

    /// Adds a plate of `weight` (given in `unit`) with the default quantity
    /// and re-sorts heaviest first. Returns the position of the new plate.
    ///
    /// # Errors
    /// If the weight is not a positive number, or rounds to within a gram
    /// of a plate that is already listed.
    pub fn add(&mut self, weight: f64, unit: Unit) -> Result<usize, InventoryError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(InventoryError::NonPositiveWeight(weight));
        }

        let weight_kg = round3(unit.to_kg(weight));
        if self
            .plates
            .iter()
            .any(|plate| (plate.weight() - weight_kg).abs() < DUPLICATE_TOLERANCE)
        {
            return Err(InventoryError::DuplicateWeight(weight_kg));
        }

        self.plates.push(Plate::new(weight_kg, NEW_PLATE_QUANTITY));
        self.plates = self
            .plates
            .iter()
            .copied()
            .sorted_by(|a, b| b.weight().total_cmp(&a.weight()))
            .collect();

        Ok(self
            .plates
            .iter()
            .position(|plate| plate.weight() == weight_kg)
            .unwrap_or_default())
    }

    fn quantity_at(&self, index: usize) -> Result<i64, InventoryError> {
        self.plates
            .get(index)
            .map(|plate| i64::from(plate.quantity()))
            .ok_or(InventoryError::NoSuchPlate(index))
    }
}

impl From<Vec<Plate>> for Inventory {
    fn from(plates: Vec<Plate>) -> Self {
        Inventory::new(plates)
    }
}

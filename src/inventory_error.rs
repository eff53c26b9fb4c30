use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    #[error("Plate weight must be a positive number, got {0}.")]
    NonPositiveWeight(f64),
    #[error("A {0}kg plate is already in the inventory.")]
    DuplicateWeight(f64),
    #[error("No plate at index {0}.")]
    NoSuchPlate(usize),
}

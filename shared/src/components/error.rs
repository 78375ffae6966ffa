use thiserror::Error;

/// Errors that can occur while editing an inventory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Slot position outside the fixed inventory size
    #[error("Inventory slot {position} out of range (size: {size})")]
    SlotOutOfRange {
        position: usize,
        size: usize,
    },
}

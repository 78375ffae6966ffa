use thiserror::Error;

use crate::world::error::EntityRegistryError;

/// Errors reported while applying a single notification
///
/// None of these are fatal to the client: the failing notification is
/// skipped and processing continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error(transparent)]
    Registry(#[from] EntityRegistryError),

    /// Notification targets the local player, but none has been focused yet
    #[error("Cannot apply {operation}: no locally controlled player")]
    NoLocalPlayer {
        operation: &'static str,
    },

    /// Entity lacks a component the notification needs
    #[error("Entity {entity_id} has no {component} component")]
    ComponentMissing {
        entity_id: String,
        component: &'static str,
    },
}

use thiserror::Error;

/// Errors that can occur while mapping remote entities onto local ones
///
/// The registry is the single source of truth for which remote entities have
/// a local mirror. These errors signal that the server and the client disagree
/// about that set; they are reported, never papered over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityRegistryError {
    /// Remote entity already has a local mirror
    #[error("Remote entity {entity_id} is already registered")]
    EntityAlreadyRegistered {
        entity_id: String,
    },

    /// Local entity already backs a different remote entity
    #[error("Local entity {entity_id} is already mapped to another remote entity")]
    LocalEntityAlreadyMapped {
        entity_id: String,
    },

    /// Remote entity has no local mirror
    #[error("Remote entity {entity_id} is not registered - operation '{operation}' requires registration")]
    EntityNotRegistered {
        entity_id: String,
        operation: &'static str,
    },
}

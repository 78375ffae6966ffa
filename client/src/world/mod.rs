pub mod entity_registry;
pub mod entity_synchronizer;
pub mod error;
pub mod transition_tracker;

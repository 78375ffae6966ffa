//! # Realm Client
//! Applies the notifications a realm server pushes to a game client onto a
//! local entity/component world, and derives UI and feedback effects from
//! the state changes it observes.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use realm_shared as shared;

mod client_config;
mod context;
mod effects;
mod error;
mod inventory;
mod notification_processor;
mod room;
mod session;
mod world;

pub use client_config::ClientConfig;
pub use context::{
    feedback::{CameraShaker, SoundPlayer},
    screen::{ConsoleView, LobbyView, RoomView, ScreenContext},
};
pub use effects::effect_dispatcher::EffectDispatcher;
pub use error::NotificationError;
pub use inventory::inventory_reconciler::{InventoryOutcome, InventoryReconciler};
pub use notification_processor::NotificationProcessor;
pub use room::membership_router::{MembershipRouter, RouteOutcome};
pub use session::Session;
pub use world::{
    entity_registry::EntityRegistry,
    entity_synchronizer::{EntitySynchronizer, SyncOutcome},
    error::EntityRegistryError,
    transition_tracker::{DamageReaction, HealthSample, TransitionTracker},
};

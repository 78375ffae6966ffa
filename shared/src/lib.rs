//! # Realm Shared
//! Data model shared between the realm server & client: entity ids, the
//! component trait and game components, the lobby model and the closed set of
//! notifications the server pushes to clients.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod components;
mod lobby;
mod messages;
mod types;
mod world;

pub use components::{
    error::InventoryError,
    health::Health,
    inventory::{Inventory, Item},
    markers::{Focused, Physics},
    movement::{Destination, Heading, Movement},
    position::WorldPos,
};
pub use lobby::{
    player::{Player, Team},
    room::Room,
};
pub use messages::{
    console::{ConsoleMessage, MessageKind},
    entity_update::EntityUpdate,
    notification::{Notification, NotificationKind},
    notifications::{
        InventoryUpdate, JoinRoomNotification, MovementNotification, NewRoomNotification,
        RemoveEntity, SoundNotification,
    },
};
pub use types::{RemoteEntity, RoomId, SlotPosition, SoundNumber};
pub use world::{
    component::{
        component_kind::ComponentKind,
        replicate::{Component, Replicate},
    },
    world_type::{WorldMutType, WorldRefType},
};

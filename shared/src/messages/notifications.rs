use std::collections::BTreeMap;

use crate::{
    components::{inventory::Item, movement::Destination},
    lobby::{player::Player, room::Room},
    types::{RemoteEntity, SlotPosition, SoundNumber},
};

/// The server stopped tracking an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveEntity {
    pub entity_id: RemoteEntity,
}

impl RemoveEntity {
    pub fn new(entity_id: RemoteEntity) -> Self {
        Self { entity_id }
    }
}

/// Slot changes for the local player's inventory. A `None` value empties the
/// slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryUpdate {
    updates: BTreeMap<SlotPosition, Option<Item>>,
}

impl InventoryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, position: SlotPosition, item: Item) -> Self {
        self.updates.insert(position, Some(item));
        self
    }

    pub fn clear(mut self, position: SlotPosition) -> Self {
        self.updates.insert(position, None);
        self
    }

    pub fn updates(&self) -> &BTreeMap<SlotPosition, Option<Item>> {
        &self.updates
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementNotification {
    pub player_id: RemoteEntity,
    pub destination: Destination,
}

impl MovementNotification {
    pub fn new(player_id: RemoteEntity, destination: Destination) -> Self {
        Self {
            player_id,
            destination,
        }
    }
}

/// A player entered (`enter == true`) or left the displayed room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinRoomNotification {
    pub player: Player,
    pub enter: bool,
}

impl JoinRoomNotification {
    pub fn entered(player: Player) -> Self {
        Self {
            player,
            enter: true,
        }
    }

    pub fn left(player: Player) -> Self {
        Self {
            player,
            enter: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRoomNotification {
    pub room: Room,
}

impl NewRoomNotification {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundNotification {
    pub sound_number: SoundNumber,
}

impl SoundNotification {
    pub fn new(sound_number: SoundNumber) -> Self {
        Self { sound_number }
    }
}

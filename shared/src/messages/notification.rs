use crate::messages::{
    console::ConsoleMessage,
    entity_update::EntityUpdate,
    notifications::{
        InventoryUpdate, JoinRoomNotification, MovementNotification, NewRoomNotification,
        RemoveEntity, SoundNotification,
    },
};

/// Every notification the server can push to a game client.
#[derive(Clone, Debug)]
pub enum Notification {
    EntityUpdate(EntityUpdate),
    RemoveEntity(RemoveEntity),
    InventoryUpdate(InventoryUpdate),
    MovementNotification(MovementNotification),
    JoinRoom(JoinRoomNotification),
    NewRoom(NewRoomNotification),
    ConsoleMessage(ConsoleMessage),
    SoundNotification(SoundNotification),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    EntityUpdate,
    RemoveEntity,
    InventoryUpdate,
    MovementNotification,
    JoinRoom,
    NewRoom,
    ConsoleMessage,
    SoundNotification,
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::EntityUpdate(_) => NotificationKind::EntityUpdate,
            Self::RemoveEntity(_) => NotificationKind::RemoveEntity,
            Self::InventoryUpdate(_) => NotificationKind::InventoryUpdate,
            Self::MovementNotification(_) => NotificationKind::MovementNotification,
            Self::JoinRoom(_) => NotificationKind::JoinRoom,
            Self::NewRoom(_) => NotificationKind::NewRoom,
            Self::ConsoleMessage(_) => NotificationKind::ConsoleMessage,
            Self::SoundNotification(_) => NotificationKind::SoundNotification,
        }
    }
}

impl From<EntityUpdate> for Notification {
    fn from(value: EntityUpdate) -> Self {
        Self::EntityUpdate(value)
    }
}

impl From<RemoveEntity> for Notification {
    fn from(value: RemoveEntity) -> Self {
        Self::RemoveEntity(value)
    }
}

impl From<InventoryUpdate> for Notification {
    fn from(value: InventoryUpdate) -> Self {
        Self::InventoryUpdate(value)
    }
}

impl From<MovementNotification> for Notification {
    fn from(value: MovementNotification) -> Self {
        Self::MovementNotification(value)
    }
}

impl From<JoinRoomNotification> for Notification {
    fn from(value: JoinRoomNotification) -> Self {
        Self::JoinRoom(value)
    }
}

impl From<NewRoomNotification> for Notification {
    fn from(value: NewRoomNotification) -> Self {
        Self::NewRoom(value)
    }
}

impl From<ConsoleMessage> for Notification {
    fn from(value: ConsoleMessage) -> Self {
        Self::ConsoleMessage(value)
    }
}

impl From<SoundNotification> for Notification {
    fn from(value: SoundNotification) -> Self {
        Self::SoundNotification(value)
    }
}

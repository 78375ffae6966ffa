use realm_shared::{Room, SlotPosition};

/// The UI layer as seen by the notification processor.
///
/// Whichever screen is currently shown decides which of the optional views
/// it exposes. A `None` means that view is not active and notifications that
/// target it are dropped.
pub trait ScreenContext<E> {
    /// The entity the local user controls has just been materialized.
    fn local_player_ready(&mut self, entity: E);

    /// The local player's inventory changed and should be redrawn.
    fn refresh_inventory(&mut self, slot_hint: SlotPosition);

    fn room(&mut self) -> Option<&mut dyn RoomView>;
    fn lobby(&mut self) -> Option<&mut dyn LobbyView>;
    fn console(&mut self) -> Option<&mut dyn ConsoleView>;
}

/// A screen displaying the members of one room.
pub trait RoomView {
    fn room_mut(&mut self) -> &mut Room;
    /// Membership changed, redraw the player list.
    fn update_players(&mut self);
}

/// A screen listing the rooms that can be joined.
pub trait LobbyView {
    fn room_created(&mut self, room: Room);
}

pub trait ConsoleView {
    fn add_info(&mut self, message: &str);
    fn add_error(&mut self, message: &str);
    fn add_combat(&mut self, message: &str);
    fn add_warning(&mut self, message: &str);
}

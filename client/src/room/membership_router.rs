use log::debug;

use realm_shared::{JoinRoomNotification, NewRoomNotification};

use crate::context::screen::ScreenContext;

/// Whether a routed notification reached an active view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Applied,
    Dropped,
}

/// Forwards lobby notifications to the room or lobby view, when one is
/// showing. The views own membership state while active, so nothing is
/// queued for later.
pub struct MembershipRouter;

impl MembershipRouter {
    pub fn join<E>(screen: &mut dyn ScreenContext<E>, notification: JoinRoomNotification) -> RouteOutcome {
        let Some(view) = screen.room() else {
            debug!("Dropping room membership change for {}: no room view", notification.player.name);
            return RouteOutcome::Dropped;
        };

        let room = view.room_mut();
        if notification.enter {
            room.add(notification.player);
        } else {
            room.remove(&notification.player);
        }
        view.update_players();
        RouteOutcome::Applied
    }

    pub fn new_room<E>(screen: &mut dyn ScreenContext<E>, notification: NewRoomNotification) -> RouteOutcome {
        let Some(view) = screen.lobby() else {
            debug!("Dropping new room {}: no lobby view", notification.room.id());
            return RouteOutcome::Dropped;
        };
        view.room_created(notification.room);
        RouteOutcome::Applied
    }
}

use std::collections::HashSet;

use crate::{lobby::player::Player, types::RoomId};

/// A lobby room and the players currently inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    max_players: usize,
    players: HashSet<Player>,
}

impl Room {
    pub fn new(id: RoomId, max_players: usize) -> Self {
        Self {
            id,
            max_players,
            players: HashSet::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn players(&self) -> &HashSet<Player> {
        &self.players
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    /// Returns `false` if the player was already present.
    pub fn add(&mut self, player: Player) -> bool {
        self.players.insert(player)
    }

    /// Returns `false` if the player was not present.
    pub fn remove(&mut self, player: &Player) -> bool {
        self.players.remove(player)
    }
}

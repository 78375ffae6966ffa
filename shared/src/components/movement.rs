use std::collections::VecDeque;

use crate::{components::position::WorldPos, Component};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

/// A tile the server wants an entity to walk to, and the heading to face
/// while doing so.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Destination {
    pub pos: WorldPos,
    pub heading: Heading,
}

impl Destination {
    pub fn new(pos: WorldPos, heading: Heading) -> Self {
        Self { pos, heading }
    }
}

/// Pending movement targets, consumed front to back by the movement system.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    destinations: VecDeque<Destination>,
}

impl Movement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, destination: Destination) {
        self.destinations.push_back(destination);
    }

    pub fn next(&mut self) -> Option<Destination> {
        self.destinations.pop_front()
    }

    pub fn peek(&self) -> Option<&Destination> {
        self.destinations.front()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl Component for Movement {}

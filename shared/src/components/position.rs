use crate::Component;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorldPos {
    pub map: u16,
    pub x: u16,
    pub y: u16,
}

impl WorldPos {
    pub fn new(map: u16, x: u16, y: u16) -> Self {
        Self { map, x, y }
    }
}

impl Component for WorldPos {}

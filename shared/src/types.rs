use std::fmt;

pub type SoundNumber = u32;
pub type SlotPosition = usize;
pub type RoomId = u32;

/// Entity identifier assigned by the server. Stable for as long as the
/// entity lives on the server; has no relation to any local world handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteEntity(u64);

impl RemoteEntity {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RemoteEntity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RemoteEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RemoteEntity({})", self.0)
    }
}

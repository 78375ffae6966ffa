pub mod player;
pub mod room;

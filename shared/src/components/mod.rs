pub mod error;
pub mod health;
pub mod inventory;
pub mod markers;
pub mod movement;
pub mod position;

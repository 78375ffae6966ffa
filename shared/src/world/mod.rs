pub mod component;
pub mod world_type;

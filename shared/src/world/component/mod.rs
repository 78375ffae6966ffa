pub mod component_kind;
pub mod replicate;

pub mod feedback;
pub mod screen;

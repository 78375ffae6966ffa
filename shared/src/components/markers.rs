use crate::Component;

/// Present on exactly the entity the local user controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Focused;

impl Component for Focused {}

/// Enables client-side movement simulation for an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Physics;

impl Component for Physics {}

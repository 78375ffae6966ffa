use crate::Component;

/// Hit points. `min` is the current value, `max` the cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub min: i32,
    pub max: i32,
}

impl Health {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn full(max: i32) -> Self {
        Self { min: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.min <= 0
    }
}

impl Component for Health {}

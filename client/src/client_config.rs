use std::default::Default;

/// Contains Config properties which will be used by the Client
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Health lost is divided by this to get the camera shake magnitude.
    pub damage_shake_divisor: f32,
    /// Recoil and duration pushed to the camera after every damage shake.
    pub shake_push: (f32, f32),
    /// Slot handed to the inventory view when it is asked to refresh.
    pub inventory_refresh_hint: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            damage_shake_divisor: 10.0,
            shake_push: (5.0, 5.0),
            inventory_refresh_hint: 0,
        }
    }
}

use crate::{components::error::InventoryError, types::SlotPosition, Component};

/// Descriptor of an item occupying an inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub obj_id: u32,
    pub count: u32,
    pub equipped: bool,
}

impl Item {
    pub fn new(obj_id: u32, count: u32) -> Self {
        Self {
            obj_id,
            count,
            equipped: false,
        }
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub const SIZE: usize = 20;

    pub fn new() -> Self {
        Self {
            slots: vec![None; Self::SIZE],
        }
    }

    pub fn get(&self, position: SlotPosition) -> Option<&Item> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// Replaces the whole content of a slot. `None` empties it.
    pub fn set(
        &mut self,
        position: SlotPosition,
        item: Option<Item>,
    ) -> Result<Option<Item>, InventoryError> {
        let Some(slot) = self.slots.get_mut(position) else {
            return Err(InventoryError::SlotOutOfRange {
                position,
                size: Self::SIZE,
            });
        };
        Ok(std::mem::replace(slot, item))
    }

    pub fn clear(&mut self, position: SlotPosition) -> Result<Option<Item>, InventoryError> {
        self.set(position, None)
    }

    /// Occupied slots in position order.
    pub fn items(&self) -> impl Iterator<Item = (SlotPosition, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.as_ref().map(|item| (position, item)))
    }
}

impl Component for Inventory {}

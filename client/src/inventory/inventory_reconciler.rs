use std::fmt::Debug;

use log::{info, warn};

use realm_shared::{Inventory, InventoryUpdate, SlotPosition, WorldMutType};

use crate::error::NotificationError;

/// Result of reconciling one [`InventoryUpdate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryOutcome {
    pub applied: usize,
    /// Positions outside the inventory, skipped.
    pub rejected: Vec<SlotPosition>,
}

/// Writes slot deltas into the local player's [`Inventory`].
pub struct InventoryReconciler;

impl InventoryReconciler {
    pub fn apply<E: Copy + Debug, W: WorldMutType<E>>(
        world: &mut W,
        player: Option<E>,
        update: &InventoryUpdate,
    ) -> Result<InventoryOutcome, NotificationError> {
        let Some(player) = player else {
            return Err(NotificationError::NoLocalPlayer {
                operation: "InventoryUpdate",
            });
        };
        let Some(inventory) = world.component_mut::<Inventory>(&player) else {
            return Err(NotificationError::ComponentMissing {
                entity_id: format!("{:?}", player),
                component: "Inventory",
            });
        };

        let mut outcome = InventoryOutcome::default();
        for (position, item) in update.updates() {
            if let Err(error) = inventory.set(*position, *item) {
                warn!("Skipping inventory slot: {}", error);
                outcome.rejected.push(*position);
                continue;
            }
            match item {
                None => info!("Item removed from position: {}", position),
                Some(item) => {
                    info!("Item: {} updated in position: {}", item.obj_id, position);
                    info!("Item equipped: {}", item.equipped);
                }
            }
            outcome.applied += 1;
        }
        Ok(outcome)
    }
}

use std::{fmt::Debug, hash::Hash};

use log::{debug, info};

use realm_shared::{
    EntityUpdate, Focused, Movement, MovementNotification, Physics, RemoteEntity, WorldMutType,
    WorldRefType,
};

use crate::world::{
    entity_registry::EntityRegistry,
    error::EntityRegistryError,
    transition_tracker::{DamageReaction, TransitionTracker},
};

/// What applying an [`EntityUpdate`] did to the local world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome<E> {
    /// First sighting of the remote entity. `focused` is set when it arrived
    /// carrying the [`Focused`] marker.
    Spawned { entity: E, focused: bool },
    /// An existing mirror was mutated in place.
    Updated {
        entity: E,
        damage: Option<DamageReaction>,
    },
}

impl<E: Copy> SyncOutcome<E> {
    pub fn entity(&self) -> E {
        match self {
            Self::Spawned { entity, .. } | Self::Updated { entity, .. } => *entity,
        }
    }
}

/// Keeps local entity mirrors in step with the server.
///
/// Owns the [`EntityRegistry`]; every local mirror it creates is registered
/// before any component is attached, and unregistered together with its
/// destruction.
pub struct EntitySynchronizer<E> {
    registry: EntityRegistry<E>,
}

impl<E: Copy + Eq + Hash + Debug> Default for EntitySynchronizer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash + Debug> EntitySynchronizer<E> {
    pub fn new() -> Self {
        Self {
            registry: EntityRegistry::new(),
        }
    }

    pub fn registry(&self) -> &EntityRegistry<E> {
        &self.registry
    }

    pub fn resolve(&self, remote_entity: &RemoteEntity) -> Option<E> {
        self.registry.resolve(remote_entity)
    }

    /// Creates the mirror if the remote entity is unseen, otherwise applies
    /// the delta to the existing one. `controlled` is the locally controlled
    /// entity, whose health is watched across the update.
    pub fn apply<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        update: EntityUpdate,
        controlled: Option<E>,
    ) -> Result<SyncOutcome<E>, EntityRegistryError> {
        let Some(entity) = self.registry.resolve(&update.entity_id) else {
            info!("Network entity doesn't exist: {}. So we create it", update.entity_id);
            return self.spawn(world, update);
        };

        debug!("Network entity exists: {}. Updating", update.entity_id);
        let damage = TransitionTracker::track(world, &entity, controlled.as_ref(), |world| {
            Self::update_components(world, &entity, update);
        });
        Ok(SyncOutcome::Updated { entity, damage })
    }

    /// Destroys the mirror of a remote entity and forgets the mapping.
    pub fn remove<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        remote_entity: &RemoteEntity,
    ) -> Result<E, EntityRegistryError> {
        info!("Unregistering entity: {}", remote_entity);
        let entity = self.registry.unregister(remote_entity)?;
        world.despawn_entity(&entity);
        Ok(entity)
    }

    /// Enables physics on the target and queues the destination. Returns
    /// `None` when the target has not been materialized yet, in which case
    /// nothing is touched.
    pub fn apply_movement<W: WorldMutType<E>>(
        &self,
        world: &mut W,
        notification: &MovementNotification,
    ) -> Option<E> {
        let Some(entity) = self.registry.resolve(&notification.player_id) else {
            debug!(
                "Dropping movement for {}: entity not materialized yet",
                notification.player_id
            );
            return None;
        };

        world.insert_component(&entity, Physics);
        if !world.has_component::<Movement>(&entity) {
            world.insert_component(&entity, Movement::new());
        }
        if let Some(movement) = world.component_mut::<Movement>(&entity) {
            movement.add(notification.destination);
        }
        Some(entity)
    }

    fn spawn<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        update: EntityUpdate,
    ) -> Result<SyncOutcome<E>, EntityRegistryError> {
        let entity = world.spawn_entity();
        if let Err(error) = self.registry.register(update.entity_id, entity) {
            world.despawn_entity(&entity);
            return Err(error);
        }

        // the remove set has nothing to act on for a fresh entity
        for component in update.components {
            world.insert_boxed_component(&entity, component);
        }

        let focused = world.has_component::<Focused>(&entity);
        Ok(SyncOutcome::Spawned { entity, focused })
    }

    // Removals go first so a kind present in both sets ends up holding the
    // new value.
    fn update_components<W: WorldMutType<E>>(world: &mut W, entity: &E, update: EntityUpdate) {
        for component_kind in &update.to_remove {
            world.remove_component_of_kind(entity, component_kind);
        }
        for component in update.components {
            world.insert_boxed_component(entity, component);
        }
    }
}

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use realm_shared::RemoteEntity;

use crate::world::error::EntityRegistryError;

/// Bidirectional map between server entity ids and local world handles.
///
/// An entry is created exactly once per remote entity and removed exactly
/// once, when the server says the entity is gone.
pub struct EntityRegistry<E> {
    remote_to_local: HashMap<RemoteEntity, E>,
    local_to_remote: HashMap<E, RemoteEntity>,
}

impl<E: Copy + Eq + Hash + Debug> Default for EntityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash + Debug> EntityRegistry<E> {
    pub fn new() -> Self {
        Self {
            remote_to_local: HashMap::new(),
            local_to_remote: HashMap::new(),
        }
    }

    pub fn register(&mut self, remote_entity: RemoteEntity, local_entity: E) -> Result<(), EntityRegistryError> {
        if self.remote_to_local.contains_key(&remote_entity) {
            return Err(EntityRegistryError::EntityAlreadyRegistered {
                entity_id: remote_entity.to_string(),
            });
        }
        if self.local_to_remote.contains_key(&local_entity) {
            return Err(EntityRegistryError::LocalEntityAlreadyMapped {
                entity_id: format!("{:?}", local_entity),
            });
        }

        self.remote_to_local.insert(remote_entity, local_entity);
        self.local_to_remote.insert(local_entity, remote_entity);
        Ok(())
    }

    /// Removes the entry and returns the local handle it pointed to.
    pub fn unregister(&mut self, remote_entity: &RemoteEntity) -> Result<E, EntityRegistryError> {
        let Some(local_entity) = self.remote_to_local.remove(remote_entity) else {
            return Err(EntityRegistryError::EntityNotRegistered {
                entity_id: remote_entity.to_string(),
                operation: "unregister",
            });
        };
        self.local_to_remote.remove(&local_entity);
        Ok(local_entity)
    }

    pub fn resolve(&self, remote_entity: &RemoteEntity) -> Option<E> {
        self.remote_to_local.get(remote_entity).copied()
    }

    pub fn exists(&self, remote_entity: &RemoteEntity) -> bool {
        self.remote_to_local.contains_key(remote_entity)
    }

    pub fn remote_entity(&self, local_entity: &E) -> Option<RemoteEntity> {
        self.local_to_remote.get(local_entity).copied()
    }

    pub fn len(&self) -> usize {
        self.remote_to_local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remote_to_local.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RemoteEntity, &E)> {
        self.remote_to_local.iter()
    }
}

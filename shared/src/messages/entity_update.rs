use crate::{
    types::RemoteEntity,
    world::component::{
        component_kind::ComponentKind,
        replicate::{Component, Replicate},
    },
};

/// Snapshot or delta of one remote entity.
///
/// `components` are added to the entity, replacing any existing component of
/// the same kind. `to_remove` lists kinds to strip; it is ignored when the
/// update ends up creating the entity.
#[derive(Debug)]
pub struct EntityUpdate {
    pub entity_id: RemoteEntity,
    pub components: Vec<Box<dyn Replicate>>,
    pub to_remove: Vec<ComponentKind>,
}

impl EntityUpdate {
    pub fn new(entity_id: RemoteEntity) -> Self {
        Self {
            entity_id,
            components: Vec::new(),
            to_remove: Vec::new(),
        }
    }

    pub fn with<C: Component>(mut self, component: C) -> Self {
        self.components.push(Box::new(component));
        self
    }

    pub fn without<C: Component>(mut self) -> Self {
        self.to_remove.push(ComponentKind::of::<C>());
        self
    }

    pub fn has_component<C: Component>(&self) -> bool {
        let kind = ComponentKind::of::<C>();
        self.components.iter().any(|component| component.kind() == kind)
    }
}

impl Clone for EntityUpdate {
    fn clone(&self) -> Self {
        Self {
            entity_id: self.entity_id,
            components: self
                .components
                .iter()
                .map(|component| component.copy_to_box())
                .collect(),
            to_remove: self.to_remove.clone(),
        }
    }
}

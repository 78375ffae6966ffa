use crate::world::component::{
    component_kind::ComponentKind,
    replicate::{Component, Replicate},
};

/// Read access to the local component store.
pub trait WorldRefType<E> {
    fn has_entity(&self, entity: &E) -> bool;
    fn entities(&self) -> Vec<E>;
    fn component_kinds(&self, entity: &E) -> Vec<ComponentKind>;
    fn component_of_kind<'a>(
        &'a self,
        entity: &E,
        component_kind: &ComponentKind,
    ) -> Option<&'a dyn Replicate>;

    fn has_component_of_kind(&self, entity: &E, component_kind: &ComponentKind) -> bool {
        self.component_of_kind(entity, component_kind).is_some()
    }

    fn has_component<C: Component>(&self, entity: &E) -> bool {
        self.has_component_of_kind(entity, &ComponentKind::of::<C>())
    }

    fn component<C: Component>(&self, entity: &E) -> Option<&C> {
        self.component_of_kind(entity, &ComponentKind::of::<C>())
            .and_then(|component| component.as_any().downcast_ref::<C>())
    }
}

/// Mutable access to the local component store.
///
/// Implementors must honor three rules the synchronization engine relies on:
/// inserting a component replaces any existing one of the same kind, removing
/// an absent component is a no-op, and `spawn_entity` never hands out a
/// handle that is still live.
pub trait WorldMutType<E>: WorldRefType<E> {
    fn spawn_entity(&mut self) -> E;
    fn despawn_entity(&mut self, entity: &E);

    fn component_mut_of_kind<'a>(
        &'a mut self,
        entity: &E,
        component_kind: &ComponentKind,
    ) -> Option<&'a mut dyn Replicate>;

    /// Returns the component previously stored under the same kind, if any.
    fn insert_boxed_component(
        &mut self,
        entity: &E,
        component: Box<dyn Replicate>,
    ) -> Option<Box<dyn Replicate>>;

    fn remove_component_of_kind(
        &mut self,
        entity: &E,
        component_kind: &ComponentKind,
    ) -> Option<Box<dyn Replicate>>;

    fn insert_component<C: Component>(&mut self, entity: &E, component: C) -> Option<Box<dyn Replicate>> {
        self.insert_boxed_component(entity, Box::new(component))
    }

    fn component_mut<C: Component>(&mut self, entity: &E) -> Option<&mut C> {
        self.component_mut_of_kind(entity, &ComponentKind::of::<C>())
            .and_then(|component| component.as_any_mut().downcast_mut::<C>())
    }
}

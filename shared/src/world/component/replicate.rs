use std::{any::Any, fmt::Debug};

use crate::world::component::component_kind::ComponentKind;

/// A concrete component type that can be replicated from the server.
///
/// Every `Component` is automatically a [`Replicate`], which is the
/// object-safe form carried inside notifications and stored in the world.
pub trait Component: Any + Clone + Debug + Send + Sync {
    fn component_kind() -> ComponentKind
    where
        Self: Sized,
    {
        ComponentKind::of::<Self>()
    }
}

/// Object-safe view of a replicated component value.
pub trait Replicate: Any + Debug + Send + Sync {
    fn kind(&self) -> ComponentKind;
    fn name(&self) -> &'static str;
    fn copy_to_box(&self) -> Box<dyn Replicate>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> Replicate for C {
    fn kind(&self) -> ComponentKind {
        ComponentKind::of::<C>()
    }

    fn name(&self) -> &'static str {
        ComponentKind::of::<C>().name()
    }

    fn copy_to_box(&self) -> Box<dyn Replicate> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Replicate {
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.as_any_mut().downcast_mut::<C>()
    }
}

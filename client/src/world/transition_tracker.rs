use log::debug;

use realm_shared::{Health, WorldMutType, WorldRefType};

/// Current health of an entity, read at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HealthSample(i32);

impl HealthSample {
    pub fn read<E, W: WorldRefType<E>>(world: &W, entity: &E) -> Option<Self> {
        world.component::<Health>(entity).map(|health| Self(health.min))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// The locally controlled entity lost health during an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReaction {
    pub amount: u32,
}

/// Detects state transitions across a single entity mutation.
pub struct TransitionTracker;

impl TransitionTracker {
    /// Runs `update` exactly once. When `entity` is the controlled one, its
    /// health is sampled before and after; a strict decrease yields a
    /// [`DamageReaction`]. Other entities are updated without sampling.
    pub fn track<E, W, F>(world: &mut W, entity: &E, controlled: Option<&E>, update: F) -> Option<DamageReaction>
    where
        E: PartialEq,
        W: WorldMutType<E>,
        F: FnOnce(&mut W),
    {
        if controlled != Some(entity) {
            update(world);
            return None;
        }

        let pre = HealthSample::read(world, entity);
        update(world);
        let post = HealthSample::read(world, entity);

        let (Some(pre), Some(post)) = (pre, post) else {
            debug!("Skipping damage check: controlled entity has no Health component");
            return None;
        };
        if post < pre {
            Some(DamageReaction {
                amount: pre.value().abs_diff(post.value()),
            })
        } else {
            None
        }
    }
}

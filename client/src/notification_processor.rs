use std::{fmt::Debug, hash::Hash};

use log::{info, warn};

use realm_shared::{EntityUpdate, InventoryUpdate, Notification, RemoteEntity, WorldMutType};

use crate::{
    client_config::ClientConfig,
    context::{
        feedback::{CameraShaker, SoundPlayer},
        screen::ScreenContext,
    },
    effects::effect_dispatcher::EffectDispatcher,
    error::NotificationError,
    inventory::inventory_reconciler::InventoryReconciler,
    room::membership_router::MembershipRouter,
    session::Session,
    world::{
        entity_registry::EntityRegistry,
        entity_synchronizer::{EntitySynchronizer, SyncOutcome},
    },
};

/// Entry point for everything the server pushes to a game client.
///
/// Notifications are applied one at a time, in arrival order, on the thread
/// that owns the world. Each one either mutates the world, updates a view,
/// or triggers a feedback effect.
pub struct NotificationProcessor<E> {
    config: ClientConfig,
    synchronizer: EntitySynchronizer<E>,
    session: Session<E>,
    screen: Box<dyn ScreenContext<E>>,
    effects: EffectDispatcher,
}

impl<E: Copy + Eq + Hash + Debug> NotificationProcessor<E> {
    pub fn new(
        config: ClientConfig,
        screen: Box<dyn ScreenContext<E>>,
        camera: Box<dyn CameraShaker>,
        sound: Box<dyn SoundPlayer>,
    ) -> Self {
        let effects = EffectDispatcher::new(&config, camera, sound);
        Self {
            config,
            synchronizer: EntitySynchronizer::new(),
            session: Session::new(),
            screen,
            effects,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntityRegistry<E> {
        self.synchronizer.registry()
    }

    pub fn resolve(&self, remote_entity: &RemoteEntity) -> Option<E> {
        self.synchronizer.resolve(remote_entity)
    }

    /// The locally controlled entity, if the server has sent it.
    pub fn player(&self) -> Option<E> {
        self.session.player()
    }

    pub fn process<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        notification: Notification,
    ) -> Result<(), NotificationError> {
        match notification {
            Notification::EntityUpdate(update) => self.on_entity_update(world, update),
            Notification::RemoveEntity(remove) => {
                let entity = self.synchronizer.remove(world, &remove.entity_id)?;
                if self.session.release(&entity) {
                    info!("Local player entity removed: {:?}", entity);
                }
                Ok(())
            }
            Notification::InventoryUpdate(update) => self.on_inventory_update(world, &update),
            Notification::MovementNotification(movement) => {
                self.synchronizer.apply_movement(world, &movement);
                Ok(())
            }
            Notification::JoinRoom(join) => {
                MembershipRouter::join(&mut *self.screen, join);
                Ok(())
            }
            Notification::NewRoom(new_room) => {
                MembershipRouter::new_room(&mut *self.screen, new_room);
                Ok(())
            }
            Notification::ConsoleMessage(message) => {
                self.effects.console(self.screen.console(), &message);
                Ok(())
            }
            Notification::SoundNotification(sound) => {
                self.effects.play_sound(sound.sound_number);
                Ok(())
            }
        }
    }

    /// Applies a batch in order. A failing notification is logged and
    /// skipped; the rest of the batch still runs.
    pub fn process_all<W, I>(&mut self, world: &mut W, notifications: I) -> Vec<NotificationError>
    where
        W: WorldMutType<E>,
        I: IntoIterator<Item = Notification>,
    {
        let mut errors = Vec::new();
        for notification in notifications {
            let kind = notification.kind();
            if let Err(error) = self.process(world, notification) {
                warn!("Failed to process {:?}: {}", kind, error);
                errors.push(error);
            }
        }
        errors
    }

    fn on_entity_update<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        update: EntityUpdate,
    ) -> Result<(), NotificationError> {
        match self.synchronizer.apply(world, update, self.session.player())? {
            SyncOutcome::Spawned {
                entity,
                focused: true,
            } => {
                info!("New focused player: {:?}", entity);
                self.session.set_player(entity);
                self.screen.local_player_ready(entity);
            }
            SyncOutcome::Spawned { .. } => {}
            SyncOutcome::Updated { damage, .. } => {
                if let Some(damage) = damage {
                    self.effects.shake(damage);
                }
            }
        }
        Ok(())
    }

    fn on_inventory_update<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        update: &InventoryUpdate,
    ) -> Result<(), NotificationError> {
        InventoryReconciler::apply(world, self.session.player(), update)?;
        self.screen.refresh_inventory(self.config.inventory_refresh_hint);
        Ok(())
    }
}

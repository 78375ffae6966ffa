use log::{debug, info};

use realm_shared::{ConsoleMessage, MessageKind, SoundNumber};

use crate::{
    client_config::ClientConfig,
    context::{
        feedback::{CameraShaker, SoundPlayer},
        screen::ConsoleView,
    },
    room::membership_router::RouteOutcome,
    world::transition_tracker::DamageReaction,
};

/// Fans reactive effects out to the feedback subsystems. Nothing is retried
/// or buffered.
pub struct EffectDispatcher {
    camera: Box<dyn CameraShaker>,
    sound: Box<dyn SoundPlayer>,
    shake_divisor: f32,
    shake_push: (f32, f32),
}

impl EffectDispatcher {
    pub fn new(config: &ClientConfig, camera: Box<dyn CameraShaker>, sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            camera,
            sound,
            shake_divisor: config.damage_shake_divisor,
            shake_push: config.shake_push,
        }
    }

    pub fn shake(&mut self, reaction: DamageReaction) {
        info!("Shake camera by {}", reaction.amount);
        self.camera.shake(reaction.amount as f32 / self.shake_divisor);
        self.camera.push(self.shake_push.0, self.shake_push.1);
    }

    pub fn play_sound(&mut self, sound_number: SoundNumber) {
        self.sound.play_sound(sound_number);
    }

    pub fn console(&mut self, console: Option<&mut dyn ConsoleView>, message: &ConsoleMessage) -> RouteOutcome {
        let Some(console) = console else {
            debug!("Dropping console message, no console active: {}", message.message);
            return RouteOutcome::Dropped;
        };

        let text = message.message.as_str();
        match message.kind {
            MessageKind::Info | MessageKind::Unrecognized(_) => console.add_info(text),
            MessageKind::Error => console.add_error(text),
            MessageKind::Combat => console.add_combat(text),
            MessageKind::Warning => console.add_warning(text),
        }
        RouteOutcome::Applied
    }
}

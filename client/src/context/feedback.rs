use realm_shared::SoundNumber;

pub trait CameraShaker {
    fn shake(&mut self, magnitude: f32);
    fn push(&mut self, recoil: f32, duration: f32);
}

pub trait SoundPlayer {
    fn play_sound(&mut self, sound_number: SoundNumber);
}

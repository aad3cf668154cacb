//! Sound and game event handles.
//!
//! Audio is host-side; the game only emits numeric events. The ids here
//! must agree with the names in `assets/manifest.json`, which is how the
//! host resolves them to actual files.

use cuberun_engine::SoundEvent;

pub const SND_MUSIC_START: SoundEvent = SoundEvent(1);
pub const SND_MUSIC_STOP: SoundEvent = SoundEvent(2);
pub const SND_JUMP: SoundEvent = SoundEvent(3);
pub const SND_HIT: SoundEvent = SoundEvent(4);

/// Game event kinds forwarded to the host UI.
pub mod events {
    /// `a` = current player health.
    pub const HEALTH: f32 = 1.0;
    /// `a` = configured sound volume in [0.0, 1.0].
    pub const VOLUME: f32 = 2.0;
}

/// The bundled asset manifest.
pub const MANIFEST_JSON: &str = include_str!("../assets/manifest.json");

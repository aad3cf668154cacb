//! Player-facing settings: sound volume and cube color.
//!
//! Settings are configuration, not progress: the native runner loads them
//! from an optional JSON file next to the binary and writes them back on
//! exit.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The player cube's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl CubeColor {
    /// Cycle order for the left key: Red → Green → Blue → Red.
    pub fn cycled_left(self) -> Self {
        match self {
            CubeColor::Red => CubeColor::Green,
            CubeColor::Green => CubeColor::Blue,
            CubeColor::Blue => CubeColor::Red,
        }
    }

    /// Cycle order for the right key: Red → Blue → Green → Red.
    pub fn cycled_right(self) -> Self {
        match self {
            CubeColor::Red => CubeColor::Blue,
            CubeColor::Blue => CubeColor::Green,
            CubeColor::Green => CubeColor::Red,
        }
    }

    /// Atlas cell (col, row) of the matching cube sprite.
    pub fn sprite_cell(self) -> (f32, f32) {
        match self {
            CubeColor::Red => crate::sprites::CUBE_RED,
            CubeColor::Green => crate::sprites::CUBE_GREEN,
            CubeColor::Blue => crate::sprites::CUBE_BLUE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CubeColor::Red => "RED",
            CubeColor::Green => "GREEN",
            CubeColor::Blue => "BLUE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sound volume in [0.0, 1.0], adjusted in 0.1 steps.
    pub sound_volume: f32,
    pub cube_color: CubeColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_volume: 1.0,
            cube_color: CubeColor::Red,
        }
    }
}

impl Settings {
    /// Raise the volume one step, clamped at 1.0.
    /// Steps are computed in tenths so repeated adjustment cannot drift.
    pub fn raise_volume(&mut self) {
        let tenths = (self.sound_volume * 10.0).round();
        self.sound_volume = (tenths + 1.0).clamp(0.0, 10.0) / 10.0;
    }

    /// Lower the volume one step, clamped at 0.0.
    pub fn lower_volume(&mut self) {
        let tenths = (self.sound_volume * 10.0).round();
        self.sound_volume = (tenths - 1.0).clamp(0.0, 10.0) / 10.0;
    }

    /// Load settings from a JSON file, falling back to defaults on any
    /// error (missing file on first run is the normal case).
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write settings back as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

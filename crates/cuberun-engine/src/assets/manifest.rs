use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::SoundEvent;

/// Asset manifest describing atlases, named sprites, and named sounds.
/// Loaded from a JSON file at startup: the game looks things up by name
/// and gets a handle back; the host owns the actual decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Named audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "tiles").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Column in the atlas grid.
    pub col: u32,
    /// Row in the atlas grid.
    pub row: u32,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from the game.
    #[serde(default)]
    pub event_id: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a sound by name to its event handle.
    pub fn sound_event(&self, name: &str) -> Option<SoundEvent> {
        self.sounds
            .get(name)
            .and_then(|s| s.event_id)
            .map(SoundEvent)
    }

    /// Look up a named sprite.
    pub fn sprite(&self, name: &str) -> Option<&SpriteDescriptor> {
        self.sprites.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "atlases": [],
            "sounds": {
                "jump": { "path": "jump.wav", "event_id": 3 },
                "music": { "path": "music.wav" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sounds.len(), 2);

        assert_eq!(manifest.sound_event("jump"), Some(SoundEvent(3)));
        // A sound without an event id has no handle to trigger it by.
        assert_eq!(manifest.sound_event("music"), None);
        assert_eq!(manifest.sound_event("missing"), None);
    }

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "atlases": [
                { "name": "tiles", "cols": 8, "rows": 2, "path": "tiles.png" }
            ],
            "sprites": {
                "cube_red": { "atlas": 0, "col": 0, "row": 0 }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.atlases.len(), 1);
        assert_eq!(manifest.atlases[0].cols, 8);
        assert_eq!(manifest.sprite("cube_red").unwrap().atlas, 0);
        assert!(manifest.sprite("missing").is_none());
    }
}

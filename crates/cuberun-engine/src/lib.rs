pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, FrameStats, Game, GameConfig, RenderContext};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use components::entity::Entity;
pub use components::sprite::{AtlasId, SpriteComponent};
pub use core::physics::{
    BodyDesc, BodyType, ColliderMaterial, CollisionPair, PhysicsBody, PhysicsWorld,
};
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, FpsCounter};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera2D, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use runner::GameRunner;
pub use systems::render::build_render_buffer;
pub use systems::text::{char_to_grid, push_text, text_width, FontConfig, TextAnchor};

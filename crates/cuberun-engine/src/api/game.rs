use glam::Vec2;

use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::components::entity::Entity;
use crate::core::physics::{BodyDesc, ColliderMaterial, CollisionPair, PhysicsWorld};
use crate::core::scene::Scene;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Virtual UI screen width in units.
    pub world_width: f32,
    /// Virtual UI screen height in units.
    pub world_height: f32,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Gravity vector for physics simulation. Default: zero.
    /// Y-up world: use negative Y for downward gravity.
    pub gravity: Vec2,
    /// Velocity solver iterations per step.
    pub velocity_iterations: usize,
    /// Position stabilization iterations per step.
    pub position_iterations: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 960.0,
            world_height: 544.0,
            max_sounds: 32,
            max_events: 32,
            gravity: Vec2::ZERO,
            velocity_iterations: 4,
            position_iterations: 1,
        }
    }
}

/// Per-frame timing info the runner shares with the game (HUD readouts).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    /// Fixed steps executed since init.
    pub frame: u64,
    /// Smoothed frames per second from real frame deltas.
    pub fps: f32,
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Runs once per fixed step.
    fn update(&mut self, ctx: &mut EngineContext, input: &crate::input::queue::InputQueue);

    /// Read-only render pass: push text/UI instances on top of the scene.
    fn render(&self, _rc: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera2D,
    pub physics: PhysicsWorld,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    pub stats: FrameStats,
    next_id: u32,
    collision_events: Vec<CollisionPair>,
    touching: Vec<(EntityId, EntityId)>,
}

impl EngineContext {
    /// Build a context from the game's configuration: gravity, timestep,
    /// and solver iterations are applied to the physics world up front.
    pub fn new(config: &GameConfig) -> Self {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.set_dt(config.fixed_dt);
        physics.set_solver_iterations(config.velocity_iterations, config.position_iterations);
        Self {
            scene: Scene::new(),
            camera: Camera2D::new(config.world_width, config.world_height),
            physics,
            sounds: Vec::new(),
            events: Vec::new(),
            stats: FrameStats::default(),
            next_id: 1,
            collision_events: Vec::new(),
            touching: Vec::new(),
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a sound event for the host audio layer.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event for the host UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events, collision events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
        self.collision_events.clear();
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is set from the BodyDesc, its render scale to
    /// the body's full extents, and its id into the body's user data.
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity
            .with_pos(desc.position)
            .with_scale(desc.half_extents * 2.0)
            .with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Despawn an entity, cleaning up its physics body if present.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.scene.despawn(id) {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
    }

    /// Despawn every entity with the given tag, bodies included.
    pub fn despawn_by_tag(&mut self, tag: &str) -> usize {
        let removed = self.scene.despawn_by_tag(tag);
        for entity in &removed {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
        removed.len()
    }

    /// Apply an instantaneous impulse to an entity's physics body.
    pub fn apply_impulse(&mut self, id: EntityId, impulse: Vec2) {
        if let Some(entity) = self.scene.get(id) {
            if let Some(body) = &entity.body {
                self.physics.apply_impulse(body, impulse);
            }
        }
    }

    /// Set the linear velocity of an entity's physics body.
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(entity) = self.scene.get(id) {
            if let Some(body) = &entity.body {
                self.physics.set_velocity(body, vel);
            }
        }
    }

    /// Get the linear velocity of an entity's physics body.
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Set the angular velocity of an entity's physics body.
    pub fn set_angular_velocity(&mut self, id: EntityId, angvel: f32) {
        if let Some(entity) = self.scene.get(id) {
            if let Some(body) = &entity.body {
                self.physics.set_angular_velocity(body, angvel);
            }
        }
    }

    /// Get the world position of an entity's physics body, falling back to
    /// the entity transform for body-less entities.
    pub fn position(&self, id: EntityId) -> Vec2 {
        match self.scene.get(id) {
            Some(e) => match &e.body {
                Some(body) => self.physics.body_position(body).0,
                None => e.pos,
            },
            None => Vec2::ZERO,
        }
    }

    /// Edge-triggered collision events from the most recent physics step.
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Level-triggered: the contact pairs currently touching after the most
    /// recent physics step.
    pub fn touching_pairs(&self) -> &[(EntityId, EntityId)] {
        &self.touching
    }

    /// Step the physics simulation and sync poses back to entities.
    ///
    /// Only dynamic bodies are refreshed — static geometry keeps the
    /// transform it was placed with.
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        let mut touching = std::mem::take(&mut self.touching);
        self.physics.touching_pairs_into(&mut touching);
        self.touching = touching;

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                if self.physics.is_dynamic(body) {
                    let (pos, rot) = self.physics.body_position(body);
                    entity.pos = pos;
                    entity.rotation = rot;
                }
            }
        }
    }
}

/// Render context for the read-only render pass.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub camera: &'a Camera2D,
    pub stats: &'a FrameStats,
}

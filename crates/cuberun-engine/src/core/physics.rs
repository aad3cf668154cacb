use glam::Vec2;
use rapier2d::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_rot(iso: &nalgebra::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let rot = iso.rotation.angle();
    (pos, rot)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body. Level geometry is `Fixed`, the player is `Dynamic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.2,
            density: 1.0,
        }
    }
}

/// Builder describing a box-shaped rigid body before creation.
/// All collision geometry in this engine is axis-aligned boxes given by
/// half-extents.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_extents: Vec2,
}

impl BodyDesc {
    /// A dynamic box with the given half-extents.
    pub fn dynamic(half_extents: Vec2) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            half_extents,
        }
    }

    /// A fixed (static) box with the given half-extents.
    pub fn fixed(half_extents: Vec2) -> Self {
        Self {
            body_type: BodyType::Fixed,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            half_extents,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

/// An edge-triggered collision event between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub entity_a: EntityId,
    pub entity_b: EntityId,
    /// `true` when the collision just started, `false` when it ended.
    pub started: bool,
}

// ---------------------------------------------------------------------------
// Event collector
// ---------------------------------------------------------------------------

struct DirectEventCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl DirectEventCollector {
    fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    fn drain_collisions(&self) -> Vec<CollisionEvent> {
        std::mem::take(&mut *self.collisions.lock().unwrap())
    }
}

impl EventHandler for DirectEventCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        self.collisions.lock().unwrap().push(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: f32,
    ) {
        // Contact force events are unused but the trait requires this.
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single struct.
///
/// The world uses Y-up coordinates in meters: pass negative Y gravity
/// (e.g. `Vec2::new(0.0, -9.81)`) for things to fall.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub(crate) bodies: RigidBodySet,
    pub(crate) colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    event_collector: DirectEventCollector,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: DirectEventCollector::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Configure solver iteration counts: velocity solver passes and
    /// internal position/PGS stabilization passes.
    pub fn set_solver_iterations(&mut self, velocity: usize, position: usize) {
        self.integration_parameters.num_solver_iterations =
            NonZeroUsize::new(velocity).unwrap_or(NonZeroUsize::MIN);
        self.integration_parameters.num_internal_pgs_iterations = position.max(1);
    }

    /// Create a rigid body + box collider and return handles.
    /// The EntityId is stored in the body's `user_data` for contact lookups.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(nalgebra::Vector2::new(desc.position.x, desc.position.y))
            .linvel(nalgebra::Vector2::new(desc.velocity.x, desc.velocity.y))
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = ColliderBuilder::cuboid(desc.half_extents.x, desc.half_extents.y)
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        PhysicsBody {
            body_handle,
            collider_handle,
        }
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Step the simulation and collect edge-triggered collision events
    /// into the provided Vec.
    pub fn step_into(&mut self, collision_events: &mut Vec<CollisionPair>) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );

        for event in self.event_collector.drain_collisions() {
            let (h1, h2, started) = match event {
                CollisionEvent::Started(h1, h2, _) => (h1, h2, true),
                CollisionEvent::Stopped(h1, h2, _) => (h1, h2, false),
            };

            let entity_a = self.collider_to_entity(h1);
            let entity_b = self.collider_to_entity(h2);

            if let (Some(a), Some(b)) = (entity_a, entity_b) {
                collision_events.push(CollisionPair {
                    entity_a: a,
                    entity_b: b,
                    started,
                });
            }
        }
    }

    /// Collect the currently touching contact pairs from the narrow phase.
    ///
    /// Unlike the started/stopped events from `step_into`, this is
    /// level-triggered: a pair that stays in contact shows up after every
    /// step until separation.
    pub fn touching_pairs_into(&self, out: &mut Vec<(EntityId, EntityId)>) {
        out.clear();
        for pair in self.narrow_phase.contact_pairs() {
            if !pair.has_any_active_contact {
                continue;
            }
            let a = self.collider_to_entity(pair.collider1);
            let b = self.collider_to_entity(pair.collider2);
            if let (Some(a), Some(b)) = (a, b) {
                out.push((a, b));
            }
        }
    }

    /// Apply an instantaneous impulse to a body.
    pub fn apply_impulse(&mut self, body: &PhysicsBody, impulse: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.apply_impulse(vec2_to_na(impulse), true);
        }
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Get the current angular velocity of a body (radians/sec).
    pub fn angular_velocity(&self, body: &PhysicsBody) -> f32 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.angvel())
            .unwrap_or(0.0)
    }

    /// Set the angular velocity of a body (radians/sec).
    pub fn set_angular_velocity(&mut self, body: &PhysicsBody, angvel: f32) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_angvel(angvel, true);
        }
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_rot(rb.position()))
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Whether the body is dynamic (moved by the solver).
    pub fn is_dynamic(&self, body: &PhysicsBody) -> bool {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.is_dynamic())
            .unwrap_or(false)
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // -- private helpers --

    fn collider_to_entity(&self, collider_handle: ColliderHandle) -> Option<EntityId> {
        let collider = self.colliders.get(collider_handle)?;
        let body_handle = collider.parent()?;
        let body = self.bodies.get(body_handle)?;
        Some(EntityId(body.user_data as u32))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn world_with_gravity() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, -9.81));
        world.set_dt(DT);
        world.set_solver_iterations(6, 2);
        world
    }

    #[test]
    fn create_and_remove_body() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)),
            ColliderMaterial::default(),
        );
        assert_eq!(world.body_count(), 1);
        world.remove_body(&body);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn gravity_pulls_dynamic_body_down() {
        let mut world = world_with_gravity();
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_position(Vec2::new(0.0, 4.0)),
            ColliderMaterial::default(),
        );

        let (initial_pos, _) = world.body_position(&body);
        let mut events = Vec::new();
        for _ in 0..10 {
            world.step_into(&mut events);
        }
        let (new_pos, _) = world.body_position(&body);

        assert!(
            new_pos.y < initial_pos.y,
            "body should fall: start={}, end={}",
            initial_pos.y,
            new_pos.y
        );
    }

    #[test]
    fn fixed_body_does_not_move() {
        let mut world = world_with_gravity();
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::fixed(Vec2::new(70.0, 0.5)).with_position(Vec2::new(60.0, 0.0)),
            ColliderMaterial::default(),
        );

        let mut events = Vec::new();
        for _ in 0..10 {
            world.step_into(&mut events);
        }

        let (pos, _) = world.body_position(&body);
        assert!((pos.x - 60.0).abs() < 0.001);
        assert!(pos.y.abs() < 0.001);
        assert!(!world.is_dynamic(&body));
    }

    #[test]
    fn impulse_changes_velocity() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        world.set_dt(DT);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)),
            ColliderMaterial::default(),
        );

        assert_eq!(world.velocity(&body), Vec2::ZERO);
        world.apply_impulse(&body, Vec2::new(0.5, 0.0));

        let mut events = Vec::new();
        world.step_into(&mut events);
        let vel = world.velocity(&body);
        assert!(vel.x > 0.0, "velocity should be positive X: {:?}", vel);
    }

    #[test]
    fn angular_velocity_can_be_zeroed() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        world.set_dt(DT);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)),
            ColliderMaterial::default(),
        );

        world.set_angular_velocity(&body, 3.0);
        assert!((world.angular_velocity(&body) - 3.0).abs() < 0.001);

        world.set_angular_velocity(&body, 0.0);
        assert!(world.angular_velocity(&body).abs() < 0.001);
    }

    #[test]
    fn resting_body_reports_touching_pair() {
        let mut world = world_with_gravity();
        world.create_body(
            EntityId(10),
            &BodyDesc::fixed(Vec2::new(10.0, 0.5)),
            ColliderMaterial::default(),
        );
        world.create_body(
            EntityId(20),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_position(Vec2::new(0.0, 2.0)),
            ColliderMaterial::default(),
        );

        let mut events = Vec::new();
        for _ in 0..120 {
            world.step_into(&mut events);
        }

        let mut touching = Vec::new();
        world.touching_pairs_into(&mut touching);
        assert_eq!(touching.len(), 1, "cube should rest on the ground");
        let (a, b) = touching[0];
        assert!([a, b].contains(&EntityId(10)));
        assert!([a, b].contains(&EntityId(20)));
    }

    #[test]
    fn touching_persists_across_steps() {
        let mut world = world_with_gravity();
        world.create_body(
            EntityId(1),
            &BodyDesc::fixed(Vec2::new(10.0, 0.5)),
            ColliderMaterial::default(),
        );
        world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_position(Vec2::new(0.0, 1.2)),
            ColliderMaterial::default(),
        );

        let mut events = Vec::new();
        for _ in 0..120 {
            world.step_into(&mut events);
        }

        // Level-triggered: the pair shows up after every further step.
        let mut touching = Vec::new();
        for _ in 0..3 {
            world.step_into(&mut events);
            world.touching_pairs_into(&mut touching);
            assert_eq!(touching.len(), 1);
        }
    }

    #[test]
    fn collision_events_fire_on_contact_start() {
        let mut world = world_with_gravity();
        world.create_body(
            EntityId(1),
            &BodyDesc::fixed(Vec2::new(10.0, 0.5)),
            ColliderMaterial::default(),
        );
        world.create_body(
            EntityId(2),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_position(Vec2::new(0.0, 2.0)),
            ColliderMaterial::default(),
        );

        let mut events = Vec::new();
        for _ in 0..120 {
            world.step_into(&mut events);
        }

        let started: Vec<_> = events.iter().filter(|e| e.started).collect();
        assert!(!started.is_empty(), "landing should emit a started event");
        let first = started[0];
        let ids = [first.entity_a, first.entity_b];
        assert!(ids.contains(&EntityId(1)));
        assert!(ids.contains(&EntityId(2)));
    }

    #[test]
    fn body_position_reflects_descriptor() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_position(Vec2::new(8.0, 1.0)),
            ColliderMaterial::default(),
        );

        let (pos, rot) = world.body_position(&body);
        assert!((pos.x - 8.0).abs() < 0.001);
        assert!((pos.y - 1.0).abs() < 0.001);
        assert!(rot.abs() < 0.001);
    }

    #[test]
    fn initial_velocity_is_applied() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let body = world.create_body(
            EntityId(1),
            &BodyDesc::dynamic(Vec2::splat(0.5)).with_velocity(Vec2::new(3.0, 0.0)),
            ColliderMaterial::default(),
        );
        let vel = world.velocity(&body);
        assert!((vel.x - 3.0).abs() < 0.001);
    }
}

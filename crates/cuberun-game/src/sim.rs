//! The per-step simulation: forward drive, physics step, contact response.

use glam::Vec2;

use cuberun_engine::{EngineContext, EntityId};

use crate::world::{TAG_FINISH, TAG_PLAYER};

/// Gameplay constants for the simulation step.
#[derive(Debug, Clone)]
pub struct Tuning {
    /// Below this horizontal speed the strong impulse applies.
    pub low_speed_threshold: f32,
    /// At or above this horizontal speed no forward impulse applies.
    pub top_speed_threshold: f32,
    pub strong_impulse: f32,
    pub weak_impulse: f32,
    pub jump_impulse: f32,
    /// The jump impulse fires once per touching contact pair, so several
    /// simultaneous contacts stack the force. This matches the shipped
    /// behavior; clear it to get a single impulse per step.
    pub jump_impulse_per_contact: bool,
    /// Health lost per touching player contact per step.
    pub contact_damage: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            low_speed_threshold: 4.0,
            top_speed_threshold: 20.0,
            strong_impulse: 0.5,
            weak_impulse: 0.04,
            jump_impulse: 7.0,
            jump_impulse_per_contact: true,
            contact_damage: 1,
        }
    }
}

/// Forward impulse as a function of horizontal speed: a non-increasing
/// step function that flattens the acceleration curve.
pub fn forward_impulse(vx: f32, tuning: &Tuning) -> f32 {
    if vx < tuning.low_speed_threshold {
        tuning.strong_impulse
    } else if vx < tuning.top_speed_threshold {
        tuning.weak_impulse
    } else {
        0.0
    }
}

/// What one simulation step observed. Consumed by the play screen (camera,
/// health, sounds) and by tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// Player x recorded before the physics step; the camera focus.
    pub camera_focus: f32,
    /// Touching contact pairs seen this step.
    pub touching: u32,
    /// Touching pairs with exactly one player participant.
    pub player_hits: u32,
    /// Upward impulses applied from held jump input.
    pub jump_impulses: u32,
    /// A finish marker participated in a touching pair.
    pub finish_touched: bool,
    /// The player gained a new contact this step (for edge-triggered sfx).
    pub player_contact_started: bool,
}

/// Advance the play simulation by one fixed step.
pub fn step(
    ctx: &mut EngineContext,
    player: EntityId,
    jump_held: bool,
    tuning: &Tuning,
) -> StepReport {
    // Asymmetric impulses would slowly spin the cube; keep it flat.
    ctx.set_angular_velocity(player, 0.0);

    let vx = ctx.velocity(player).x;
    let impulse = forward_impulse(vx, tuning);
    if impulse > 0.0 {
        ctx.apply_impulse(player, Vec2::new(impulse, 0.0));
    }

    let mut report = StepReport {
        camera_focus: ctx.position(player).x,
        ..StepReport::default()
    };

    ctx.step_physics();

    let pairs: Vec<(EntityId, EntityId)> = ctx.touching_pairs().to_vec();
    for (a, b) in pairs {
        report.touching += 1;

        let a_is_player = has_tag(ctx, a, TAG_PLAYER);
        let b_is_player = has_tag(ctx, b, TAG_PLAYER);

        if has_tag(ctx, a, TAG_FINISH) || has_tag(ctx, b, TAG_FINISH) {
            report.finish_touched = true;
        }

        if a_is_player != b_is_player {
            report.player_hits += 1;
        }

        if jump_held && (tuning.jump_impulse_per_contact || report.jump_impulses == 0) {
            ctx.apply_impulse(player, Vec2::new(0.0, tuning.jump_impulse));
            report.jump_impulses += 1;
        }
    }

    report.player_contact_started = ctx
        .collisions()
        .iter()
        .any(|c| c.started && (c.entity_a == player || c.entity_b == player));

    report
}

fn has_tag(ctx: &EngineContext, id: EntityId, tag: &str) -> bool {
    ctx.scene.get(id).is_some_and(|e| e.tag == tag)
}

//! Play owns the live session: the level, the player's health, and the
//! follow camera. The session stays resident while the pause and options
//! screens sit on top of it.

use glam::Vec2;

use cuberun_engine::{EngineContext, FontConfig, GameEvent, RenderContext};

use crate::actions::ActionState;
use crate::audio::{events, SND_HIT, SND_JUMP, SND_MUSIC_START, SND_MUSIC_STOP};
use crate::consts::{CAMERA_EYE_HEIGHT, PLAY_VIEW_H, PLAY_VIEW_W};
use crate::hud;
use crate::settings::Settings;
use crate::sim::{self, Tuning};
use crate::world::{self, Level};

pub const PLAYER_MAX_HEALTH: u32 = 100;

/// What a play-screen update asks the app to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Running,
    PauseRequested,
    Finished,
}

pub struct PlaySession {
    level: Level,
    health: u32,
    tuning: Tuning,
}

impl PlaySession {
    /// Build the level, aim the follow camera, start the music.
    pub fn enter(ctx: &mut EngineContext, settings: &Settings) -> Self {
        let level = world::build_level(ctx, settings.cube_color);

        ctx.camera.set_viewport(PLAY_VIEW_W, PLAY_VIEW_H);
        ctx.camera.look_at(Vec2::new(world::PLAYER_SPAWN.x, CAMERA_EYE_HEIGHT));

        ctx.emit_sound(SND_MUSIC_START);
        ctx.emit_event(GameEvent {
            kind: events::VOLUME,
            a: settings.sound_volume,
            ..GameEvent::default()
        });
        log::info!("play session started ({} bodies)", ctx.physics.body_count());

        Self {
            level,
            health: PLAYER_MAX_HEALTH,
            tuning: Tuning::default(),
        }
    }

    /// Stop the music and tear the level down.
    pub fn exit(&self, ctx: &mut EngineContext) {
        ctx.emit_sound(SND_MUSIC_STOP);
        world::release_level(ctx);
        log::info!("play session released");
    }

    /// One fixed-step update: simulate, then check for pause input.
    pub fn update(&mut self, ctx: &mut EngineContext, actions: &ActionState) -> PlayOutcome {
        let report = sim::step(ctx, self.level.player, actions.jump_held, &self.tuning);

        self.health = self
            .health
            .saturating_sub(report.player_hits * self.tuning.contact_damage);

        // Locked horizontal tracking at fixed height.
        ctx.camera.set_viewport(PLAY_VIEW_W, PLAY_VIEW_H);
        ctx.camera.look_at(Vec2::new(report.camera_focus, CAMERA_EYE_HEIGHT));

        if report.jump_impulses > 0 {
            ctx.emit_sound(SND_JUMP);
        }
        if report.player_contact_started {
            ctx.emit_sound(SND_HIT);
        }
        ctx.emit_event(GameEvent {
            kind: events::HEALTH,
            a: self.health as f32,
            ..GameEvent::default()
        });

        if report.finish_touched {
            return PlayOutcome::Finished;
        }
        if actions.pause {
            return PlayOutcome::PauseRequested;
        }
        PlayOutcome::Running
    }

    pub fn render(&self, rc: &mut RenderContext, font: &FontConfig) {
        hud::play_hud(rc, font, self.health);
    }

    /// Show or hide the level while a menu sits on top of the session.
    pub fn set_visible(&self, ctx: &mut EngineContext, visible: bool) {
        for tag in [
            world::TAG_PLAYER,
            world::TAG_GROUND,
            world::TAG_PLATFORM,
            world::TAG_FINISH,
        ] {
            for entity in ctx.scene.iter_mut() {
                if entity.tag == tag {
                    entity.active = visible;
                }
            }
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn player(&self) -> cuberun_engine::EntityId {
        self.level.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::play_config;

    fn session() -> (PlaySession, EngineContext) {
        let mut ctx = EngineContext::new(&play_config());
        let session = PlaySession::enter(&mut ctx, &Settings::default());
        (session, ctx)
    }

    #[test]
    fn enter_builds_the_level_and_starts_music() {
        let (session, ctx) = session();
        assert_eq!(ctx.physics.body_count(), 13);
        assert_eq!(session.health(), PLAYER_MAX_HEALTH);
        assert!(ctx.sounds.contains(&SND_MUSIC_START));
    }

    #[test]
    fn exit_releases_every_body_and_stops_music() {
        let (session, mut ctx) = session();
        ctx.sounds.clear();
        session.exit(&mut ctx);
        assert_eq!(ctx.physics.body_count(), 0);
        assert!(ctx.sounds.contains(&SND_MUSIC_STOP));
    }

    #[test]
    fn update_moves_the_camera_with_the_player() {
        let (mut session, mut ctx) = session();
        for _ in 0..120 {
            session.update(&mut ctx, &ActionState::default());
        }
        let player_x = ctx.position(session.player()).x;
        assert!(player_x > 0.0);
        assert!((ctx.camera.center.x - player_x).abs() < 0.5);
        assert_eq!(ctx.camera.center.y, CAMERA_EYE_HEIGHT);
    }

    #[test]
    fn pause_input_requests_pause() {
        let (mut session, mut ctx) = session();
        let actions = ActionState { pause: true, ..ActionState::default() };
        assert_eq!(session.update(&mut ctx, &actions), PlayOutcome::PauseRequested);
    }

    #[test]
    fn health_drains_while_grounded() {
        let (mut session, mut ctx) = session();
        for _ in 0..600 {
            session.update(&mut ctx, &ActionState::default());
        }
        assert!(
            session.health() < PLAYER_MAX_HEALTH,
            "ten seconds of running should have cost contact health"
        );
    }

    #[test]
    fn set_visible_toggles_level_entities() {
        let (session, mut ctx) = session();
        session.set_visible(&mut ctx, false);
        assert!(ctx.scene.iter().all(|e| !e.active));
        session.set_visible(&mut ctx, true);
        assert!(ctx.scene.iter().all(|e| e.active));
    }
}

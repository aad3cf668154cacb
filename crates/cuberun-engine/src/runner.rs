use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
use crate::core::time::{FixedTimestep, FpsCounter};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderBuffer;
use crate::systems::render::build_render_buffer;

/// Generic game runner wiring up the frame loop: input → fixed-step
/// updates → render buffer. The host drives it by pushing input events and
/// calling `tick` with the real frame delta, then reads the buffers.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    fps: FpsCounter,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let ctx = EngineContext::new(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            fps: FpsCounter::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        log::info!("engine init: dt={:.4}s", self.config.fixed_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game zero or more fixed steps, then build
    /// the render buffer and run the game's render pass.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.fps.record(dt);
        self.ctx.stats.fps = self.fps.fps();
        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.ctx.stats.frame += 1;
            self.game.update(&mut self.ctx, &self.input);
            // Input events are edge signals: only the first step of a tick
            // may consume them, or a single press would fire per step.
            self.input.drain();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        let mut render_ctx = RenderContext {
            render_buffer: &mut self.render_buffer,
            camera: &self.ctx.camera,
            stats: &self.ctx.stats,
        };
        self.game.render(&mut render_ctx);

        if self.ctx.sounds.len() > self.config.max_sounds {
            log::warn!(
                "sound queue overflow: {} > {}",
                self.ctx.sounds.len(),
                self.config.max_sounds
            );
            self.ctx.sounds.truncate(self.config.max_sounds);
        }
        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "event queue overflow: {} > {}",
                self.ctx.events.len(),
                self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }
    }

    // ---- Host-facing accessors ----

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.ctx.camera.uniform()
    }

    pub fn sounds(&self) -> &[crate::api::types::SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[crate::api::types::GameEvent] {
        &self.ctx.events
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}

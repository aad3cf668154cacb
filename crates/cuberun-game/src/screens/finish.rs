//! Finish: the level-complete screen. Reached through the finish-contact
//! hook; the shipped layout spawns no finish markers, so today it only
//! shows up when a level adds one. Accepts no input.

use cuberun_engine::{EngineContext, FontConfig, RenderContext};

use crate::hud;
use crate::screens::set_ui_camera;

const BANNER_Y: f32 = 328.0;

pub struct FinishScreen;

impl FinishScreen {
    pub fn enter(ctx: &mut EngineContext) -> Self {
        set_ui_camera(ctx);
        Self
    }

    pub fn exit(&self, _ctx: &mut EngineContext) {}

    pub fn render(&self, rc: &mut RenderContext, font: &FontConfig) {
        hud::menu_item(rc, font, "LEVEL COMPLETE", BANNER_Y, true);
        hud::fps_corner(rc, font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::play_config;
    use cuberun_engine::{Camera2D, FrameStats, RenderBuffer};

    #[test]
    fn renders_the_banner() {
        let mut ctx = EngineContext::new(&play_config());
        let screen = FinishScreen::enter(&mut ctx);

        let mut buffer = RenderBuffer::new();
        let camera = Camera2D::new(960.0, 544.0);
        let stats = FrameStats::default();
        let mut rc = RenderContext {
            render_buffer: &mut buffer,
            camera: &camera,
            stats: &stats,
        };
        screen.render(&mut rc, &FontConfig::default());
        assert!(buffer.instance_count() > 0);
    }
}

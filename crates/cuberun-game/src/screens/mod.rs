//! The game's screens. Each screen owns what its `enter` acquires and
//! frees it again in `exit`; the app guarantees exit runs before the next
//! screen's enter.

pub mod finish;
pub mod frontend;
pub mod options;
pub mod pause;
pub mod play;

use cuberun_engine::EngineContext;

use crate::consts::{UI_CENTER, VIRTUAL_H, VIRTUAL_W};

/// Which screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Frontend,
    Play,
    Options,
    Pause,
    Finish,
}

/// Tag shared by menu-owned icon entities.
pub const TAG_UI_ICON: &str = "ui_icon";

/// Park the camera on the fixed virtual screen used by every menu.
pub(crate) fn set_ui_camera(ctx: &mut EngineContext) {
    ctx.camera.set_viewport(VIRTUAL_W, VIRTUAL_H);
    ctx.camera.look_at(UI_CENTER);
}

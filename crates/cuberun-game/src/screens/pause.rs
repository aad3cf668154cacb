//! Pause: three items with a cursor that clamps at both ends.

use cuberun_engine::{EngineContext, FontConfig, RenderContext};

use crate::actions::ActionState;
use crate::hud;
use crate::screens::set_ui_camera;

const CONTINUE_Y: f32 = 328.0;
const OPTIONS_Y: f32 = 288.0;
const QUIT_Y: f32 = 258.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseItem {
    Continue,
    Options,
    Quit,
}

impl PauseItem {
    /// Move the cursor down, clamping at the last item.
    fn next(self) -> Self {
        match self {
            PauseItem::Continue => PauseItem::Options,
            PauseItem::Options => PauseItem::Quit,
            PauseItem::Quit => PauseItem::Quit,
        }
    }

    /// Move the cursor up, clamping at the first item.
    fn prev(self) -> Self {
        match self {
            PauseItem::Continue => PauseItem::Continue,
            PauseItem::Options => PauseItem::Continue,
            PauseItem::Quit => PauseItem::Options,
        }
    }
}

/// What the player picked on the pause screen.
pub type PauseAction = PauseItem;

pub struct PauseMenu {
    cursor: PauseItem,
}

impl PauseMenu {
    /// Owns no resources beyond its cursor.
    pub fn enter(ctx: &mut EngineContext) -> Self {
        set_ui_camera(ctx);
        Self {
            cursor: PauseItem::Continue,
        }
    }

    pub fn exit(&self, _ctx: &mut EngineContext) {}

    pub fn update(&mut self, actions: &ActionState) -> Option<PauseAction> {
        if actions.down {
            self.cursor = self.cursor.next();
        } else if actions.up {
            self.cursor = self.cursor.prev();
        }

        if actions.confirm {
            return Some(self.cursor);
        }
        None
    }

    pub fn render(&self, rc: &mut RenderContext, font: &FontConfig) {
        hud::menu_item(rc, font, "Continue", CONTINUE_Y, self.cursor == PauseItem::Continue);
        hud::menu_item(rc, font, "Options", OPTIONS_Y, self.cursor == PauseItem::Options);
        hud::menu_item(rc, font, "Quit", QUIT_Y, self.cursor == PauseItem::Quit);
        hud::fps_corner(rc, font);
    }

    pub fn cursor(&self) -> PauseItem {
        self.cursor
    }
}

//! Frontend is the main menu: two items, single-step toggle, no wraparound.

use glam::Vec2;

use cuberun_engine::{
    AtlasId, Entity, EntityId, EngineContext, FontConfig, RenderContext, SpriteComponent,
};

use crate::actions::ActionState;
use crate::hud;
use crate::screens::{set_ui_camera, TAG_UI_ICON};
use crate::sprites;

const START_Y: f32 = 328.0;
const OPTIONS_Y: f32 = 240.0;
const ICON_POS: Vec2 = Vec2::new(480.0, 102.0);
const ICON_SIZE: f32 = 32.0;

/// What the player picked on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendAction {
    Start,
    Options,
}

pub struct FrontendMenu {
    start_selected: bool,
    icon: EntityId,
}

impl FrontendMenu {
    /// Acquire the confirm-button icon and reset the highlight.
    pub fn enter(ctx: &mut EngineContext) -> Self {
        set_ui_camera(ctx);
        let icon = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(icon)
                .with_tag(TAG_UI_ICON)
                .with_pos(ICON_POS)
                .with_scale(Vec2::splat(ICON_SIZE))
                .with_sprite(SpriteComponent {
                    atlas: AtlasId(0),
                    col: sprites::ICON_CONFIRM.0,
                    row: sprites::ICON_CONFIRM.1,
                    alpha: 1.0,
                }),
        );
        Self {
            start_selected: true,
            icon,
        }
    }

    /// Free exactly what `enter` acquired.
    pub fn exit(&self, ctx: &mut EngineContext) {
        ctx.despawn(self.icon);
    }

    pub fn update(&mut self, actions: &ActionState) -> Option<FrontendAction> {
        if actions.confirm {
            return Some(if self.start_selected {
                FrontendAction::Start
            } else {
                FrontendAction::Options
            });
        }

        if actions.down && self.start_selected {
            self.start_selected = false;
        }
        if actions.up && !self.start_selected {
            self.start_selected = true;
        }
        None
    }

    pub fn render(&self, rc: &mut RenderContext, font: &FontConfig) {
        hud::menu_item(rc, font, "START THE GAME", START_Y, self.start_selected);
        hud::menu_item(rc, font, "OPTIONS", OPTIONS_Y, !self.start_selected);
        hud::fps_corner(rc, font);
    }

    pub fn start_selected(&self) -> bool {
        self.start_selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_down() -> ActionState {
        ActionState { down: true, ..ActionState::default() }
    }

    fn press_up() -> ActionState {
        ActionState { up: true, ..ActionState::default() }
    }

    fn press_confirm() -> ActionState {
        ActionState { confirm: true, ..ActionState::default() }
    }

    fn menu() -> FrontendMenu {
        FrontendMenu {
            start_selected: true,
            icon: cuberun_engine::EntityId(999),
        }
    }

    #[test]
    fn selection_is_bistable_without_wraparound() {
        let mut m = menu();
        assert!(m.start_selected());

        // Down moves to options; a second down stays put.
        assert!(m.update(&press_down()).is_none());
        assert!(!m.start_selected());
        assert!(m.update(&press_down()).is_none());
        assert!(!m.start_selected());

        // Up moves back to start; a second up stays put.
        m.update(&press_up());
        assert!(m.start_selected());
        m.update(&press_up());
        assert!(m.start_selected());
    }

    #[test]
    fn confirm_picks_the_highlighted_item() {
        let mut m = menu();
        assert_eq!(m.update(&press_confirm()), Some(FrontendAction::Start));

        m.update(&press_down());
        assert_eq!(m.update(&press_confirm()), Some(FrontendAction::Options));
    }

    #[test]
    fn confirm_wins_over_simultaneous_direction() {
        let mut m = menu();
        let both = ActionState { confirm: true, down: true, ..ActionState::default() };
        // The press acts on the highlight as it was when the frame began.
        assert_eq!(m.update(&both), Some(FrontendAction::Start));
    }
}

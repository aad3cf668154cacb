//! Options: sound volume and cube color, reachable from the frontend or
//! from pause. Two rows with the same single-step toggle as the frontend.

use glam::Vec2;

use cuberun_engine::{
    AtlasId, Entity, EntityId, EngineContext, FontConfig, GameEvent, RenderContext,
    SpriteComponent, TextAnchor, push_text,
};

use crate::actions::ActionState;
use crate::audio::events;
use crate::hud;
use crate::screens::{set_ui_camera, TAG_UI_ICON};
use crate::settings::Settings;
use crate::sprites;

const SOUND_Y: f32 = 328.0;
const COLOR_Y: f32 = 288.0;
const BACK_LABEL_POS: Vec2 = Vec2::new(730.0, 122.0);
const ICON_POS: Vec2 = Vec2::new(680.0, 102.0);
const ICON_SIZE: f32 = 32.0;

pub struct OptionsMenu {
    sound_selected: bool,
    icon: EntityId,
}

impl OptionsMenu {
    /// Acquire the back-button icon and reset the highlight.
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
                    col: sprites::ICON_BACK.0,
                    row: sprites::ICON_BACK.1,
                    alpha: 1.0,
                }),
        );
        Self {
            sound_selected: true,
            icon,
        }
    }

    /// Free exactly what `enter` acquired.
    pub fn exit(&self, ctx: &mut EngineContext) {
        ctx.despawn(self.icon);
    }

    /// Returns true when the player backs out.
    pub fn update(
        &mut self,
        actions: &ActionState,
        settings: &mut Settings,
        ctx: &mut EngineContext,
    ) -> bool {
        if actions.cancel {
            return true;
        }

        if self.sound_selected {
            let before = settings.sound_volume;
            if actions.right {
                settings.raise_volume();
            }
            if actions.left {
                settings.lower_volume();
            }
            if settings.sound_volume != before {
                ctx.emit_event(GameEvent {
                    kind: events::VOLUME,
                    a: settings.sound_volume,
                    ..GameEvent::default()
                });
            }
        } else {
            if actions.left {
                settings.cube_color = settings.cube_color.cycled_left();
            }
            if actions.right {
                settings.cube_color = settings.cube_color.cycled_right();
            }
        }

        if actions.down && self.sound_selected {
            self.sound_selected = false;
        }
        if actions.up && !self.sound_selected {
            self.sound_selected = true;
        }
        false
    }

    pub fn render(&self, rc: &mut RenderContext, font: &FontConfig, settings: &Settings) {
        hud::menu_item(
            rc,
            font,
            &format!("SOUND : {:.0}", settings.sound_volume * 10.0),
            SOUND_Y,
            self.sound_selected,
        );
        hud::menu_item(
            rc,
            font,
            &format!("CUBE COLOR: {}", settings.cube_color.label()),
            COLOR_Y,
            !self.sound_selected,
        );
        push_text(
            rc.render_buffer,
            "BACK",
            BACK_LABEL_POS,
            hud::MENU_TEXT_SIZE,
            1.0,
            TextAnchor::Centre,
            font,
        );
        hud::fps_corner(rc, font);
    }

    pub fn sound_selected(&self) -> bool {
        self.sound_selected
    }
}

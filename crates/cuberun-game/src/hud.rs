//! Text readouts: menu items and the in-game HUD.
//!
//! All text goes straight into the render buffer during the render pass.
//! Selection is shown the way the menus have always looked: the highlighted
//! item is half again as large at full opacity, the rest are dimmed.

use glam::Vec2;

use cuberun_engine::{push_text, text_width, FontConfig, RenderContext, TextAnchor};

use crate::consts::{UI_CENTER, VIRTUAL_W};

/// Base glyph size for menu text, in UI units.
pub const MENU_TEXT_SIZE: f32 = 32.0;
/// Glyph size for the highlighted menu item.
pub const MENU_TEXT_SIZE_SELECTED: f32 = 48.0;
/// Opacity of unselected items.
pub const MENU_DIM_ALPHA: f32 = 0.35;

/// Glyph size for the in-world HUD, in world units.
const WORLD_TEXT_SIZE: f32 = 0.5;
const WORLD_TEXT_MARGIN: f32 = 0.4;

/// One centre-anchored menu line at height `y` in UI units.
pub fn menu_item(rc: &mut RenderContext, font: &FontConfig, text: &str, y: f32, selected: bool) {
    let (size, alpha) = if selected {
        (MENU_TEXT_SIZE_SELECTED, 1.0)
    } else {
        (MENU_TEXT_SIZE, MENU_DIM_ALPHA)
    };
    push_text(
        rc.render_buffer,
        text,
        Vec2::new(UI_CENTER.x, y),
        size,
        alpha,
        TextAnchor::Centre,
        font,
    );
}

/// Frame-rate readout in the corner of a menu screen.
pub fn fps_corner(rc: &mut RenderContext, font: &FontConfig) {
    let text = format!("FPS: {:.1}", rc.stats.fps);
    let size = 24.0;
    let x = VIRTUAL_W - text_width(&text, size, font) - 24.0;
    push_text(
        rc.render_buffer,
        &text,
        Vec2::new(x, 24.0),
        size,
        1.0,
        TextAnchor::Left,
        font,
    );
}

/// In-game HUD: health top-left, frame rate top-right. The play camera
/// moves every frame, so HUD lines are placed relative to its viewport.
pub fn play_hud(rc: &mut RenderContext, font: &FontConfig, health: u32) {
    let cam = rc.camera;
    let top = cam.center.y + cam.height / 2.0 - WORLD_TEXT_SIZE / 2.0 - WORLD_TEXT_MARGIN;
    let left = cam.center.x - cam.width / 2.0 + WORLD_TEXT_MARGIN;
    let right = cam.center.x + cam.width / 2.0 - WORLD_TEXT_MARGIN;

    push_text(
        rc.render_buffer,
        &format!("HP {health}"),
        Vec2::new(left, top),
        WORLD_TEXT_SIZE,
        1.0,
        TextAnchor::Left,
        font,
    );

    let fps_text = format!("FPS: {:.1}", rc.stats.fps);
    let fps_x = right - text_width(&fps_text, WORLD_TEXT_SIZE, font);
    push_text(
        rc.render_buffer,
        &fps_text,
        Vec2::new(fps_x, top),
        WORLD_TEXT_SIZE,
        1.0,
        TextAnchor::Left,
        font,
    );
}

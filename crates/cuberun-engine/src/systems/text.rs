//! Bitmap font text rendering.
//!
//! Text is pushed straight into the render buffer as font-atlas instances,
//! rebuilt every frame by the render pass. The atlas is a grid of glyphs
//! laid out in ASCII order, typically 16 columns × 6 rows for printable
//! ASCII (32-127).

use crate::components::sprite::AtlasId;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use glam::Vec2;

/// Configuration for a bitmap font atlas.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Which atlas contains the font glyphs.
    pub atlas: AtlasId,
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as fraction of glyph size.
    pub spacing: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasId(1), // Convention: atlas 0 = game sprites, atlas 1 = font
            cols: 16,
            rows: 6,
            start_char: 32, // space
            spacing: 0.55,
        }
    }
}

/// Horizontal anchoring for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// `pos.x` is the left edge of the first glyph.
    Left,
    /// `pos.x` is the midpoint of the run.
    Centre,
}

/// Convert an ASCII character to grid coordinates (col, row) in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(f32, f32)> {
    let ascii = c as u32;
    let start = font.start_char as u32;

    if ascii < start {
        return None;
    }

    let index = ascii - start;
    let max_chars = font.cols * font.rows;

    if index >= max_chars {
        return None;
    }

    let col = (index % font.cols) as f32;
    let row = (index / font.cols) as f32;

    Some((col, row))
}

/// Advance width of a text run at the given glyph size.
pub fn text_width(text: &str, size: f32, font: &FontConfig) -> f32 {
    text.chars().count() as f32 * size * font.spacing
}

/// Push one run of text into the render buffer as font glyph instances.
///
/// `pos.y` is the vertical centre of the glyphs. Characters outside the
/// font's range are skipped but still advance the cursor, preserving
/// spacing.
pub fn push_text(
    buffer: &mut RenderBuffer,
    text: &str,
    pos: Vec2,
    size: f32,
    alpha: f32,
    anchor: TextAnchor,
    font: &FontConfig,
) {
    let advance = size * font.spacing;
    let mut cursor_x = match anchor {
        TextAnchor::Left => pos.x,
        TextAnchor::Centre => pos.x - text_width(text, size, font) / 2.0,
    };

    for c in text.chars() {
        if let Some((col, row)) = char_to_grid(c, font) {
            buffer.push(RenderInstance {
                x: cursor_x + size / 2.0,
                y: pos.y,
                rotation: 0.0,
                scale_x: size,
                scale_y: size,
                sprite_col: col,
                sprite_row: row,
                alpha,
            });
        }
        cursor_x += advance;
    }
}

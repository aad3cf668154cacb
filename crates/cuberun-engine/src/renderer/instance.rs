use bytemuck::{Pod, Zeroable};

/// Per-instance sprite data handed to the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// Scale is the world-space rendered size in game units on each axis, so
/// non-square level geometry (a 140×1 ground slab) renders at collider size.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space rendered width.
    pub scale_x: f32,
    /// World-space rendered height.
    pub scale_y: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub sprite_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all sprite instances and metadata.
pub struct RenderBuffer {
    /// Sprite instances, ordered by atlas: world sprites (atlas 0) first,
    /// then UI/font glyphs (atlas 1+) after `atlas_split`.
    pub instances: Vec<RenderInstance>,
    /// Index where the atlas split occurs.
    pub atlas_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
            atlas_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.atlas_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_atlas_split(&mut self, split: u32) {
        self.atlas_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for zero-copy host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

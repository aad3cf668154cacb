//! World builder: the hand-authored level.
//!
//! Every body is paired with one scene entity whose render scale equals
//! the collider's full extents, and every body carries its entity id in
//! the physics user data so contact processing can resolve it back.

use glam::Vec2;

use cuberun_engine::{
    AtlasId, BodyDesc, ColliderMaterial, EngineContext, Entity, EntityId, SpriteComponent,
};

use crate::settings::CubeColor;
use crate::sprites;

pub const TAG_PLAYER: &str = "player";
pub const TAG_GROUND: &str = "ground";
pub const TAG_PLATFORM: &str = "platform";
pub const TAG_FINISH: &str = "finish";

pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 4.0);
pub const PLAYER_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 0.5);
pub const PLAYER_DENSITY: f32 = 1.0;

/// Ground segments: (position, half-extents).
const GROUND_SEGMENTS: [(Vec2, Vec2); 2] = [
    (Vec2::new(60.0, 0.0), Vec2::new(70.0, 0.5)),
    (Vec2::new(250.0, -3.0), Vec2::new(100.0, 0.5)),
];

/// Platforms: (position, half-extents). The course is authored in code,
/// not loaded from data.
const PLATFORMS: [(Vec2, Vec2); 10] = [
    (Vec2::new(8.0, 1.0), Vec2::new(0.5, 0.5)),
    (Vec2::new(18.0, 1.0), Vec2::new(0.5, 1.0)),
    (Vec2::new(25.0, 2.5), Vec2::new(0.5, 0.5)),
    (Vec2::new(40.0, 1.0), Vec2::new(4.0, 1.5)),
    (Vec2::new(50.0, 2.5), Vec2::new(0.5, 2.0)),
    (Vec2::new(56.0, 3.5), Vec2::new(0.5, 1.5)),
    (Vec2::new(65.0, 1.25), Vec2::new(0.5, 1.0)),
    (Vec2::new(75.0, 1.25), Vec2::new(10.0, 1.0)),
    (Vec2::new(100.0, 1.25), Vec2::new(5.0, 1.0)),
    (Vec2::new(105.0, 2.0), Vec2::new(1.0, 1.5)),
];

/// Handles into the built level.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub player: EntityId,
}

/// Construct the player, ground segments, and platforms.
pub fn build_level(ctx: &mut EngineContext, color: CubeColor) -> Level {
    let player = spawn_player(ctx, color);

    for (pos, half) in GROUND_SEGMENTS {
        spawn_slab(ctx, TAG_GROUND, sprites::GROUND, pos, half);
    }
    for (pos, half) in PLATFORMS {
        spawn_slab(ctx, TAG_PLATFORM, sprites::PLATFORM, pos, half);
    }

    log::debug!(
        "level built: {} bodies, player at {:?}",
        ctx.physics.body_count(),
        PLAYER_SPAWN
    );
    Level { player }
}

/// Tear the level down again: entities and their bodies.
pub fn release_level(ctx: &mut EngineContext) {
    for tag in [TAG_PLAYER, TAG_GROUND, TAG_PLATFORM, TAG_FINISH] {
        ctx.despawn_by_tag(tag);
    }
}

fn spawn_player(ctx: &mut EngineContext, color: CubeColor) -> EntityId {
    let id = ctx.next_id();
    let (col, row) = color.sprite_cell();
    let entity = Entity::new(id).with_tag(TAG_PLAYER).with_sprite(SpriteComponent {
        atlas: AtlasId(0),
        col,
        row,
        alpha: 1.0,
    });
    let desc = BodyDesc::dynamic(PLAYER_HALF_EXTENTS).with_position(PLAYER_SPAWN);
    let material = ColliderMaterial {
        density: PLAYER_DENSITY,
        ..ColliderMaterial::default()
    };
    ctx.spawn_with_body(entity, desc, material)
}

fn spawn_slab(
    ctx: &mut EngineContext,
    tag: &str,
    cell: (f32, f32),
    pos: Vec2,
    half_extents: Vec2,
) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id).with_tag(tag).with_sprite(SpriteComponent {
        atlas: AtlasId(0),
        col: cell.0,
        row: cell.1,
        alpha: 1.0,
    });
    let desc = BodyDesc::fixed(half_extents).with_position(pos);
    ctx.spawn_with_body(entity, desc, ColliderMaterial::default())
}

use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Groups instances by atlas: world sprites (atlas 0) first, then anything
/// on higher atlases, with `atlas_split` at the boundary. Text pushed by
/// the render pass afterwards lands in the font-atlas region.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut world_instances: Vec<RenderInstance> = Vec::new();
    let mut ui_instances: Vec<RenderInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            scale_x: entity.scale.x,
            scale_y: entity.scale.y,
            sprite_col: sprite.col,
            sprite_row: sprite.row,
            alpha: sprite.alpha,
        };

        if sprite.atlas.0 == 0 {
            world_instances.push(instance);
        } else {
            ui_instances.push(instance);
        }
    }

    let split = world_instances.len() as u32;

    for inst in world_instances {
        buffer.push(inst);
    }
    buffer.set_atlas_split(split);
    for inst in ui_instances {
        buffer.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::{AtlasId, SpriteComponent};
    use glam::Vec2;

    #[test]
    fn build_buffer_groups_by_atlas() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(8.0, 1.0))
                .with_scale(Vec2::new(1.0, 1.0))
                .with_sprite(SpriteComponent::default()),
            Entity::new(EntityId(2))
                .with_pos(Vec2::new(30.0, 40.0))
                .with_scale(Vec2::splat(32.0))
                .with_sprite(SpriteComponent {
                    atlas: AtlasId(1),
                    ..Default::default()
                }),
            Entity::new(EntityId(3))
                .with_pos(Vec2::new(60.0, 0.0))
                .with_scale(Vec2::new(140.0, 1.0))
                .with_sprite(SpriteComponent::default()),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.atlas_split, 2); // 2 world, 1 UI
    }

    #[test]
    fn instances_carry_per_axis_scale() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(250.0, -3.0))
                .with_scale(Vec2::new(200.0, 1.0))
                .with_sprite(SpriteComponent::default()),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let inst = &buffer.instances[0];
        assert_eq!(inst.scale_x, 200.0);
        assert_eq!(inst.scale_y, 1.0);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = Entity::new(EntityId(1)).with_sprite(SpriteComponent::default());
        entity.active = false;

        let entities = vec![entity];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn spriteless_entities_are_skipped() {
        let entities = vec![Entity::new(EntityId(1))];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat-Vec entity storage.
/// Sized for hand-authored levels (a dozen bodies, some UI glyphs), not
/// for millions of entities.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        if let Some(idx) = self.entities.iter().position(|e| e.id == id) {
            Some(self.entities.swap_remove(idx))
        } else {
            None
        }
    }

    /// Remove every entity carrying the given tag.
    /// Returns the removed entities so the caller can clean up their bodies.
    pub fn despawn_by_tag(&mut self, tag: &str) -> Vec<Entity> {
        let mut removed = Vec::new();
        let mut idx = 0;
        while idx < self.entities.len() {
            if self.entities[idx].tag == tag {
                removed.push(self.entities.swap_remove(idx));
            } else {
                idx += 1;
            }
        }
        removed
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Number of entities carrying the given tag.
    pub fn count_by_tag(&self, tag: &str) -> usize {
        self.entities.iter().filter(|e| e.tag == tag).count()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec2::new(8.0, 1.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec2::new(8.0, 1.0));
    }

    #[test]
    fn despawn_removes_entity() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id));
        assert_eq!(scene.len(), 1);
        scene.despawn(id);
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn despawn_by_tag_removes_all_matches() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("platform"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("player"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("platform"));

        let removed = scene.despawn_by_tag("platform");
        assert_eq!(removed.len(), 2);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.find_by_tag("player").unwrap().id, EntityId(2));
    }

    #[test]
    fn count_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("ground"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("ground"));
        scene.spawn(Entity::new(EntityId(3)).with_tag("player"));
        assert_eq!(scene.count_by_tag("ground"), 2);
        assert_eq!(scene.count_by_tag("player"), 1);
        assert_eq!(scene.count_by_tag("finish"), 0);
    }
}

//! Entity collection
//!
//! Owns every entity. Passes work on id snapshots from `collect_ids`, so
//! mutating or retagging during a pass never invalidates iteration.
//! Removal is deferred: `destroy` queues an id, `sweep` drops it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Category, Entity, EntityId, Sprite};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    /// Live entities, sorted by id
    entities: Vec<Entity>,
    /// Ids queued for removal at the next sweep
    doomed: Vec<EntityId>,
    next_id: EntityId,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            doomed: Vec::new(),
            next_id: 1,
        }
    }

    /// Create an entity and return its id
    pub fn create(&mut self, category: Category, pos: Vec2, radius: f32, sprite: Sprite) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        // Ids are handed out in increasing order, so push keeps the vec sorted
        self.entities.push(Entity::new(id, category, pos, radius, sprite));
        id
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let i = self.index_of(id)?;
        Some(&self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let i = self.index_of(id)?;
        Some(&mut self.entities[i])
    }

    /// The first entity of a category (for Player and Spawner, the only one)
    pub fn singleton(&self, category: Category) -> Option<&Entity> {
        self.entities.iter().find(|e| e.category == category)
    }

    pub fn singleton_mut(&mut self, category: Category) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.category == category)
    }

    /// Snapshot of ids in a category, in creation order
    pub fn collect_ids(&self, category: Category) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.id)
            .collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.entities.iter().filter(|e| e.category == category).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Change an entity's category. Destroyed is terminal: returns false
    /// and leaves the entity alone if it is already Destroyed.
    pub fn retag(&mut self, id: EntityId, category: Category) -> bool {
        let Some(entity) = self.get_mut(id) else {
            return false;
        };
        if entity.category == Category::Destroyed {
            return false;
        }
        entity.category = category;
        true
    }

    /// Queue an entity for removal at the next `sweep`
    pub fn destroy(&mut self, id: EntityId) {
        if !self.doomed.contains(&id) {
            self.doomed.push(id);
        }
    }

    pub fn is_doomed(&self, id: EntityId) -> bool {
        self.doomed.contains(&id)
    }

    /// Remove everything queued by `destroy`, returns how many went
    pub fn sweep(&mut self) -> usize {
        if self.doomed.is_empty() {
            return 0;
        }
        let doomed = std::mem::take(&mut self.doomed);
        let before = self.entities.len();
        self.entities.retain(|e| !doomed.contains(&e.id));
        before - self.entities.len()
    }
}

//! Agent registry resource.
//!
//! Maps each mounted entry id to the entity swimming for it. The registry is
//! the single authority on identity: an id can be registered only once at a
//! time, and unregistering is what makes cancellation happen exactly once.
//! It also hands out stacking order so later fish sit on top.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::zindex::ZIndex;

#[derive(Resource, Debug, Default)]
pub struct AgentRegistry {
    by_id: FxHashMap<String, Entity>,
    next_z: u64,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.by_id.get(id).copied()
    }

    /// Register `id` → `entity`. Returns false (and changes nothing) when the
    /// id is already registered.
    pub fn insert(&mut self, id: &str, entity: Entity) -> bool {
        if self.by_id.contains_key(id) {
            return false;
        }
        self.by_id.insert(id.to_string(), entity);
        true
    }

    /// Unregister `id`, returning its entity the first time only.
    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        self.by_id.remove(id)
    }

    /// Take every registration, leaving the registry empty.
    pub fn drain(&mut self) -> Vec<(String, Entity)> {
        self.by_id.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }

    /// Next stacking slot; strictly increasing for the registry's lifetime.
    pub fn next_z(&mut self) -> ZIndex {
        let z = ZIndex(self.next_z);
        self.next_z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut registry = AgentRegistry::new();
        assert!(registry.insert("x", a));
        assert!(!registry.insert("x", b));
        assert_eq!(registry.get("x"), Some(a));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_only_once() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let mut registry = AgentRegistry::new();
        registry.insert("x", a);
        assert_eq!(registry.remove("x"), Some(a));
        assert_eq!(registry.remove("x"), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_next_z_increases() {
        let mut registry = AgentRegistry::new();
        let first = registry.next_z();
        let second = registry.next_z();
        assert!(second > first);
    }

    #[test]
    fn test_drain_empties() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut registry = AgentRegistry::new();
        registry.insert("a", a);
        registry.insert("b", b);
        let mut drained = registry.drain();
        drained.sort();
        assert_eq!(drained.len(), 2);
        assert!(registry.is_empty());
    }
}

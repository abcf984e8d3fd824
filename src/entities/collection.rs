//! Ordered, id-indexed entity collection.

use crate::error::{ResortError, Result};
use crate::types::Entity;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Items in seed order plus an id → position index.
///
/// Positions never change after construction: entities are only ever
/// replaced in place, never inserted or removed.
struct Inner<T> {
    items: Vec<T>,
    by_id: HashMap<String, usize>,
}

/// A single in-memory entity collection.
///
/// Read-only outside the crate:
///
/// ```compile_fail
/// use snowtooth::{Collection, Lift};
///
/// fn rename(lifts: &Collection<Lift>, mut lift: Lift) {
///     lift.name = "Renamed".to_string();
///     lifts.replace(lift);
/// }
/// ```
pub struct Collection<T: Entity> {
    inner: RwLock<Inner<T>>,
}

impl<T: Entity> Collection<T> {
    /// Build a collection from seed order. Fails on a repeated id.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if by_id.insert(item.id().to_string(), pos).is_some() {
                return Err(ResortError::DuplicateId {
                    kind: T::KIND,
                    id: item.id().to_string(),
                });
            }
        }

        Ok(Self {
            inner: RwLock::new(Inner { items, by_id }),
        })
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get an entity by id.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        let inner = self.inner.read();
        inner.by_id.get(id).map(|&pos| inner.items[pos].clone())
    }

    /// First entity with this name, in seed order.
    pub fn find_by_name(&self, name: &str) -> Option<T> {
        self.inner
            .read()
            .items
            .iter()
            .find(|item| item.name() == name)
            .cloned()
    }

    /// All entities with the given status, or all entities when `status` is None.
    /// Seed order is preserved either way.
    pub fn filter_by_status(&self, status: Option<T::Status>) -> Vec<T> {
        match status {
            None => self.snapshot(),
            Some(status) => self.filter(|item| item.status() == status),
        }
    }

    /// Entities matching `predicate`, in seed order.
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Copy of the whole collection.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.read().items.clone()
    }

    /// Substitute the stored entity that has `updated`'s id.
    ///
    /// The slot is addressed by the new value's own id, so an id can never be
    /// reassigned. Returns the previous value, or None if no entity has that
    /// id (in which case nothing is stored).
    ///
    /// Only the mutation engine writes, under its per-collection lock.
    pub(crate) fn replace(&self, updated: T) -> Option<T> {
        let mut inner = self.inner.write();
        let pos = *inner.by_id.get(updated.id())?;
        Some(std::mem::replace(&mut inner.items[pos], updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CollectionKind, Trail, TrailStatus};

    fn trail(id: &str, name: &str, status: TrailStatus) -> Trail {
        Trail {
            id: id.to_string(),
            name: name.to_string(),
            lift: vec![],
            difficulty: "beginner".to_string(),
            status,
            groomed: true,
            snowmaking: false,
            trees: false,
            night: false,
        }
    }

    fn sample() -> Collection<Trail> {
        Collection::new(vec![
            trail("a", "Alpha", TrailStatus::Open),
            trail("b", "Bravo", TrailStatus::Closed),
            trail("c", "Alpha", TrailStatus::Closed),
            trail("d", "Delta", TrailStatus::Open),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id() {
        let trails = sample();
        assert_eq!(trails.len(), 4);
        assert_eq!(trails.find_by_id("b").unwrap().name, "Bravo");
        assert!(trails.find_by_id("zzz").is_none());
    }

    #[test]
    fn test_find_by_name_first_wins() {
        let trails = sample();
        assert_eq!(trails.find_by_name("Alpha").unwrap().id, "a");
        assert!(trails.find_by_name("alpha").is_none());
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let trails = sample();

        let closed: Vec<_> = trails
            .filter_by_status(Some(TrailStatus::Closed))
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(closed, vec!["b", "c"]);

        let all: Vec<_> = trails.filter_by_status(None).into_iter().map(|t| t.id).collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_collection() {
        let trails: Collection<Trail> = Collection::new(vec![]).unwrap();
        assert!(trails.is_empty());
        assert!(trails.filter_by_status(Some(TrailStatus::Open)).is_empty());
        assert!(trails.filter_by_status(None).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Collection::new(vec![
            trail("a", "Alpha", TrailStatus::Open),
            trail("a", "Again", TrailStatus::Open),
        ]);

        match result {
            Err(ResortError::DuplicateId { kind, id }) => {
                assert_eq!(kind, CollectionKind::Trail);
                assert_eq!(id, "a");
            }
            other => panic!("Expected DuplicateId, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_replace_in_place() {
        let trails = sample();

        let previous = trails.replace(trail("c", "Charlie", TrailStatus::Open)).unwrap();
        assert_eq!(previous.name, "Alpha");

        // Position unchanged
        let ids: Vec<_> = trails.snapshot().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(trails.find_by_id("c").unwrap().name, "Charlie");

        assert!(trails.replace(trail("x", "Unknown", TrailStatus::Open)).is_none());
        assert_eq!(trails.len(), 4);
    }

    #[test]
    fn test_replace_keys_on_entity_id() {
        let trails = sample();

        // Same name as "a" but a new id: not stored, index untouched
        assert!(trails.replace(trail("z", "Alpha", TrailStatus::Closed)).is_none());
        assert!(trails.find_by_id("z").is_none());
        assert_eq!(trails.find_by_id("a").unwrap().status, TrailStatus::Open);
        assert_eq!(trails.find_by_name("Alpha").unwrap().id, "a");
    }
}

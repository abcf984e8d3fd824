//! Lift ↔ trail cross references.
//!
//! The relationship is stored redundantly on both sides as id lists. These
//! helpers recompute the resolved side on every call; nothing is cached.

use super::EntityStore;
use crate::types::{Lift, Trail};

/// Trails whose `lift` list names this lift, in trail seed order.
pub fn trails_for_lift(store: &EntityStore, lift: &Lift) -> Vec<Trail> {
    store.trails().filter(|trail| trail.served_by(&lift.id))
}

/// Lifts whose `trails` list names this trail, in lift seed order.
pub fn lifts_for_trail(store: &EntityStore, trail: &Trail) -> Vec<Lift> {
    store.lifts().filter(|lift| lift.serves(&trail.id))
}

/// An id referenced from one collection that the other collection lacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DanglingRef {
    /// A lift lists a trail id that is not seeded.
    Trail { lift: String, trail: String },
    /// A trail lists a lift id that is not seeded.
    Lift { trail: String, lift: String },
}

/// Collect every id-list entry that points at nothing.
///
/// Asymmetric links (A lists B but B does not list A) are not reported;
/// resolution is always driven from the side being asked about.
pub fn dangling_refs(store: &EntityStore) -> Vec<DanglingRef> {
    let mut out = Vec::new();

    for lift in store.lifts().snapshot() {
        for trail in &lift.trails {
            if store.trails().find_by_id(trail).is_none() {
                out.push(DanglingRef::Trail {
                    lift: lift.id.clone(),
                    trail: trail.clone(),
                });
            }
        }
    }

    for trail in store.trails().snapshot() {
        for lift in &trail.lift {
            if store.lifts().find_by_id(lift).is_none() {
                out.push(DanglingRef::Lift {
                    trail: trail.id.clone(),
                    lift: lift.clone(),
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;
    use crate::types::{LiftStatus, TrailStatus};

    fn lift(id: &str, trails: &[&str]) -> Lift {
        Lift {
            id: id.to_string(),
            name: id.to_string(),
            capacity: 4,
            status: LiftStatus::Open,
            night: false,
            elevation_gain: 800,
            time: "7 minutes".to_string(),
            trails: trails.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn trail(id: &str, lifts: &[&str]) -> Trail {
        Trail {
            id: id.to_string(),
            name: id.to_string(),
            lift: lifts.iter().map(|l| l.to_string()).collect(),
            difficulty: "intermediate".to_string(),
            status: TrailStatus::Open,
            groomed: true,
            snowmaking: true,
            trees: false,
            night: false,
        }
    }

    fn store() -> EntityStore {
        EntityStore::new(Seed {
            lifts: vec![
                lift("astra-express", &["blue-bird", "ice-streak"]),
                lift("jazz-cat", &["ice-streak"]),
                lift("summit", &["ghost"]),
            ],
            trails: vec![
                trail("blue-bird", &["astra-express"]),
                trail("ice-streak", &["astra-express", "jazz-cat"]),
                trail("meadow", &[]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_trails_for_lift() {
        let store = store();
        let astra = store.lifts().find_by_id("astra-express").unwrap();

        let ids: Vec<_> = trails_for_lift(&store, &astra).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["blue-bird", "ice-streak"]);
    }

    #[test]
    fn test_lifts_for_trail() {
        let store = store();
        let ice = store.trails().find_by_id("ice-streak").unwrap();

        let ids: Vec<_> = lifts_for_trail(&store, &ice).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["astra-express", "jazz-cat"]);

        let meadow = store.trails().find_by_id("meadow").unwrap();
        assert!(lifts_for_trail(&store, &meadow).is_empty());
    }

    #[test]
    fn test_dangling_refs() {
        let store = store();
        assert_eq!(
            dangling_refs(&store),
            vec![DanglingRef::Trail {
                lift: "summit".to_string(),
                trail: "ghost".to_string(),
            }]
        );
    }
}

//! Property tests for status filtering and mutation.

use proptest::prelude::*;
use snowtooth::{Lift, LiftStatus, Resort, ResortConfig, Seed};

fn lift_status() -> impl Strategy<Value = LiftStatus> {
    prop_oneof![
        Just(LiftStatus::Open),
        Just(LiftStatus::Closed),
        Just(LiftStatus::Hold),
    ]
}

fn lift_seed() -> impl Strategy<Value = Vec<Lift>> {
    prop::collection::vec((lift_status(), 1i64..8, any::<bool>()), 0..30).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (status, capacity, night))| Lift {
                id: format!("lift-{}", i),
                name: format!("Lift {}", i % 7),
                capacity,
                status,
                night,
                elevation_gain: 100 * i as i64,
                time: format!("{} minutes", i + 1),
                trails: vec![],
            })
            .collect()
    })
}

fn resort(lifts: Vec<Lift>) -> Resort {
    Resort::from_seed(
        Seed {
            lifts,
            trails: vec![],
        },
        &ResortConfig::default(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn filter_partitions_collection(lifts in lift_seed()) {
        let resort = resort(lifts.clone());

        let mut total = 0;
        for status in LiftStatus::ALL {
            let filtered = resort.all_lifts(Some(status));
            prop_assert!(filtered.iter().all(|l| l.status == status));

            // Same relative order as the seed
            let expected: Vec<_> = lifts.iter().filter(|l| l.status == status).cloned().collect();
            prop_assert_eq!(&filtered, &expected);
            total += filtered.len();
        }
        prop_assert_eq!(total, lifts.len());
        prop_assert_eq!(resort.all_lifts(None), lifts);
    }

    #[test]
    fn find_by_id_returns_seeded_record(lifts in lift_seed()) {
        let resort = resort(lifts.clone());

        for lift in &lifts {
            let found = resort.find_lift_by_id(&lift.id);
            prop_assert_eq!(found.as_ref(), Some(lift));
        }
        prop_assert!(resort.find_lift_by_id("unseeded").is_none());
    }

    #[test]
    fn mutation_changes_only_status(
        lifts in lift_seed().prop_filter("non-empty", |l| !l.is_empty()),
        pick in any::<prop::sample::Index>(),
        status in lift_status(),
    ) {
        let resort = resort(lifts.clone());
        let changes = resort.lift_status_change();
        let before = pick.get(&lifts).clone();

        let after = resort.set_lift_status(&before.id, status).unwrap();
        prop_assert_eq!(&after, &before.with_status(status));
        prop_assert_eq!(changes.try_next().unwrap(), Some(after));
        prop_assert_eq!(changes.try_next().unwrap(), None);
    }
}

//! Property tests for the synchronizer and join invariants.

use menhir_foundation::{CharacterId, VillageId};
use menhir_model::{Character, Inhabitant, Village, VillagesPage};
use menhir_store::{Store, sync};
use proptest::prelude::*;

/// A small universe: four villages, eight characters.
fn seed_store() -> Store {
    Store::new().load_villages_page(VillagesPage {
        villages: (0..4)
            .map(|v| Village::new(VillageId::new(format!("v{v}")), format!("village {v}")))
            .collect(),
        characters: (0..8)
            .map(|c| {
                Character::for_selection(CharacterId::new(format!("c{c}")), format!("character {c}"))
            })
            .collect(),
    })
}

fn incoming_village(index: usize, members: &[usize]) -> Village {
    let mut village = Village::new(VillageId::new(format!("v{index}")), format!("village {index}"));
    for member in members {
        village = village.with_inhabitant(Inhabitant::new(
            CharacterId::new(format!("c{member}")),
            format!("character {member}"),
        ));
    }
    village
}

fn apply_upserts(ops: &[(usize, Vec<usize>)]) -> Store {
    let mut store = seed_store();
    for (index, members) in ops {
        let village = incoming_village(*index, members);
        let id = village.id.clone();
        store = store.replace_village(&id, village);
    }
    store
}

fn upsert_sequence() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    proptest::collection::vec(
        (0..4usize, proptest::collection::vec(0..8usize, 0..5)),
        1..10,
    )
}

proptest! {
    #[test]
    fn member_sets_stay_pairwise_disjoint(ops in upsert_sequence()) {
        let store = apply_upserts(&ops);
        prop_assert!(sync::members_disjoint(store.villages()));
    }

    #[test]
    fn reapplying_the_last_upsert_changes_nothing(ops in upsert_sequence()) {
        let store = apply_upserts(&ops);
        let (index, members) = ops.last().expect("sequence is non-empty");
        let village = incoming_village(*index, members);
        let id = village.id.clone();
        let again = store.replace_village(&id, village);
        prop_assert_eq!(store, again);
    }

    #[test]
    fn annotations_match_membership(ops in upsert_sequence()) {
        let store = apply_upserts(&ops);
        for character in store.characters() {
            let containing: Vec<_> = store
                .villages()
                .filter(|v| v.contains(&character.id))
                .collect();
            match &character.village {
                Some(annotation) => {
                    prop_assert_eq!(containing.len(), 1);
                    prop_assert_eq!(&containing[0].id, &annotation.id);
                    prop_assert_eq!(&containing[0].name, &annotation.name);
                }
                None => prop_assert!(containing.is_empty()),
            }
        }
    }
}

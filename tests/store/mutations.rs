//! Integration tests for single-entity mutations.
//!
//! Covers the synchronizer and join behavior the CRUD paths trigger.

use menhir_foundation::{CharacterId, VillageId};
use menhir_model::{Character, Inhabitant, Village, VillagesPage};
use menhir_store::Store;

fn character(id: &str, name: &str) -> Character {
    Character::new(CharacterId::new(id), name, 30, "villager")
}

fn village(id: &str, name: &str, members: &[(&str, &str)]) -> Village {
    let mut v = Village::new(VillageId::new(id), name);
    for (member_id, member_name) in members {
        v = v.with_inhabitant(Inhabitant::new(CharacterId::new(*member_id), *member_name));
    }
    v
}

fn two_village_store() -> Store {
    Store::new().load_villages_page(VillagesPage {
        villages: vec![
            village("a", "Alesia", &[("c1", "Asterix"), ("c2", "Obelix")]),
            village("b", "Bibracte", &[("c3", "Dogmatix")]),
        ],
        characters: vec![
            Character::for_selection(CharacterId::new("c1"), "Asterix"),
            Character::for_selection(CharacterId::new("c2"), "Obelix"),
            Character::for_selection(CharacterId::new("c3"), "Dogmatix"),
        ],
    })
}

// =============================================================================
// The documented moving-member scenario
// =============================================================================

#[test]
fn updating_a_village_claims_members_from_the_other() {
    // A{c1,c2}, B{c3}; update B to {c1,c3} => A{c2}, B{c1,c3}.
    let store = two_village_store();
    let updated = store.replace_village(
        &VillageId::new("b"),
        village("b", "Bibracte", &[("c1", "Asterix"), ("c3", "Dogmatix")]),
    );

    let a: Vec<_> = updated
        .village(&VillageId::new("a"))
        .unwrap()
        .member_ids()
        .cloned()
        .collect();
    assert_eq!(a, vec![CharacterId::new("c2")]);

    let b = updated.village(&VillageId::new("b")).unwrap();
    assert!(b.contains(&CharacterId::new("c1")));
    assert!(b.contains(&CharacterId::new("c3")));
}

#[test]
fn annotations_follow_the_move() {
    let store = two_village_store();
    let updated = store.replace_village(
        &VillageId::new("b"),
        village("b", "Bibracte", &[("c1", "Asterix"), ("c3", "Dogmatix")]),
    );

    let asterix = updated.character(&CharacterId::new("c1")).unwrap();
    assert_eq!(asterix.village.as_ref().unwrap().name, "Bibracte");
    let obelix = updated.character(&CharacterId::new("c2")).unwrap();
    assert_eq!(obelix.village.as_ref().unwrap().name, "Alesia");
}

// =============================================================================
// Village lifecycle
// =============================================================================

#[test]
fn new_village_with_claimed_members() {
    let store = two_village_store();
    let updated = store.insert_village(village("c", "Carnutes", &[("c3", "Dogmatix")]));

    assert_eq!(updated.village_count(), 3);
    let b = updated.village(&VillageId::new("b")).unwrap();
    assert_eq!(b.member_ids().count(), 0);
    let dogmatix = updated.character(&CharacterId::new("c3")).unwrap();
    assert_eq!(dogmatix.village.as_ref().unwrap().name, "Carnutes");
}

#[test]
fn removing_a_village_does_not_cascade() {
    let store = two_village_store();
    let updated = store.remove_village(&VillageId::new("a"));

    assert_eq!(updated.character_count(), 3);
    let asterix = updated.character(&CharacterId::new("c1")).unwrap();
    assert!(asterix.village.is_none());
    // The other village is untouched.
    let dogmatix = updated.character(&CharacterId::new("c3")).unwrap();
    assert_eq!(dogmatix.village.as_ref().unwrap().name, "Bibracte");
}

#[test]
fn empty_member_set_update_touches_no_other_village() {
    let store = two_village_store();
    let updated = store.replace_village(&VillageId::new("b"), village("b", "Bibracte", &[]));

    let a = updated.village(&VillageId::new("a")).unwrap();
    assert_eq!(a.member_ids().count(), 2);
    let dogmatix = updated.character(&CharacterId::new("c3")).unwrap();
    assert!(dogmatix.village.is_none());
}

// =============================================================================
// Character lifecycle
// =============================================================================

#[test]
fn character_crud_keeps_order_and_villages() {
    let store = two_village_store()
        .insert_character(character("c4", "Getafix"))
        .replace_character(&CharacterId::new("c4"), character("c4", "Getafix the Druid"))
        .remove_character(&CharacterId::new("c1"));

    let names: Vec<_> = store.characters().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Obelix", "Dogmatix", "Getafix the Druid"]);
    assert_eq!(store.village_count(), 2);
}

#[test]
fn character_update_response_carries_its_annotation() {
    let store = two_village_store();
    let canonical = character("c3", "Dogmatix").with_village(menhir_model::VillageRef::new(
        VillageId::new("b"),
        "Bibracte",
    ));
    let updated = store.replace_character(&CharacterId::new("c3"), canonical);

    let dogmatix = updated.character(&CharacterId::new("c3")).unwrap();
    assert_eq!(dogmatix.village.as_ref().unwrap().name, "Bibracte");
    assert_eq!(dogmatix.profession(), Some("villager"));
}

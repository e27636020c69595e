//! Integration tests for the option projections over real store state.

use menhir_foundation::{CharacterId, VillageId};
use menhir_model::{Character, Inhabitant, Village, VillagesPage};
use menhir_store::Store;
use menhir_view::{NO_VILLAGE_LABEL, Views};

fn loaded_store() -> Store {
    Store::new().load_villages_page(VillagesPage {
        villages: vec![
            Village::new(VillageId::new("v1"), "Alesia")
                .with_inhabitant(Inhabitant::new(CharacterId::new("c1"), "Asterix")),
            Village::new(VillageId::new("v2"), "Bibracte")
                .with_inhabitant(Inhabitant::new(CharacterId::new("c3"), "Dogmatix")),
        ],
        characters: vec![
            Character::for_selection(CharacterId::new("c1"), "Asterix"),
            Character::for_selection(CharacterId::new("c2"), "Obelix"),
            Character::for_selection(CharacterId::new("c3"), "Dogmatix"),
        ],
    })
}

#[test]
fn village_options_follow_input_order() {
    let views = Views::project(&loaded_store());
    let labels: Vec<_> = views
        .village_options
        .iter()
        .map(|o| o.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Alesia", "Bibracte"]);
}

#[test]
fn grouped_options_lead_with_the_synthetic_group() {
    let views = Views::project(&loaded_store());
    let groups = &views.character_groups;

    assert_eq!(groups[0].label, NO_VILLAGE_LABEL);
    let unassigned: Vec<_> = groups[0].options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(unassigned, vec!["c2"]);

    assert_eq!(groups[1].label, "Alesia");
    assert_eq!(groups[2].label, "Bibracte");
}

#[test]
fn group_members_equal_membership_intersected_with_characters() {
    // Remove a character without touching the village: the member list
    // briefly keeps the stale id, but the projection works from the flat
    // character list and never shows it.
    let store = loaded_store().remove_character(&CharacterId::new("c1"));
    assert!(store
        .village(&VillageId::new("v1"))
        .unwrap()
        .contains(&CharacterId::new("c1")));

    let views = Views::project(&store);
    let all_values: Vec<_> = views
        .character_groups
        .iter()
        .flat_map(|g| g.options.iter().map(|o| o.value.as_str()))
        .collect();
    assert!(!all_values.contains(&"c1"));
}

#[test]
fn groups_update_when_a_member_moves() {
    let store = loaded_store();
    let moved = store.replace_village(
        &VillageId::new("v2"),
        Village::new(VillageId::new("v2"), "Bibracte")
            .with_inhabitant(Inhabitant::new(CharacterId::new("c1"), "Asterix"))
            .with_inhabitant(Inhabitant::new(CharacterId::new("c3"), "Dogmatix")),
    );
    let views = Views::project(&moved);

    let alesia = views
        .character_groups
        .iter()
        .find(|g| g.label == "Alesia");
    // Alesia lost its only member; its group disappears from the
    // annotation-driven projection.
    assert!(alesia.is_none());

    let bibracte = views
        .character_groups
        .iter()
        .find(|g| g.label == "Bibracte")
        .unwrap();
    assert_eq!(bibracte.options.len(), 2);
}

#[test]
fn profession_options_come_from_detailed_characters_only() {
    let store = loaded_store()
        .insert_character(Character::new(
            CharacterId::new("c4"),
            "Getafix",
            70,
            "druid",
        ))
        .insert_character(Character::new(
            CharacterId::new("c5"),
            "Cacofonix",
            45,
            "bard",
        ))
        .insert_character(Character::new(
            CharacterId::new("c6"),
            "Second Druid",
            80,
            "druid",
        ));
    let views = Views::project(&store);

    let values: Vec<_> = views
        .profession_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["bard", "druid"]);
}

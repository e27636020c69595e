//! Integration tests for the edit-target resolver against store state.

use menhir_foundation::{CharacterId, VillageId};
use menhir_model::{Character, Village, VillagesPage};
use menhir_store::Store;
use menhir_view::{EditTarget, Resolution};

fn loaded_store() -> Store {
    Store::new().load_villages_page(VillagesPage {
        villages: vec![Village::new(VillageId::new("v1"), "Alesia")],
        characters: vec![Character::for_selection(CharacterId::new("c1"), "Asterix")],
    })
}

#[test]
fn add_identifier_wins_before_the_store_loads() {
    let empty = Store::new();
    let target = EditTarget::from_identifier(Some("add"));
    let resolution = target.resolve(|id| empty.character(&CharacterId::new(id)));
    assert_eq!(resolution, Resolution::Adding);
}

#[test]
fn editing_resolves_once_the_store_holds_the_id() {
    let target = EditTarget::from_identifier(Some("c1"));

    // Before load: the lookup fails, which is a transient, not an error.
    let empty = Store::new();
    let before = target.resolve(|id| empty.character(&CharacterId::new(id)));
    assert_eq!(before, Resolution::Browsing);

    // After load: the same target resolves.
    let store = loaded_store();
    let after = target.resolve(|id| store.character(&CharacterId::new(id)));
    match after {
        Resolution::Editing(character) => assert_eq!(character.name, "Asterix"),
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn resolution_follows_store_updates() {
    let store = loaded_store();
    let target = EditTarget::from_identifier(Some("c1"));

    let resolved = target.resolve(|id| store.character(&CharacterId::new(id)));
    assert!(matches!(resolved, Resolution::Editing(_)));

    // The entity disappears; re-resolving reports no target.
    let store = store.remove_character(&CharacterId::new("c1"));
    let resolved = target.resolve(|id| store.character(&CharacterId::new(id)));
    assert_eq!(resolved, Resolution::Browsing);
}

#[test]
fn village_routes_resolve_against_the_village_collection() {
    let store = loaded_store();

    let target = EditTarget::from_identifier(Some("v1"));
    let resolved = target.resolve(|id| store.village(&VillageId::new(id)));
    match resolved {
        Resolution::Editing(village) => assert_eq!(village.name, "Alesia"),
        other => panic!("expected Editing, got {other:?}"),
    }

    // A character id is not a village id.
    let target = EditTarget::from_identifier(Some("c1"));
    let resolved = target.resolve(|id| store.village(&VillageId::new(id)));
    assert_eq!(resolved, Resolution::Browsing);
}

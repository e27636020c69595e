//! Store state management with immutable snapshots.
//!
//! The `Store` is the in-memory mirror of the server-side Character and
//! Village collections. It uses persistent data structures for O(1)
//! cloning and structural sharing; every mutation returns a new `Store`,
//! so an observer holding the previous value never sees a half-applied
//! update.

use std::sync::Arc;

use im::Vector;
use menhir_foundation::{CharacterId, VillageId};
use menhir_model::{Character, CharactersPage, Inhabitant, Village, VillagesPage};

use crate::join;
use crate::sync;

/// Immutable mirror of the two collections.
///
/// Clone is O(1) due to structural sharing via `Arc`. All mutation
/// methods return a new `Store` with the membership invariant restored
/// and annotations re-derived where the Village collection changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    /// Character records, input-order preserving.
    characters: Arc<Vector<Character>>,
    /// Village records, input-order preserving.
    villages: Arc<Vector<Village>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn from_parts(characters: Vector<Character>, villages: Vector<Village>) -> Self {
        Self {
            characters: Arc::new(characters),
            villages: Arc::new(villages),
        }
    }

    // --- Accessors ---

    /// Iterates the Character collection in input order.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Iterates the Village collection in input order.
    pub fn villages(&self) -> impl Iterator<Item = &Village> {
        self.villages.iter()
    }

    /// Returns the number of Character records.
    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Returns the number of Village records.
    #[must_use]
    pub fn village_count(&self) -> usize {
        self.villages.len()
    }

    /// Looks up a Character by id.
    #[must_use]
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.id == id)
    }

    /// Looks up a Village by id.
    #[must_use]
    pub fn village(&self, id: &VillageId) -> Option<&Village> {
        self.villages.iter().find(|v| &v.id == id)
    }

    // --- Snapshot loads (wholesale replace) ---

    /// Replaces both collections from the character-page snapshot.
    ///
    /// Villages arrive as labels without member lists; the lists are
    /// reconstructed from the characters' payload-seeded annotations so
    /// the membership invariant holds and a later join is an identity on
    /// this state. Annotations themselves are taken from the payload,
    /// not re-derived.
    #[must_use]
    pub fn load_characters_page(&self, page: CharactersPage) -> Self {
        let characters: Vector<Character> = page.characters.into_iter().collect();
        let villages: Vector<Village> = page
            .villages
            .into_iter()
            .map(|label| {
                let mut village = Village::new(label.id, label.name);
                for character in &characters {
                    if character.village.as_ref().is_some_and(|v| v.id == village.id) {
                        village
                            .inhabitants
                            .push(Inhabitant::new(character.id.clone(), character.name.clone()));
                    }
                }
                village
            })
            .collect();
        Self::from_parts(characters, villages)
    }

    /// Replaces both collections from the villages-page snapshot.
    ///
    /// Member lists are authoritative here; the join re-derives every
    /// annotation from them, overwriting whatever the payload carried.
    #[must_use]
    pub fn load_villages_page(&self, page: VillagesPage) -> Self {
        let villages: Vector<Village> = page.villages.into_iter().collect();
        let characters = join::annotate(&page.characters.into_iter().collect(), &villages);
        Self::from_parts(characters, villages)
    }

    // --- Character operations ---

    /// Appends a Character.
    ///
    /// The canonical payload carries its own annotation; the Village
    /// collection is untouched, so no join runs.
    #[must_use]
    pub fn insert_character(&self, character: Character) -> Self {
        let mut characters = (*self.characters).clone();
        characters.push_back(character);
        Self {
            characters: Arc::new(characters),
            villages: Arc::clone(&self.villages),
        }
    }

    /// Replaces the Character with the given id in place.
    ///
    /// A missing id leaves the collection unchanged: the write lost the
    /// race against a concurrent delete, and the most recently completed
    /// write wins only among live records.
    #[must_use]
    pub fn replace_character(&self, id: &CharacterId, character: Character) -> Self {
        let characters: Vector<Character> = self
            .characters
            .iter()
            .map(|existing| {
                if &existing.id == id {
                    character.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        Self {
            characters: Arc::new(characters),
            villages: Arc::clone(&self.villages),
        }
    }

    /// Removes the Character with the given id.
    ///
    /// Member lists may briefly retain the id; the grouped projection
    /// intersects member sets with the flat Character list, so the stale
    /// entry is invisible downstream.
    #[must_use]
    pub fn remove_character(&self, id: &CharacterId) -> Self {
        let characters: Vector<Character> = self
            .characters
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();
        Self {
            characters: Arc::new(characters),
            villages: Arc::clone(&self.villages),
        }
    }

    // --- Village operations ---

    /// Appends a Village, claiming its members from all other Villages.
    ///
    /// Runs the synchronizer (members leave their former Villages) and
    /// the join (annotations re-derived) in one step.
    #[must_use]
    pub fn insert_village(&self, village: Village) -> Self {
        let mut villages = sync::release_members(&self.villages, &village, &village.id);
        villages.push_back(village);
        debug_assert!(sync::members_disjoint(&villages));
        let characters = join::annotate(&self.characters, &villages);
        Self::from_parts(characters, villages)
    }

    /// Replaces the Village with the given id in place, claiming its
    /// members from all other Villages.
    ///
    /// The member strip runs regardless of whether the id is still
    /// present: an update completing after a concurrent delete still
    /// releases the members it claimed. A missing id inserts nothing.
    #[must_use]
    pub fn replace_village(&self, id: &VillageId, village: Village) -> Self {
        let stripped = sync::release_members(&self.villages, &village, id);
        let villages: Vector<Village> = stripped
            .iter()
            .map(|existing| {
                if &existing.id == id {
                    village.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        debug_assert!(sync::members_disjoint(&villages));
        let characters = join::annotate(&self.characters, &villages);
        Self::from_parts(characters, villages)
    }

    /// Removes the Village with the given id.
    ///
    /// Characters are not cascade-deleted; the join marks its former
    /// members villageless.
    #[must_use]
    pub fn remove_village(&self, id: &VillageId) -> Self {
        let villages: Vector<Village> = self
            .villages
            .iter()
            .filter(|v| &v.id != id)
            .cloned()
            .collect();
        let characters = join::annotate(&self.characters, &villages);
        Self::from_parts(characters, villages)
    }
}

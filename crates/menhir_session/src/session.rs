//! Session state: the current store and its derived views.
//!
//! The session is the single-threaded, event-driven owner of the mirror.
//! Each completed remote operation is applied as one atomic step
//! (validate, mutate, synchronize, join, re-project), and the store and
//! views are swapped together, so an observer never sees membership
//! updated without the corresponding annotations and option groups.
//!
//! There is no version or conflict detection between concurrent edits to
//! the same entity: the most recently completed write wins. This is a
//! documented limitation, not a recommendation.

use menhir_foundation::{CharacterId, EntityKind, Error, Notice, Result, VillageId};
use menhir_model::{Character, Village, decode};
use menhir_store::Store;
use menhir_view::{EditTarget, Resolution, Views};

use crate::completion::Completion;

/// Owner of the current [`Store`] and its recomputed [`Views`].
#[derive(Clone, Debug)]
pub struct Session {
    store: Store,
    views: Views,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Store::new();
        let views = Views::project(&store);
        Self { store, views }
    }

    /// Returns the current store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the views derived from the current store.
    #[must_use]
    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Applies one completed remote operation.
    ///
    /// On success the store mutation and the full downstream
    /// recomputation happen as one unit. On failure (the call did not
    /// complete, or its payload failed the validation gate) the store is
    /// left untouched. Either way exactly one [`Notice`] is returned.
    ///
    /// A completion arriving after the user navigated away still updates
    /// the store; it cannot re-open an edit view, because edit state is
    /// resolved from the route identifier, not from completions.
    pub fn apply(&mut self, completion: Completion) -> Notice {
        let operation = completion.operation();
        match self.successor(completion) {
            Ok(store) => {
                let views = Views::project(&store);
                self.store = store;
                self.views = views;
                log::debug!("{operation}: store updated, views recomputed");
                Notice::for_success(operation)
            }
            Err(error) => {
                let error = error.with_operation(operation);
                log::warn!("{operation} rejected: {error}");
                Notice::for_failure(operation)
            }
        }
    }

    /// Resolves a character-page route identifier against the store.
    ///
    /// Re-call whenever the store updates; an id the store does not hold
    /// (yet) resolves to browsing.
    #[must_use]
    pub fn resolve_character(&self, identifier: Option<&str>) -> Resolution<&Character> {
        EditTarget::from_identifier(identifier)
            .resolve(|id| self.store.character(&CharacterId::new(id)))
    }

    /// Resolves a villages-page route identifier against the store.
    #[must_use]
    pub fn resolve_village(&self, identifier: Option<&str>) -> Resolution<&Village> {
        EditTarget::from_identifier(identifier).resolve(|id| self.store.village(&VillageId::new(id)))
    }

    /// Builds the successor store for a completion, without touching
    /// `self`. Validation happens here; the store mutation only runs on
    /// a payload that passed the gate.
    fn successor(&self, completion: Completion) -> Result<Store> {
        match completion {
            Completion::CharactersPage(result) => {
                let value = result.map_err(|e| Error::network_failure(e.detail))?;
                let page = decode::characters_page(&value)?;
                Ok(self.store.load_characters_page(page))
            }
            Completion::VillagesPage(result) => {
                let value = result.map_err(|e| Error::network_failure(e.detail))?;
                let page = decode::villages_page(&value)?;
                Ok(self.store.load_villages_page(page))
            }
            Completion::CharacterAdded(result) => {
                let value = result.map_err(|e| Error::network_failure(e.detail))?;
                let character = decode::character(&value)?;
                Ok(self.store.insert_character(character))
            }
            Completion::CharacterUpdated { id, response } => {
                let value = response.map_err(|e| Error::network_failure(e.detail))?;
                let character = decode::character(&value)?;
                if self.store.character(&id).is_none() {
                    // The update lost the race against a concurrent
                    // delete; the write is dropped, not an error.
                    log::info!(
                        "update dropped: {}",
                        Error::not_found(EntityKind::Character, id.as_str())
                    );
                }
                Ok(self.store.replace_character(&id, character))
            }
            Completion::CharacterRemoved { id, outcome } => {
                outcome.map_err(|e| Error::network_failure(e.detail))?;
                Ok(self.store.remove_character(&id))
            }
            Completion::VillageAdded(result) => {
                let value = result.map_err(|e| Error::network_failure(e.detail))?;
                let village = decode::village(&value)?;
                Ok(self.store.insert_village(village))
            }
            Completion::VillageUpdated { id, response } => {
                let value = response.map_err(|e| Error::network_failure(e.detail))?;
                let village = decode::village(&value)?;
                if self.store.village(&id).is_none() {
                    log::info!(
                        "update dropped: {}",
                        Error::not_found(EntityKind::Village, id.as_str())
                    );
                }
                Ok(self.store.replace_village(&id, village))
            }
            Completion::VillageRemoved { id, outcome } => {
                outcome.map_err(|e| Error::network_failure(e.detail))?;
                Ok(self.store.remove_village(&id))
            }
        }
    }
}

//! The bundle of derived projections.

use menhir_store::Store;

use crate::options::{self, OptionGroup, SelectOption};

/// All derived, read-only views of the store, recomputed as one unit
/// after every store mutation.
///
/// A renderer consuming a `Views` value never sees membership updated
/// without the corresponding option groups updated: the session swaps
/// store and views together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Views {
    /// Single-select village options, input order preserving.
    pub village_options: Vec<SelectOption>,
    /// Grouped multi-select character options, "no village" group first.
    pub character_groups: Vec<OptionGroup>,
    /// Distinct, sorted profession options.
    pub profession_options: Vec<SelectOption>,
}

impl Views {
    /// Recomputes every projection from the given store.
    #[must_use]
    pub fn project(store: &Store) -> Self {
        Self {
            village_options: options::village_options(store.villages()),
            character_groups: options::character_groups(store.characters()),
            profession_options: options::profession_options(store.characters()),
        }
    }
}

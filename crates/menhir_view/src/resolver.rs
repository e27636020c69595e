//! The edit-target resolver.
//!
//! A small state machine mapping the external route identifier to "which
//! entity, if any, is being edited". Parsing the identifier and resolving
//! it against the store are separate steps: the identifier changes when
//! the user navigates, while resolution is re-evaluated on every store
//! update.

/// Reserved route identifier meaning "create new".
///
/// Distinct from any real entity id by server contract.
pub const ADD_IDENTIFIER: &str = "add";

/// The edit-target state derived from the external route identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    /// No identifier: plain browsing.
    Browsing,
    /// The reserved add identifier: creating a new record.
    Adding,
    /// A concrete identifier naming a record to edit.
    Editing(String),
}

impl EditTarget {
    /// Parses the route identifier.
    ///
    /// Holds regardless of store content; `"add"` is `Adding` even before
    /// the first snapshot has loaded.
    #[must_use]
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        match identifier {
            None => Self::Browsing,
            Some(ADD_IDENTIFIER) => Self::Adding,
            Some(id) => Self::Editing(id.to_string()),
        }
    }

    /// Resolves this target against the current store via `lookup`.
    ///
    /// A failed lookup in `Editing` (store not yet loaded, or an unknown
    /// id) resolves to `Browsing`: an expected transient during async
    /// load races, not an error to surface. Call again whenever the store
    /// updates.
    #[must_use]
    pub fn resolve<T>(&self, lookup: impl FnOnce(&str) -> Option<T>) -> Resolution<T> {
        match self {
            Self::Browsing => Resolution::Browsing,
            Self::Adding => Resolution::Adding,
            Self::Editing(id) => lookup(id).map_or(Resolution::Browsing, Resolution::Editing),
        }
    }
}

/// The outcome of resolving an [`EditTarget`] against the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Nothing is being edited.
    Browsing,
    /// A new record is being created.
    Adding,
    /// The named record is being edited.
    Editing(T),
}

impl<T> Resolution<T> {
    /// Returns the edit target, if any.
    #[must_use]
    pub fn target(self) -> Option<T> {
        match self {
            Self::Editing(target) => Some(target),
            Self::Browsing | Self::Adding => None,
        }
    }
}

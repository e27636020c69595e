//! The Village record and its denormalized member list.

use menhir_foundation::{CharacterId, VillageId};

/// A Village record as mirrored client-side.
///
/// The member list is denormalized and may be partially populated
/// depending on the source endpoint: the character-page snapshot serves
/// villages as labels only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Village {
    /// Server-assigned identifier.
    pub id: VillageId,
    /// Display name.
    pub name: String,
    /// Denormalized member list.
    pub inhabitants: Vec<Inhabitant>,
}

impl Village {
    /// Creates a village with an empty member list.
    #[must_use]
    pub fn new(id: VillageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inhabitants: Vec::new(),
        }
    }

    /// Adds a member.
    #[must_use]
    pub fn with_inhabitant(mut self, inhabitant: Inhabitant) -> Self {
        self.inhabitants.push(inhabitant);
        self
    }

    /// Iterates the member ids.
    pub fn member_ids(&self) -> impl Iterator<Item = &CharacterId> {
        self.inhabitants.iter().map(|i| &i.id)
    }

    /// Returns true if the given Character is in the member list.
    #[must_use]
    pub fn contains(&self, id: &CharacterId) -> bool {
        self.inhabitants.iter().any(|i| &i.id == id)
    }
}

/// A member entry in a Village's denormalized list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inhabitant {
    /// The member Character's id.
    pub id: CharacterId,
    /// The member Character's name at snapshot time.
    pub name: String,
}

impl Inhabitant {
    /// Creates a member entry.
    #[must_use]
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The label-only village shape served by the character-page snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VillageLabel {
    /// Server-assigned identifier.
    pub id: VillageId,
    /// Display name.
    pub name: String,
}

impl VillageLabel {
    /// Creates a label.
    #[must_use]
    pub fn new(id: VillageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

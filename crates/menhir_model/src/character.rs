//! The Character record and its derived village annotation.

use menhir_foundation::{CharacterId, VillageId};

/// A Character record as mirrored client-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    /// Server-assigned identifier.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Demographic fields. `None` when the record came from an endpoint
    /// that serves selection data only (the villages-page snapshot).
    pub details: Option<CharacterDetails>,
    /// Derived village annotation. Overwritten wholesale by the join;
    /// never partially merged.
    pub village: Option<VillageRef>,
}

impl Character {
    /// Creates a full record with no village annotation.
    #[must_use]
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        age: u32,
        profession: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            details: Some(CharacterDetails {
                age,
                profession: profession.into(),
            }),
            village: None,
        }
    }

    /// Creates a selection-only record (no demographics).
    #[must_use]
    pub fn for_selection(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            details: None,
            village: None,
        }
    }

    /// Returns a copy annotated with the given village reference.
    #[must_use]
    pub fn with_village(mut self, village: VillageRef) -> Self {
        self.village = Some(village);
        self
    }

    /// The profession, if demographics are populated.
    #[must_use]
    pub fn profession(&self) -> Option<&str> {
        self.details.as_ref().map(|d| d.profession.as_str())
    }
}

/// Demographic fields served only by the full character shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterDetails {
    /// Age in years. The wire gate rejects negative or fractional values.
    pub age: u32,
    /// Free-form profession label.
    pub profession: String,
}

/// Denormalized reference to the Village a Character belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VillageRef {
    /// The Village's id.
    pub id: VillageId,
    /// The Village's name at annotation time.
    pub name: String,
}

impl VillageRef {
    /// Creates a reference.
    #[must_use]
    pub fn new(id: VillageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

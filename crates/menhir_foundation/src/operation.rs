//! Descriptors for the remote operations the engine consumes.

use std::fmt;

/// The remote operation a completion, error, or notice belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch the character-page snapshot.
    LoadCharactersPage,
    /// Fetch the villages-page snapshot.
    LoadVillagesPage,
    /// Create a Character.
    AddCharacter,
    /// Update a Character.
    UpdateCharacter,
    /// Delete a Character.
    RemoveCharacter,
    /// Create a Village.
    AddVillage,
    /// Update a Village.
    UpdateVillage,
    /// Delete a Village.
    RemoveVillage,
}

impl Operation {
    /// Notice wording for a successful completion of this operation.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::LoadCharactersPage => "character list loaded",
            Self::LoadVillagesPage => "village list loaded",
            Self::AddCharacter | Self::UpdateCharacter => "character saved",
            Self::RemoveCharacter => "character deleted",
            Self::AddVillage | Self::UpdateVillage => "village saved",
            Self::RemoveVillage => "village deleted",
        }
    }

    /// Notice wording for a failed completion of this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::LoadCharactersPage => "failed to load character list",
            Self::LoadVillagesPage => "failed to load village list",
            Self::AddCharacter | Self::UpdateCharacter => "failed to save character",
            Self::RemoveCharacter => "failed to delete character",
            Self::AddVillage | Self::UpdateVillage => "failed to save village",
            Self::RemoveVillage => "failed to delete village",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LoadCharactersPage => "load characters page",
            Self::LoadVillagesPage => "load villages page",
            Self::AddCharacter => "add character",
            Self::UpdateCharacter => "update character",
            Self::RemoveCharacter => "remove character",
            Self::AddVillage => "add village",
            Self::UpdateVillage => "update village",
            Self::RemoveVillage => "remove village",
        };
        write!(f, "{name}")
    }
}

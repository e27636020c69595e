//! Serializable request bodies for the add/update operations.
//!
//! The transport collaborator owns the HTTP calls; these types pin the
//! request shapes (camelCase wire casing) so the page shell never builds
//! JSON by hand.

use menhir_foundation::{CharacterId, VillageId};
use serde::Serialize;

/// Request body for character add/update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInput {
    /// Display name.
    pub name: String,
    /// Free-form profession label.
    pub profession: String,
    /// Age in years.
    pub age: u32,
    /// Village assignment; `None` serializes as null ("no village").
    pub village_id: Option<VillageId>,
}

/// Request body for village add/update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageInput {
    /// Display name.
    pub name: String,
    /// The full desired member set, by Character id.
    pub character_ids: Vec<CharacterId>,
}

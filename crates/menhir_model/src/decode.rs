//! The validation gate: typed decoding of untyped inbound payloads.
//!
//! Every payload crossing the network boundary (page snapshot or
//! single-entity response) is decoded here before any merge into the
//! store. Required fields must be present with correct primitive types;
//! optional/nested fields are validated recursively when present; unknown
//! fields are ignored. Failure rejects the payload outright, with no
//! partial application, and maps to [`ErrorKind::ShapeMismatch`] naming
//! the payload.
//!
//! [`ErrorKind::ShapeMismatch`]: menhir_foundation::ErrorKind::ShapeMismatch

use menhir_foundation::{CharacterId, Error, Result, VillageId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::character::{Character, CharacterDetails, VillageRef};
use crate::snapshot::{CharactersPage, VillagesPage};
use crate::village::{Inhabitant, Village, VillageLabel};

/// Decodes a character-page snapshot.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the payload fails validation.
pub fn characters_page(value: &Value) -> Result<CharactersPage> {
    let wire = WireCharactersPage::deserialize(value)
        .map_err(|e| Error::shape_mismatch("character-page snapshot", e.to_string()))?;
    Ok(CharactersPage {
        characters: wire.characters.into_iter().map(Character::from).collect(),
        villages: wire.villages.into_iter().map(VillageLabel::from).collect(),
    })
}

/// Decodes a villages-page snapshot.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the payload fails validation.
pub fn villages_page(value: &Value) -> Result<VillagesPage> {
    let wire = WireVillagesPage::deserialize(value)
        .map_err(|e| Error::shape_mismatch("villages-page snapshot", e.to_string()))?;
    Ok(VillagesPage {
        villages: wire.villages.into_iter().map(Village::from).collect(),
        characters: wire.characters.into_iter().map(Character::from).collect(),
    })
}

/// Decodes a canonical character entity response.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the payload fails validation.
pub fn character(value: &Value) -> Result<Character> {
    let wire = WireCharacter::deserialize(value)
        .map_err(|e| Error::shape_mismatch("character", e.to_string()))?;
    Ok(wire.into())
}

/// Decodes a canonical village entity response.
///
/// # Errors
///
/// Returns `ShapeMismatch` if the payload fails validation.
pub fn village(value: &Value) -> Result<Village> {
    let wire = WireVillage::deserialize(value)
        .map_err(|e| Error::shape_mismatch("village", e.to_string()))?;
    Ok(wire.into())
}

/// Deserializes a nullable field whose key must still be present.
///
/// Plain `Option<T>` fields default to `None` on a missing key; routing
/// through this helper removes that default, so absence is a shape error
/// while an explicit null stays accepted.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Deserialize)]
struct WireCharactersPage {
    characters: Vec<WireCharacter>,
    villages: Vec<WireVillageLabel>,
}

#[derive(Deserialize)]
struct WireVillagesPage {
    villages: Vec<WireVillage>,
    characters: Vec<WireSelectCharacter>,
}

#[derive(Deserialize)]
struct WireCharacter {
    id: String,
    name: String,
    age: u32,
    profession: String,
    #[serde(default)]
    village: Option<WireVillage>,
}

impl From<WireCharacter> for Character {
    fn from(wire: WireCharacter) -> Self {
        Self {
            id: CharacterId::new(wire.id),
            name: wire.name,
            details: Some(CharacterDetails {
                age: wire.age,
                profession: wire.profession,
            }),
            village: wire
                .village
                .map(|v| VillageRef::new(VillageId::new(v.id), v.name)),
        }
    }
}

#[derive(Deserialize)]
struct WireVillage {
    id: String,
    name: String,
    #[serde(default)]
    characters: Option<Vec<WireNestedCharacter>>,
}

impl From<WireVillage> for Village {
    fn from(wire: WireVillage) -> Self {
        Self {
            id: VillageId::new(wire.id),
            name: wire.name,
            inhabitants: wire
                .characters
                .unwrap_or_default()
                .into_iter()
                .map(|c| Inhabitant::new(CharacterId::new(c.id), c.name))
                .collect(),
        }
    }
}

/// The character shape nested inside a village payload.
///
/// The server embeds full character records; only id and name survive
/// into the denormalized member list, but the demographic fields are
/// still type-checked so a malformed nested record rejects the whole
/// payload.
#[derive(Deserialize)]
struct WireNestedCharacter {
    id: String,
    name: String,
    #[allow(dead_code)]
    age: u32,
    #[allow(dead_code)]
    profession: String,
}

#[derive(Deserialize)]
struct WireVillageLabel {
    id: String,
    name: String,
}

impl From<WireVillageLabel> for VillageLabel {
    fn from(wire: WireVillageLabel) -> Self {
        Self {
            id: VillageId::new(wire.id),
            name: wire.name,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSelectCharacter {
    id: String,
    name: String,
    #[serde(deserialize_with = "nullable")]
    village_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    village_name: Option<String>,
}

impl From<WireSelectCharacter> for Character {
    fn from(wire: WireSelectCharacter) -> Self {
        let village = match (wire.village_id, wire.village_name) {
            (Some(id), Some(name)) => Some(VillageRef::new(VillageId::new(id), name)),
            _ => None,
        };
        Self {
            id: CharacterId::new(wire.id),
            name: wire.name,
            details: None,
            village,
        }
    }
}

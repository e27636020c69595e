//! Decoded page snapshots.

use crate::character::Character;
use crate::village::{Village, VillageLabel};

/// The character-page snapshot: full characters plus label-only villages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharactersPage {
    /// Full character records, annotations seeded from the payload.
    pub characters: Vec<Character>,
    /// Villages as id/name labels; member lists are not served here.
    pub villages: Vec<VillageLabel>,
}

/// The villages-page snapshot: full villages plus selection characters.
///
/// The characters carry pre-joined annotations and no demographics; they
/// seed the initial join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VillagesPage {
    /// Full village records with authoritative member lists.
    pub villages: Vec<Village>,
    /// Selection characters (id, name, annotation only).
    pub characters: Vec<Character>,
}

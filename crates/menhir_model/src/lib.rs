//! Entity types, input payloads, and wire decoding for Menhir.
//!
//! This crate provides:
//! - [`Character`] / [`Village`] - The mirrored record types
//! - [`CharacterInput`] / [`VillageInput`] - Serializable request bodies
//! - [`decode`] - The validation gate turning untyped JSON into typed records
//! - [`CharactersPage`] / [`VillagesPage`] - Decoded page snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod character;
pub mod decode;
mod input;
mod snapshot;
mod village;

pub use character::{Character, CharacterDetails, VillageRef};
pub use input::{CharacterInput, VillageInput};
pub use snapshot::{CharactersPage, VillagesPage};
pub use village::{Inhabitant, Village, VillageLabel};

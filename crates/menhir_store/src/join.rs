//! The join/annotation pass.
//!
//! Re-derives every Character's village annotation by scanning the
//! Village collection for membership: a full O(V×C) pass that overwrites
//! all prior annotations, so a Character that moved or became villageless
//! never shows stale data.

use im::Vector;
use menhir_model::{Character, Village, VillageRef};

/// Recomputes every Character's village annotation from membership.
///
/// A Character contained in some Village's member list is annotated with
/// that Village's id and name; all others end up with no annotation.
/// Member lists are pairwise disjoint (see [`crate::sync`]), so the first
/// containing Village is the only one.
#[must_use]
pub fn annotate(characters: &Vector<Character>, villages: &Vector<Village>) -> Vector<Character> {
    characters
        .iter()
        .map(|character| {
            let home = villages
                .iter()
                .find(|village| village.contains(&character.id));
            let mut annotated = character.clone();
            annotated.village = home.map(|v| VillageRef::new(v.id.clone(), v.name.clone()));
            annotated
        })
        .collect()
}

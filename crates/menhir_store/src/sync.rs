//! The membership synchronizer.
//!
//! A Character belongs to at most one Village. Whenever a Village arrives
//! with a member set M, every *other* Village's member list loses M, a
//! plain set difference by Character id in a single pass with no
//! cascading fetch. Re-applying the same incoming Village is a no-op
//! (idempotent), and the order in which the other villages are processed
//! does not matter.

use std::collections::HashSet;

use im::Vector;
use menhir_foundation::{CharacterId, VillageId};
use menhir_model::Village;

/// Strips the incoming Village's member ids from every other Village.
///
/// `incoming_id` is the identity of the upserted Village; the entry with
/// that id (if present) is left untouched, since the caller replaces it
/// wholesale afterwards. An empty member set touches nothing.
#[must_use]
pub fn release_members(
    villages: &Vector<Village>,
    incoming: &Village,
    incoming_id: &VillageId,
) -> Vector<Village> {
    let claimed: HashSet<&CharacterId> = incoming.member_ids().collect();
    if claimed.is_empty() {
        return villages.clone();
    }
    villages
        .iter()
        .map(|village| {
            if &village.id == incoming_id {
                return village.clone();
            }
            let mut released = village.clone();
            released
                .inhabitants
                .retain(|inhabitant| !claimed.contains(&inhabitant.id));
            released
        })
        .collect()
}

/// Checks the pairwise-disjointness invariant over a village collection.
///
/// Every id may appear in at most one member list. Exposed for tests and
/// debug assertions; the mutation paths in [`crate::Store`] maintain the
/// invariant by construction.
#[must_use]
pub fn members_disjoint<'a, I>(villages: I) -> bool
where
    I: IntoIterator<Item = &'a Village>,
{
    let mut seen: HashSet<&CharacterId> = HashSet::new();
    for village in villages {
        for id in village.member_ids() {
            if !seen.insert(id) {
                return false;
            }
        }
    }
    true
}

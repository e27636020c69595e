//! Completed remote operations, as values.
//!
//! The transport collaborator performs the HTTP calls; when one finishes
//! it hands the session a `Completion` describing which operation ended
//! and how. Completions for different entities are independent and may
//! arrive in any order.

use menhir_foundation::{CharacterId, Operation, VillageId};
use serde_json::Value;
use thiserror::Error;

/// Terminal outcome of one remote call, as the transport reports it.
pub type TransportResult<T = Value> = Result<T, TransportFailure>;

/// A remote call that did not complete.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct TransportFailure {
    /// Transport-level detail (connection error, timeout, HTTP status).
    pub detail: String,
}

impl TransportFailure {
    /// Creates a failure with the given detail.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// A completed remote operation, ready to be applied to the session.
///
/// Successful add/update completions carry the canonical entity payload,
/// still untyped; the session runs it through the validation gate before
/// any merge. Successful removes carry no payload.
#[derive(Clone, Debug)]
pub enum Completion {
    /// The character-page snapshot fetch finished.
    CharactersPage(TransportResult),
    /// The villages-page snapshot fetch finished.
    VillagesPage(TransportResult),
    /// A character add finished.
    CharacterAdded(TransportResult),
    /// A character update finished.
    CharacterUpdated {
        /// The id the update was addressed to.
        id: CharacterId,
        /// The canonical updated entity, if the call completed.
        response: TransportResult,
    },
    /// A character delete finished.
    CharacterRemoved {
        /// The id the delete was addressed to.
        id: CharacterId,
        /// Success carries no payload.
        outcome: TransportResult<()>,
    },
    /// A village add finished.
    VillageAdded(TransportResult),
    /// A village update finished.
    VillageUpdated {
        /// The id the update was addressed to.
        id: VillageId,
        /// The canonical updated entity, if the call completed.
        response: TransportResult,
    },
    /// A village delete finished.
    VillageRemoved {
        /// The id the delete was addressed to.
        id: VillageId,
        /// Success carries no payload.
        outcome: TransportResult<()>,
    },
}

impl Completion {
    /// The operation this completion belongs to.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::CharactersPage(_) => Operation::LoadCharactersPage,
            Self::VillagesPage(_) => Operation::LoadVillagesPage,
            Self::CharacterAdded(_) => Operation::AddCharacter,
            Self::CharacterUpdated { .. } => Operation::UpdateCharacter,
            Self::CharacterRemoved { .. } => Operation::RemoveCharacter,
            Self::VillageAdded(_) => Operation::AddVillage,
            Self::VillageUpdated { .. } => Operation::UpdateVillage,
            Self::VillageRemoved { .. } => Operation::RemoveVillage,
        }
    }
}

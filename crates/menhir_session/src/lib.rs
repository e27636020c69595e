//! Completion pipeline, notices, and logging bootstrap for Menhir.
//!
//! This crate provides:
//! - [`Completion`] - Terminal outcomes of remote operations, as values
//! - [`Session`] - Owner of the current store + views; applies completions
//! - [`logging`] - Idempotent logging bootstrap for embedding shells

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod completion;
pub mod logging;
mod session;

pub use completion::{Completion, TransportFailure, TransportResult};
pub use session::Session;

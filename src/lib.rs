//! Menhir - client-side relational consistency & view-projection engine
//!
//! This crate re-exports all layers of the Menhir system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: menhir_session    — completion pipeline, notices, logging
//! Layer 3: menhir_view       — option projections, edit-target resolver
//! Layer 2: menhir_store      — immutable store, synchronizer, join
//! Layer 1: menhir_model      — entities, inputs, wire decoding
//! Layer 0: menhir_foundation — ids, errors, notices, operations
//! ```

pub use menhir_foundation as foundation;
pub use menhir_model as model;
pub use menhir_session as session;
pub use menhir_store as store;
pub use menhir_view as view;

//! Immutable entity store, membership synchronizer, and join for Menhir.
//!
//! This crate provides:
//! - [`Store`] - Immutable mirror of the Character/Village collections
//! - [`sync`] - The membership synchronizer (pairwise-disjoint invariant)
//! - [`join`] - The annotation pass deriving village references

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod join;
mod store;
pub mod sync;

pub use store::Store;

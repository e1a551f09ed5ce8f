//! searchbind — compile boolean free-text search trees into record predicates.
//!
//! This crate re-exports the compiler and the dataset layer so that the
//! integration harnesses and the CLI can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! SearchNode ──► SearchCompiler ──► Predicate<T> ──► Dataset::search
//!                      │
//!                      └──► TemplateRegistry (built once from Config)
//! ```

pub mod cli;

pub use searchbind_core::*;
pub use searchbind_data::{seed, DataError, Dataset, Table};

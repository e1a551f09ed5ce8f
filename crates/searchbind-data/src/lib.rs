//! searchbind-data — record datasets for searchbind.
//!
//! A [`Dataset`] holds every record collection a search may run against. It
//! is loaded from JSON or built from the start-up [`seed`]. Searches are run
//! with a [`searchbind_core::Predicate`] compiled for the collection's type.

pub mod dataset;
pub mod error;
pub mod seed;

pub use dataset::{Dataset, Table};
pub use error::DataError;
pub use seed::seed;

//! Story graph domain model.

pub mod error;
pub mod graph;
pub mod page;

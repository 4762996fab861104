//! Adventure Story: branching narrative graph.
//!
//! A story is a fixed set of pages, each offering up to two labeled choices
//! that lead to other pages. This crate builds and validates that graph once
//! and answers single-step navigation queries over it. The reader's current
//! page is always owned by the caller.

pub mod application;
pub mod domain;

pub use domain::error::{GraphDefect, StoryError};
pub use domain::graph::{StoryDefinition, StoryGraph};
pub use domain::page::{Choice, Page, PageId, Slot};

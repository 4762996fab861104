//! Read-only views over the story graph.

pub mod query_handlers;

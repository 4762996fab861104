//! Story graph error types.

use thiserror::Error;

use super::page::{PageId, Slot};

/// A structural defect found while building a story graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphDefect {
    /// A choice points at a page that is not defined.
    #[error("choice {slot} on page '{page}' targets undefined page '{target}'")]
    DanglingTarget {
        /// The page holding the broken choice.
        page: PageId,
        /// The slot of the broken choice.
        slot: Slot,
        /// The undefined target.
        target: PageId,
    },

    /// The declared root is not among the defined pages.
    #[error("root page '{0}' is not defined")]
    MissingRoot(PageId),

    /// Two pages share an identifier.
    #[error("page '{0}' is defined more than once")]
    DuplicatePage(PageId),

    /// The definition contains no pages.
    #[error("story defines no pages")]
    Empty,
}

/// Errors raised by the story graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    /// The definition could not be built into a graph.
    #[error("malformed story graph: {0}")]
    MalformedGraph(#[from] GraphDefect),

    /// The requested slot holds no choice on the given page.
    #[error("page '{page}' has no {slot} choice")]
    InvalidChoice {
        /// The page the caller tried to leave.
        page: PageId,
        /// The empty slot that was requested.
        slot: Slot,
    },
}

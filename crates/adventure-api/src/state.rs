//! Shared application state.

use std::sync::Arc;

use crate::content::LoadedStory;

/// Application state shared across all request handlers.
///
/// The story is built before the server starts and never changes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The story being served.
    pub story: Arc<LoadedStory>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(story: LoadedStory) -> Self {
        Self {
            story: Arc::new(story),
        }
    }
}

//! Query handlers for the story graph.
//!
//! This module turns graph pages into read-only view DTOs for presentation
//! clients. Navigation state is never stored here: every handler takes the
//! page the reader is currently on.

use serde::Serialize;
use tracing::debug;

use crate::domain::error::StoryError;
use crate::domain::graph::StoryGraph;
use crate::domain::page::{Page, PageId, Slot};

/// Read-only view of a single choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// The slot this choice occupies.
    pub slot: Slot,
    /// The label to render.
    pub title: String,
    /// The page this choice leads to.
    pub target: PageId,
}

/// Read-only view of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// The page identifier.
    pub page_id: PageId,
    /// Body copy.
    pub text: String,
    /// Opaque artwork reference.
    pub artwork: Option<String>,
    /// Whether the page is an ending.
    pub terminal: bool,
    /// Available choices, first slot before second.
    pub choices: Vec<ChoiceView>,
}

/// Builds the view of `page`.
#[must_use]
pub fn view_page(graph: &StoryGraph, page: &Page) -> PageView {
    let choices = graph
        .choices(page)
        .into_iter()
        .map(|(slot, choice)| ChoiceView {
            slot,
            title: choice.title.clone(),
            target: choice.target.clone(),
        })
        .collect();

    PageView {
        page_id: page.id.clone(),
        text: page.text.clone(),
        artwork: page.artwork.clone(),
        terminal: graph.is_terminal(page),
        choices,
    }
}

/// Builds the view of the entry page.
#[must_use]
pub fn view_root(graph: &StoryGraph) -> PageView {
    view_page(graph, graph.root())
}

/// Builds the view shown after a "play again" action.
#[must_use]
pub fn view_restart(graph: &StoryGraph) -> PageView {
    view_page(graph, graph.restart())
}

/// Follows `slot` from `page` and builds the view of the destination.
///
/// # Errors
///
/// Returns `StoryError::InvalidChoice` if `page` has no choice in `slot`.
pub fn view_follow(graph: &StoryGraph, page: &Page, slot: Slot) -> Result<PageView, StoryError> {
    let target = graph.follow(page, slot)?;
    debug!(from = %page.id, to = %target.id, "building destination view");
    Ok(view_page(graph, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::StoryDefinition;
    use crate::domain::page::Choice;

    fn cave_graph() -> StoryGraph {
        StoryGraph::build(StoryDefinition {
            root: PageId::new("entrance"),
            pages: vec![
                Page::new("entrance", "A dark cave.")
                    .with_artwork("cave")
                    .with_first_choice(Choice::new("Go deeper", "depths")),
                Page::new("depths", "It is very dark."),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_view_root_lists_choices_and_artwork() {
        // Arrange
        let graph = cave_graph();

        // Act
        let view = view_root(&graph);

        // Assert
        assert_eq!(view.page_id.as_str(), "entrance");
        assert_eq!(view.artwork.as_deref(), Some("cave"));
        assert!(!view.terminal);
        assert_eq!(
            view.choices,
            vec![ChoiceView {
                slot: Slot::First,
                title: "Go deeper".to_owned(),
                target: PageId::new("depths"),
            }]
        );
    }

    #[test]
    fn test_view_follow_returns_destination_view() {
        let graph = cave_graph();

        let view = view_follow(&graph, graph.root(), Slot::First).unwrap();

        assert_eq!(view.page_id.as_str(), "depths");
        assert!(view.terminal);
        assert!(view.choices.is_empty());
    }

    #[test]
    fn test_view_follow_rejects_empty_slot() {
        // Arrange
        let graph = cave_graph();

        // Act
        let result = view_follow(&graph, graph.root(), Slot::Second);

        // Assert
        match result.unwrap_err() {
            StoryError::InvalidChoice { page, slot } => {
                assert_eq!(page.as_str(), "entrance");
                assert_eq!(slot, Slot::Second);
            }
            other => panic!("expected InvalidChoice, got {other:?}"),
        }
    }

    #[test]
    fn test_view_restart_matches_root() {
        let graph = cave_graph();

        assert_eq!(view_restart(&graph), view_root(&graph));
    }

    #[test]
    fn test_page_view_serializes_slots_lowercase() {
        let graph = cave_graph();

        let json = serde_json::to_value(view_root(&graph)).unwrap();

        assert_eq!(json["page_id"], "entrance");
        assert_eq!(json["choices"][0]["slot"], "first");
        assert_eq!(json["choices"][0]["target"], "depths");
    }
}

//! The story graph: an immutable arena of pages addressed by [`PageId`].
//!
//! A graph is built once from a [`StoryDefinition`] and never mutated. Every
//! edge is checked during [`StoryGraph::build`], so traversal can only fail
//! when the caller asks for a slot the page does not offer. Traversal is
//! always a single hop from a caller-supplied page, which keeps cycles in the
//! story harmless.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{GraphDefect, StoryError};
use super::page::{Choice, Page, PageId, Slot};

/// Static input for building a [`StoryGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryDefinition {
    /// Identifier of the entry page.
    pub root: PageId,
    /// Every page of the story, in authoring order.
    pub pages: Vec<Page>,
}

/// Immutable graph of story pages.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    pages: Vec<Page>,
    index: HashMap<PageId, usize>,
    root: usize,
}

impl StoryGraph {
    /// Validates `definition` and builds the graph.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::MalformedGraph` if the definition is empty, holds
    /// duplicate page ids, names an undefined root, or contains a choice whose
    /// target is not defined.
    pub fn build(definition: StoryDefinition) -> Result<Self, StoryError> {
        let StoryDefinition { root, pages } = definition;

        if pages.is_empty() {
            return Err(GraphDefect::Empty.into());
        }

        let mut index = HashMap::with_capacity(pages.len());
        for (position, page) in pages.iter().enumerate() {
            if index.insert(page.id.clone(), position).is_some() {
                return Err(GraphDefect::DuplicatePage(page.id.clone()).into());
            }
        }

        let root = index
            .get(&root)
            .copied()
            .ok_or_else(|| GraphDefect::MissingRoot(root.clone()))?;

        for page in &pages {
            for (slot, choice) in page.choices() {
                if !index.contains_key(&choice.target) {
                    return Err(GraphDefect::DanglingTarget {
                        page: page.id.clone(),
                        slot,
                        target: choice.target.clone(),
                    }
                    .into());
                }
            }
        }

        let graph = Self { pages, index, root };

        let (order, visited) = graph.walk_from_root();
        let reachable = order.len();
        if reachable < graph.len() {
            let unreachable: Vec<&str> = graph
                .pages
                .iter()
                .zip(&visited)
                .filter(|(_, seen)| !**seen)
                .map(|(page, _)| page.id.as_str())
                .collect();
            warn!(?unreachable, "story pages are not reachable from the root");
        }

        info!(
            root = %graph.root().id,
            pages = graph.len(),
            reachable,
            "story graph built"
        );

        Ok(graph)
    }

    /// Returns the entry page.
    #[must_use]
    pub fn root(&self) -> &Page {
        &self.pages[self.root]
    }

    /// Returns the entry page for a "play again" action.
    #[must_use]
    pub fn restart(&self) -> &Page {
        debug!(root = %self.pages[self.root].id, "restarting story");
        self.root()
    }

    /// Returns `true` if `page` offers no choices.
    #[must_use]
    pub fn is_terminal(&self, page: &Page) -> bool {
        page.is_terminal()
    }

    /// Present choices of `page`, first slot before second.
    #[must_use]
    pub fn choices<'p>(&self, page: &'p Page) -> Vec<(Slot, &'p Choice)> {
        page.choices().collect()
    }

    /// Takes the choice in `slot` and returns the page it leads to.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::InvalidChoice` if `page` has no choice in `slot`,
    /// or if `page` does not belong to this graph and its target is unknown.
    pub fn follow(&self, page: &Page, slot: Slot) -> Result<&Page, StoryError> {
        let invalid = || StoryError::InvalidChoice {
            page: page.id.clone(),
            slot,
        };

        let choice = page.choice(slot).ok_or_else(invalid)?;
        let target = self.page(&choice.target).ok_or_else(invalid)?;

        debug!(from = %page.id, %slot, to = %target.id, "following choice");
        Ok(target)
    }

    /// Looks up a page by identifier.
    #[must_use]
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.index.get(id).map(|&position| &self.pages[position])
    }

    /// All pages, in definition order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Number of pages in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`: a built graph holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages reachable from the root, in breadth-first order.
    ///
    /// Each page is visited once, so cycles terminate.
    #[must_use]
    pub fn reachable_pages(&self) -> Vec<&Page> {
        let (order, _) = self.walk_from_root();
        order.into_iter().map(|position| &self.pages[position]).collect()
    }

    fn walk_from_root(&self) -> (Vec<usize>, Vec<bool>) {
        let mut visited = vec![false; self.pages.len()];
        let mut queue = VecDeque::from([self.root]);
        let mut order = Vec::new();
        visited[self.root] = true;

        while let Some(position) = queue.pop_front() {
            order.push(position);
            for (_, choice) in self.pages[position].choices() {
                // Targets were checked in `build`.
                if let Some(&next) = self.index.get(&choice.target) {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        (order, visited)
    }
}

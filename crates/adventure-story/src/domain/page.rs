//! Pages, choices and choice slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a page within a story graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Creates a page identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Fixed position of a choice on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// The first (upper) choice.
    First,
    /// The second (lower) choice.
    Second,
}

impl Slot {
    /// Both slots, in presentation order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => f.write_str("first"),
            Slot::Second => f.write_str("second"),
        }
    }
}

/// A labeled edge to another page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Choice {
    /// Label shown to the reader.
    pub title: String,
    /// The page reached by taking this choice.
    pub target: PageId,
}

impl Choice {
    /// Creates a choice leading to `target`.
    #[must_use]
    pub fn new(title: impl Into<String>, target: impl Into<PageId>) -> Self {
        Self {
            title: title.into(),
            target: target.into(),
        }
    }
}

/// A single narrative node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    /// Stable page identity.
    pub id: PageId,
    /// Body copy shown to the reader.
    pub text: String,
    /// Opaque reference to an illustration asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
    /// Choice in the first slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_choice: Option<Choice>,
    /// Choice in the second slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_choice: Option<Choice>,
}

impl Page {
    /// Creates a terminal page with no artwork and no choices.
    #[must_use]
    pub fn new(id: impl Into<PageId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            artwork: None,
            first_choice: None,
            second_choice: None,
        }
    }

    /// Sets the artwork reference.
    #[must_use]
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    /// Sets the first choice.
    #[must_use]
    pub fn with_first_choice(mut self, choice: Choice) -> Self {
        self.first_choice = Some(choice);
        self
    }

    /// Sets the second choice.
    #[must_use]
    pub fn with_second_choice(mut self, choice: Choice) -> Self {
        self.second_choice = Some(choice);
        self
    }

    /// Returns the choice stored in `slot`, if any.
    #[must_use]
    pub fn choice(&self, slot: Slot) -> Option<&Choice> {
        match slot {
            Slot::First => self.first_choice.as_ref(),
            Slot::Second => self.second_choice.as_ref(),
        }
    }

    /// Returns `true` if the page offers no choices (an ending).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.first_choice.is_none() && self.second_choice.is_none()
    }

    /// Present choices in slot order, skipping empty slots.
    pub fn choices(&self) -> impl Iterator<Item = (Slot, &Choice)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.choice(slot).map(|choice| (slot, choice)))
    }
}

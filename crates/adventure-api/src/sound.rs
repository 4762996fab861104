//! Sound cues played when the reader lands on a page.

use std::collections::HashMap;

use adventure_story::PageId;
use serde::{Deserialize, Serialize};

/// The closed set of transition sound effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Played on an ordinary page turn.
    #[default]
    PageTurn,
    /// Played on reaching a good ending.
    HappyEnding,
    /// Played on reaching a bad ending.
    Ominous,
}

impl SoundEffect {
    /// The audio asset name, without extension.
    #[must_use]
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::PageTurn => "PageTurn",
            SoundEffect::HappyEnding => "HappyEnding",
            SoundEffect::Ominous => "Ominous",
        }
    }

    /// The audio asset file name.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::PageTurn => "PageTurn.wav",
            SoundEffect::HappyEnding => "HappyEnding.wav",
            SoundEffect::Ominous => "Ominous.wav",
        }
    }
}

/// Maps destination pages to sound effects.
///
/// Pages without an entry get [`SoundEffect::PageTurn`].
#[derive(Debug, Clone, Default)]
pub struct SoundCues {
    by_page: HashMap<PageId, SoundEffect>,
}

impl SoundCues {
    /// Creates a cue map.
    #[must_use]
    pub fn new(by_page: HashMap<PageId, SoundEffect>) -> Self {
        Self { by_page }
    }

    /// The effect to play when the reader arrives at `destination`.
    #[must_use]
    pub fn cue_for(&self, destination: &PageId) -> SoundEffect {
        self.by_page.get(destination).copied().unwrap_or_default()
    }

    /// Number of explicitly mapped pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_page.len()
    }

    /// Returns `true` if no page is explicitly mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_page.is_empty()
    }
}

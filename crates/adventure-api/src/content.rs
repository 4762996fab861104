//! Story loading.
//!
//! A story file is YAML holding the graph definition (`root`, `pages`) and an
//! optional `sound_cues` map from page id to [`SoundEffect`]. Loading parses
//! the file, hashes its source, and builds the graph. Any failure aborts
//! startup.

use std::collections::HashMap;
use std::path::Path;

use adventure_story::{Page, PageId, StoryDefinition, StoryGraph};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::AppError;
use crate::sound::{SoundCues, SoundEffect};

/// The story served when no `STORY_PATH` is configured.
pub const BUILTIN_STORY: &str = include_str!("../stories/return_trip.yaml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryFile {
    root: PageId,
    pages: Vec<Page>,
    #[serde(default)]
    sound_cues: HashMap<PageId, SoundEffect>,
}

/// A built story graph with its host-side metadata.
#[derive(Debug)]
pub struct LoadedStory {
    /// The validated graph.
    pub graph: StoryGraph,
    /// Sound cues keyed by destination page.
    pub cues: SoundCues,
    /// SHA-256 of the story source, hex encoded.
    pub version_hash: String,
}

impl LoadedStory {
    /// Bundles an already built graph.
    #[must_use]
    pub fn new(graph: StoryGraph, cues: SoundCues, version_hash: impl Into<String>) -> Self {
        Self {
            graph,
            cues,
            version_hash: version_hash.into(),
        }
    }
}

/// Parses and builds a story from YAML source.
///
/// # Errors
///
/// Returns `AppError::StoryFormat` if the YAML does not describe a story, and
/// `AppError::Story` if the definition is not a valid graph.
pub fn load_story(source: &str) -> Result<LoadedStory, AppError> {
    let file: StoryFile = serde_yaml::from_str(source)?;
    let version_hash = format!("{:x}", Sha256::digest(source.as_bytes()));

    let graph = StoryGraph::build(StoryDefinition {
        root: file.root,
        pages: file.pages,
    })?;

    let cues = file
        .sound_cues
        .into_iter()
        .filter(|(page_id, _)| {
            let known = graph.page(page_id).is_some();
            if !known {
                warn!(%page_id, "ignoring sound cue for undefined page");
            }
            known
        })
        .collect();

    info!(%version_hash, pages = graph.len(), "story loaded");

    Ok(LoadedStory::new(graph, SoundCues::new(cues), version_hash))
}

/// Reads and builds the story at `path`.
///
/// # Errors
///
/// Returns `AppError::StoryFile` if the file cannot be read, otherwise the
/// errors of [`load_story`].
pub fn load_story_from_path(path: &Path) -> Result<LoadedStory, AppError> {
    info!(path = %path.display(), "loading story file");
    let source = std::fs::read_to_string(path).map_err(|source| AppError::StoryFile {
        path: path.to_path_buf(),
        source,
    })?;
    load_story(&source)
}

/// Builds the embedded story.
///
/// # Errors
///
/// Returns the errors of [`load_story`].
pub fn load_builtin_story() -> Result<LoadedStory, AppError> {
    load_story(BUILTIN_STORY)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use adventure_story::{GraphDefect, Slot, StoryError};

    use super::*;

    #[test]
    fn test_builtin_story_builds_with_every_page_reachable() {
        // Act
        let story = load_builtin_story().unwrap();

        // Assert
        assert_eq!(story.graph.root().id.as_str(), "return_trip");
        assert_eq!(story.graph.reachable_pages().len(), story.graph.len());
        assert_eq!(story.version_hash.len(), 64);
    }

    #[test]
    fn test_builtin_story_endings_have_cues() {
        let story = load_builtin_story().unwrap();

        assert_eq!(
            story.cues.cue_for(&PageId::new("droid")),
            SoundEffect::HappyEnding
        );
        assert_eq!(
            story.cues.cue_for(&PageId::new("home")),
            SoundEffect::HappyEnding
        );
        assert_eq!(
            story.cues.cue_for(&PageId::new("monster")),
            SoundEffect::Ominous
        );
        assert_eq!(
            story.cues.cue_for(&PageId::new("cave")),
            SoundEffect::PageTurn
        );
    }

    #[test]
    fn test_builtin_story_only_endings_are_terminal() {
        let story = load_builtin_story().unwrap();

        let mut endings: Vec<&str> = story
            .graph
            .pages()
            .filter(|page| story.graph.is_terminal(page))
            .map(|page| page.id.as_str())
            .collect();
        endings.sort_unstable();

        assert_eq!(endings, vec!["droid", "home", "monster"]);
    }

    #[test]
    fn test_dangling_target_is_story_error() {
        // Arrange
        let source = "
root: start
pages:
  - id: start
    text: A door.
    first_choice:
      title: Open it
      target: beyond
";

        // Act
        let result = load_story(source);

        // Assert
        match result.unwrap_err() {
            AppError::Story(StoryError::MalformedGraph(GraphDefect::DanglingTarget {
                slot,
                target,
                ..
            })) => {
                assert_eq!(slot, Slot::First);
                assert_eq!(target.as_str(), "beyond");
            }
            other => panic!("expected DanglingTarget, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_yaml_is_format_error() {
        let result = load_story("root: [unclosed");

        assert!(matches!(result, Err(AppError::StoryFormat(_))));
    }

    #[test]
    fn test_missing_pages_field_is_format_error() {
        let result = load_story("root: start\n");

        assert!(matches!(result, Err(AppError::StoryFormat(_))));
    }

    #[test]
    fn test_misspelled_choice_key_is_format_error() {
        // Arrange
        let source = "
root: start
pages:
  - id: start
    text: A fork.
    first_choice:
      title: Left
      target: end
    second_choise:
      title: Right
      target: end
  - id: end
    text: Done.
";

        // Act
        let result = load_story(source);

        // Assert
        match result.unwrap_err() {
            AppError::StoryFormat(err) => assert!(err.to_string().contains("second_choise")),
            other => panic!("expected StoryFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_misspelled_top_level_key_is_format_error() {
        let source = "
root: start
pages:
  - id: start
    text: Nothing happens.
sound_cue:
  start: ominous
";

        let result = load_story(source);

        assert!(matches!(result, Err(AppError::StoryFormat(_))));
    }

    #[test]
    fn test_unknown_cue_pages_are_dropped() {
        let source = "
root: start
pages:
  - id: start
    text: Nothing happens.
sound_cues:
  start: ominous
  elsewhere: happy_ending
";

        let story = load_story(source).unwrap();

        assert_eq!(story.cues.len(), 1);
        assert_eq!(
            story.cues.cue_for(&PageId::new("start")),
            SoundEffect::Ominous
        );
    }

    #[test]
    fn test_version_hash_tracks_source() {
        let a = load_story("root: a\npages:\n  - id: a\n    text: One.\n").unwrap();
        let b = load_story("root: a\npages:\n  - id: a\n    text: Two.\n").unwrap();

        assert_ne!(a.version_hash, b.version_hash);
    }

    #[test]
    fn test_load_story_from_path_reads_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_STORY.as_bytes()).unwrap();

        // Act
        let story = load_story_from_path(file.path()).unwrap();

        // Assert
        assert_eq!(
            story.version_hash,
            load_builtin_story().unwrap().version_hash
        );
    }

    #[test]
    fn test_load_story_from_missing_path_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        match load_story_from_path(&path).unwrap_err() {
            AppError::StoryFile { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected StoryFile, got {other:?}"),
        }
    }
}

//! Fixture story definitions.

use adventure_story::{Choice, Page, PageId, StoryDefinition};

/// Root page id of [`branching_story`] and [`cyclic_story`].
pub const ROOT: &str = "root";
/// Middle page id of [`branching_story`].
pub const RIGHT_PAGE: &str = "right_page";
/// Ending page id of [`branching_story`].
pub const LEFT_ENDING: &str = "left_ending";

/// Three pages: `root` offers "go left" to `left_ending` and "go right" to
/// `right_page`; `right_page` offers a single "continue" to `left_ending`,
/// which is terminal.
#[must_use]
pub fn branching_story() -> StoryDefinition {
    StoryDefinition {
        root: PageId::new(ROOT),
        pages: vec![
            Page::new(ROOT, "Two paths split before you.")
                .with_artwork("crossroads")
                .with_first_choice(Choice::new("go left", LEFT_ENDING))
                .with_second_choice(Choice::new("go right", RIGHT_PAGE)),
            Page::new(RIGHT_PAGE, "The right path bends back toward the left.")
                .with_first_choice(Choice::new("continue", LEFT_ENDING)),
            Page::new(LEFT_ENDING, "The path ends at a quiet lake."),
        ],
    }
}

/// A story whose choices point back at the root and at the page itself.
#[must_use]
pub fn cyclic_story() -> StoryDefinition {
    StoryDefinition {
        root: PageId::new(ROOT),
        pages: vec![
            Page::new(ROOT, "The hallway looks familiar.")
                .with_first_choice(Choice::new("open the door", "loop"))
                .with_second_choice(Choice::new("stay put", ROOT)),
            Page::new("loop", "Behind the door is the same hallway.")
                .with_first_choice(Choice::new("walk back", ROOT))
                .with_second_choice(Choice::new("open it again", "loop")),
        ],
    }
}

/// A story with a choice pointing at a page that is never defined.
#[must_use]
pub fn dangling_story() -> StoryDefinition {
    StoryDefinition {
        root: PageId::new(ROOT),
        pages: vec![
            Page::new(ROOT, "A bridge stretches into the fog.")
                .with_first_choice(Choice::new("cross", "far_shore")),
        ],
    }
}

//! Shared story fixtures and log capture for the adventure workspace tests.

mod logs;
mod stories;

pub use logs::{CaptureWriter, LogCapture};
pub use stories::{
    LEFT_ENDING, RIGHT_PAGE, ROOT, branching_story, cyclic_story, dangling_story,
};

use serde::{Serialize, Deserialize};

mod controls;
mod keyboard;
mod path;
mod subscriber;

pub use controls::{NavigateControls, use_navigate_controls};
pub use keyboard::{KeyboardGate, NavKey};
pub use path::{parse_slide_index, slide_index_or_default, slide_path};
pub use subscriber::ControlsSubscriber;

/// Direction of a single step through the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the last slide
    Forward,
    /// Towards the first slide
    Backward,
}

/// Result of a step request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A navigation to this index was issued to the router
    Navigated(usize),
    /// The target equals the current index, nothing was issued
    AtBoundary,
}

impl StepOutcome {
    pub fn navigated(&self) -> bool {
        matches!(self, StepOutcome::Navigated(_))
    }
}

/// Snapshot passed to subscribers and UI on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsSnapshot {
    pub index: usize,
    pub len: usize,
    pub paused: bool,
    pub has_next: bool,
    pub has_prev: bool,
}

//! Controls subscriber trait

use super::ControlsSnapshot;

/// Trait for components that need to respond to slide or pause changes
pub trait ControlsSubscriber: Send + Sync {
    /// Called when the current index or the pause flag changes
    fn on_controls_change(&self, snapshot: &ControlsSnapshot);
}

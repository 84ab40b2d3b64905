//! Keyboard gate: turns raw key signals into gated steps

use super::{NavigateControls, StepOutcome};
use crate::config::KeyBindings;
use ahash::AHashMap;
use serde::{Serialize, Deserialize};

/// Keys that can be bound to navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    Space,
    Enter,
    Backspace,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

impl NavKey {
    pub const ALL: [NavKey; 9] = [
        NavKey::Space,
        NavKey::Enter,
        NavKey::Backspace,
        NavKey::ArrowLeft,
        NavKey::ArrowRight,
        NavKey::ArrowUp,
        NavKey::ArrowDown,
        NavKey::PageUp,
        NavKey::PageDown,
    ];
}

/// Filters key signals through the bindings and the pause flag.
///
/// A step fires on the rising edge of `pressed && !paused` for a bound
/// key. Holding a key down steps once; resuming while a key is held counts
/// as a new edge and steps once more.
#[derive(Debug, Clone)]
pub struct KeyboardGate {
    bindings: KeyBindings,
    armed: AHashMap<NavKey, bool>,
}

impl KeyboardGate {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            armed: AHashMap::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Every key that triggers a step, advance keys first
    pub fn bound_keys(&self) -> impl Iterator<Item = NavKey> + '_ {
        self.bindings.advance.iter().chain(self.bindings.retreat.iter()).copied()
    }

    /// Feed the current state of a key. Returns the step outcome when the
    /// signal produced a step, `None` otherwise.
    pub fn on_key_state(
        &mut self,
        controls: &NavigateControls,
        key: NavKey,
        pressed: bool,
    ) -> Option<StepOutcome> {
        let paused = controls.paused();
        let active = pressed && !paused;
        let was_active = self.armed.insert(key, active).unwrap_or(false);

        if pressed && paused {
            tracing::trace!("Ignoring {:?} while navigation is paused", key);
        }
        if !active || was_active {
            return None;
        }

        let direction = self.bindings.direction_of(key)?;
        tracing::trace!("{:?} pressed, stepping {:?}", key, direction);
        Some(controls.step(direction))
    }

    /// Feed a discrete key press from a source without release events
    pub fn on_key_down(&mut self, controls: &NavigateControls, key: NavKey) -> Option<StepOutcome> {
        self.armed.insert(key, false);
        self.on_key_state(controls, key, true)
    }

    /// Forget held keys, e.g. after the window lost focus
    pub fn release_all(&mut self) {
        self.armed.clear();
    }
}

impl Default for KeyboardGate {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::controls::tests::RecordingRouter;

    #[test]
    fn test_advance_fires_once_per_edge() {
        let router = RecordingRouter::new(5, "/0", true);
        let controls = NavigateControls::new(router.clone());
        let mut gate = KeyboardGate::default();

        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), Some(StepOutcome::Navigated(1)));
        // Held across frames
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, false), None);
        assert_eq!(gate.on_key_state(&controls, NavKey::ArrowRight, true), Some(StepOutcome::Navigated(2)));

        assert_eq!(router.pushed(), vec!["/1", "/2"]);
    }

    #[test]
    fn test_paused_gate_issues_nothing() {
        let router = RecordingRouter::new(5, "/2", true);
        let controls = NavigateControls::new(router.clone());
        let mut gate = KeyboardGate::default();
        controls.set_paused(true);

        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);
        assert_eq!(gate.on_key_state(&controls, NavKey::ArrowLeft, true), None);
        assert!(router.pushed().is_empty());

        assert_eq!(gate.on_key_state(&controls, NavKey::Space, false), None);
        assert!(router.pushed().is_empty());
    }

    #[test]
    fn test_resume_while_held_steps_once() {
        let router = RecordingRouter::new(5, "/0", true);
        let controls = NavigateControls::new(router.clone());
        let mut gate = KeyboardGate::default();
        controls.set_paused(true);

        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);
        controls.set_paused(false);
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), Some(StepOutcome::Navigated(1)));
        // Still held, no repeat
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);

        // Pausing and resuming again while held is another edge
        controls.set_paused(true);
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);
        controls.set_paused(false);
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), Some(StepOutcome::Navigated(2)));

        assert_eq!(router.pushed(), vec!["/1", "/2"]);
    }

    #[test]
    fn test_retreat_and_unbound_keys() {
        let router = RecordingRouter::new(3, "/1", true);
        let controls = NavigateControls::new(router.clone());
        let mut gate = KeyboardGate::default();

        assert_eq!(gate.on_key_state(&controls, NavKey::PageDown, true), None);
        assert_eq!(gate.on_key_state(&controls, NavKey::ArrowLeft, true), Some(StepOutcome::Navigated(0)));
        assert_eq!(gate.on_key_down(&controls, NavKey::ArrowLeft), Some(StepOutcome::AtBoundary));
        assert_eq!(router.pushed(), vec!["/0"]);
    }

    #[test]
    fn test_key_down_and_release_all() {
        let router = RecordingRouter::new(4, "/0", true);
        let controls = NavigateControls::new(router.clone());
        let mut gate = KeyboardGate::default();

        assert!(gate.on_key_down(&controls, NavKey::Space).is_some());
        assert!(gate.on_key_down(&controls, NavKey::Space).is_some());
        assert_eq!(controls.index(), 2);

        assert!(gate.on_key_state(&controls, NavKey::ArrowRight, true).is_some());
        gate.release_all();
        assert!(gate.on_key_state(&controls, NavKey::ArrowRight, true).is_some());
        assert_eq!(controls.index(), 3);
    }

    #[test]
    fn test_custom_bindings() {
        let router = RecordingRouter::new(4, "/1", true);
        let controls = NavigateControls::new(router.clone());
        let bindings = KeyBindings {
            advance: vec![NavKey::PageDown],
            retreat: vec![NavKey::PageUp],
        };
        let mut gate = KeyboardGate::new(bindings);

        assert_eq!(gate.bound_keys().collect::<Vec<_>>(), vec![NavKey::PageDown, NavKey::PageUp]);
        assert_eq!(gate.on_key_state(&controls, NavKey::Space, true), None);
        assert_eq!(gate.on_key_state(&controls, NavKey::PageDown, true), Some(StepOutcome::Navigated(2)));
    }
}

//! Keyboard sampling for egui
//!
//! Reads the bound keys once per frame and feeds them to the
//! [`KeyboardGate`], which does the edge detection and pause gating.

use deck_core::{KeyBindings, KeyboardGate, NavKey, NavigateControls, StepOutcome};

/// Map a navigation key to the egui key that produces it
pub fn to_egui_key(key: NavKey) -> egui::Key {
    match key {
        NavKey::Space => egui::Key::Space,
        NavKey::Enter => egui::Key::Enter,
        NavKey::Backspace => egui::Key::Backspace,
        NavKey::ArrowLeft => egui::Key::ArrowLeft,
        NavKey::ArrowRight => egui::Key::ArrowRight,
        NavKey::ArrowUp => egui::Key::ArrowUp,
        NavKey::ArrowDown => egui::Key::ArrowDown,
        NavKey::PageUp => egui::Key::PageUp,
        NavKey::PageDown => egui::Key::PageDown,
    }
}

/// Map an egui key back to a navigation key, if it can be bound
pub fn from_egui_key(key: egui::Key) -> Option<NavKey> {
    NavKey::ALL.iter().copied().find(|nav| to_egui_key(*nav) == key)
}

/// One frame's view of a bound key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySample {
    pub key: NavKey,

    /// Held at the end of the frame
    pub down: bool,

    /// A press event arrived this frame (including repeats)
    pub pressed: bool,

    /// A release event arrived this frame
    pub released: bool,
}

/// Sample the bound keys and consume their press events, so a focused
/// button does not also turn them into a click.
pub fn sample_keys(input: &mut egui::InputState, keys: &[NavKey]) -> Vec<KeySample> {
    keys.iter()
        .map(|key| {
            let egui_key = to_egui_key(*key);
            KeySample {
                key: *key,
                down: input.key_down(egui_key),
                released: input.key_released(egui_key),
                pressed: input.consume_key(egui::Modifiers::NONE, egui_key),
            }
        })
        .collect()
}

/// Per-frame keyboard adapter
pub struct KeyboardInput {
    gate: KeyboardGate,
}

impl KeyboardInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            gate: KeyboardGate::new(bindings),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        self.gate.bindings()
    }

    /// Sample the bound keys and step the controls on rising edges.
    ///
    /// Keys are left alone while a text field owns the keyboard, and held
    /// state is dropped when the window loses focus so that a key released
    /// elsewhere does not swallow the next press.
    pub fn process(&mut self, ctx: &egui::Context, controls: &NavigateControls) -> Vec<StepOutcome> {
        if ctx.wants_keyboard_input() {
            self.gate.release_all();
            return Vec::new();
        }

        let keys: Vec<NavKey> = self.gate.bound_keys().collect();

        // Sample first: stepping may call back into anything that
        // touches the egui context
        let (focused, samples) = ctx.input_mut(|i| (i.focused, sample_keys(i, &keys)));
        if !focused {
            self.gate.release_all();
            return Vec::new();
        }

        self.apply_samples(controls, &samples)
    }

    /// Feed one frame of samples to the gate.
    ///
    /// Presses and releases that both land in one frame are replayed in
    /// order, so a quick tap still steps and a release followed by a new
    /// press is still an edge.
    pub fn apply_samples(&mut self, controls: &NavigateControls, samples: &[KeySample]) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();

        for sample in samples {
            let signals: &[bool] = match (sample.down, sample.pressed, sample.released) {
                (true, true, true) => &[false, true],
                (false, true, _) => &[true, false],
                (true, _, _) => &[true],
                (false, _, _) => &[false],
            };

            for pressed in signals {
                if let Some(outcome) = self.gate.on_key_state(controls, sample.key, *pressed) {
                    outcomes.push(outcome);
                }
            }
        }

        outcomes
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::HistoryRouter;
    use std::sync::Arc;

    #[test]
    fn test_every_nav_key_maps_to_egui() {
        for key in NavKey::ALL {
            assert_eq!(from_egui_key(to_egui_key(key)), Some(key));
        }
    }

    #[test]
    fn test_unbindable_key() {
        assert_eq!(from_egui_key(egui::Key::Escape), None);
        assert_eq!(from_egui_key(egui::Key::A), None);
    }

    fn sample(key: NavKey, down: bool, pressed: bool, released: bool) -> KeySample {
        KeySample { key, down, pressed, released }
    }

    fn key_event(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn deck_controls(slides: usize) -> (Arc<HistoryRouter>, Arc<NavigateControls>) {
        let router = Arc::new(HistoryRouter::new(HistoryRouter::slide_routes(slides), "/0"));
        let controls = NavigateControls::new(router.clone());
        (router, controls)
    }

    #[test]
    fn test_tap_within_one_frame_steps() {
        let (_router, controls) = deck_controls(4);
        let mut input = KeyboardInput::default();

        let outcomes = input.apply_samples(&controls, &[sample(NavKey::Space, false, true, true)]);
        assert_eq!(outcomes, vec![StepOutcome::Navigated(1)]);

        // The next tap is a fresh edge
        let outcomes = input.apply_samples(&controls, &[sample(NavKey::Space, false, true, true)]);
        assert_eq!(outcomes, vec![StepOutcome::Navigated(2)]);
        assert_eq!(controls.index(), 2);
    }

    #[test]
    fn test_held_key_and_repeats_step_once() {
        let (_router, controls) = deck_controls(4);
        let mut input = KeyboardInput::default();

        input.apply_samples(&controls, &[sample(NavKey::ArrowRight, true, true, false)]);
        // Auto-repeat press events while held
        let outcomes = input.apply_samples(&controls, &[sample(NavKey::ArrowRight, true, true, false)]);
        assert!(outcomes.is_empty());
        let outcomes = input.apply_samples(&controls, &[sample(NavKey::ArrowRight, true, false, false)]);
        assert!(outcomes.is_empty());

        // Released and pressed again inside one frame
        let outcomes = input.apply_samples(&controls, &[sample(NavKey::ArrowRight, true, true, true)]);
        assert_eq!(outcomes, vec![StepOutcome::Navigated(2)]);
    }

    #[test]
    fn test_tap_while_paused_is_ignored() {
        let (router, controls) = deck_controls(4);
        let mut input = KeyboardInput::default();
        controls.set_paused(true);

        let outcomes = input.apply_samples(&controls, &[sample(NavKey::Space, false, true, true)]);
        assert!(outcomes.is_empty());
        assert_eq!(router.history(), vec!["/0".to_string()]);
    }

    #[test]
    fn test_sample_keys_reads_tap_and_consumes_press() {
        let mut state = egui::InputState::default();
        state.events.push(key_event(egui::Key::Space, true));
        state.events.push(key_event(egui::Key::Space, false));

        let samples = sample_keys(&mut state, &[NavKey::Space, NavKey::ArrowLeft]);
        assert_eq!(samples[0], sample(NavKey::Space, false, true, true));
        assert_eq!(samples[1], sample(NavKey::ArrowLeft, false, false, false));

        // A focused button no longer sees the press
        assert!(!state.key_pressed(egui::Key::Space));
    }

    #[test]
    fn test_sample_keys_leaves_unbound_keys() {
        let mut state = egui::InputState::default();
        state.events.push(key_event(egui::Key::Enter, true));

        sample_keys(&mut state, &[NavKey::Space]);
        assert!(state.key_pressed(egui::Key::Enter));
    }

    #[test]
    fn test_default_bindings() {
        let input = KeyboardInput::default();
        assert_eq!(input.bindings(), &KeyBindings::default());
    }
}

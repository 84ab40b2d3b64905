//! User interface components for slide decks
//!
//! This crate provides the egui-based pieces that sit around the
//! navigation controls: keyboard sampling, the navigation bar and the
//! slide view.

pub mod keyboard;
pub mod navigation_bar;
pub mod slide_view;

/// Re-export commonly used types
pub use keyboard::{KeySample, KeyboardInput, sample_keys, to_egui_key, from_egui_key};
pub use navigation_bar::{NavigationBar, NavigationBarConfig, position_label};
pub use slide_view::{Deck, Slide, SlideView};

// Common icon definitions
pub mod icons {
    pub const PREV: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const PAUSE: &str = "⏸";
    pub const RESUME: &str = "⌨";
    pub const BACK: &str = "↩";
    pub const FORWARD: &str = "↪";
}

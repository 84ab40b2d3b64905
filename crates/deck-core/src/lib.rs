//! Core functionality for slide deck navigation
//!
//! This crate provides the navigation controls that keep a slide cursor in
//! sync with a router, the keyboard gate, and the scoped context used to
//! hand the controls down to UI components.

pub mod config;
pub mod context;
pub mod navigation;
pub mod router;

// Re-export commonly used types
pub use config::{ConfigError, ControlsConfig, KeyBindings};
pub use context::AppContext;
pub use navigation::{
    Direction, KeyboardGate, NavKey, NavigateControls, ControlsSnapshot,
    ControlsSubscriber, StepOutcome, use_navigate_controls,
};
pub use router::{HistoryRouter, RouteListener, RouteRecord, Router};

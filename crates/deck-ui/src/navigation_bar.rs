//! Navigation bar with previous/next buttons and the pause toggle

use egui::{Color32, RichText, Vec2};
use deck_core::{ControlsSnapshot, NavigateControls, StepOutcome};
use std::sync::Arc;

use crate::icons;

/// Navigation bar configuration
#[derive(Debug, Clone)]
pub struct NavigationBarConfig {
    /// Size of the step buttons
    pub button_size: Vec2,

    /// Show the keyboard pause toggle
    pub show_pause_toggle: bool,

    /// Show the "Slide i of N" label
    pub show_position: bool,

    /// Fill of enabled step buttons
    pub button_fill: Color32,

    /// Fill of the pause toggle while paused
    pub paused_fill: Color32,
}

impl Default for NavigationBarConfig {
    fn default() -> Self {
        Self {
            button_size: Vec2::new(28.0, 28.0),
            show_pause_toggle: true,
            show_position: true,
            button_fill: Color32::from_gray(40),
            paused_fill: Color32::from_rgb(220, 80, 80),
        }
    }
}

/// Text shown for the current position
pub fn position_label(snapshot: &ControlsSnapshot) -> String {
    if snapshot.len == 0 {
        "No slides".to_string()
    } else {
        format!("Slide {} of {}", snapshot.index + 1, snapshot.len)
    }
}

/// Navigation bar widget
pub struct NavigationBar {
    controls: Arc<NavigateControls>,
    config: NavigationBarConfig,
}

impl NavigationBar {
    pub fn new(controls: Arc<NavigateControls>) -> Self {
        Self {
            controls,
            config: NavigationBarConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the bar. Returns the outcome of a button-driven step, if any.
    ///
    /// Buttons call `prev`/`next` directly, so they keep working while
    /// keyboard navigation is paused. Buttons give up keyboard focus after
    /// a click so Space and Enter keep going through the keyboard gate.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<StepOutcome> {
        let snapshot = self.controls.snapshot();
        let mut outcome = None;

        ui.horizontal(|ui| {
            ui.style_mut().spacing.button_padding = Vec2::new(6.0, 4.0);

            let prev = ui.add_enabled_ui(snapshot.has_prev, |ui| {
                ui.add_sized(
                    self.config.button_size,
                    egui::Button::new(RichText::new(icons::PREV).size(14.0))
                        .fill(self.config.button_fill),
                )
            });
            let prev = prev.inner.on_hover_text("Previous slide (Left Arrow)");
            if prev.clicked() {
                prev.surrender_focus();
                outcome = Some(self.controls.prev());
            }

            let next = ui.add_enabled_ui(snapshot.has_next, |ui| {
                ui.add_sized(
                    self.config.button_size,
                    egui::Button::new(RichText::new(icons::NEXT).size(14.0))
                        .fill(self.config.button_fill),
                )
            });
            let next = next.inner.on_hover_text("Next slide (Space / Right Arrow)");
            if next.clicked() {
                next.surrender_focus();
                outcome = Some(self.controls.next());
            }

            if self.config.show_pause_toggle {
                ui.separator();

                let (icon, hover_text, fill) = if snapshot.paused {
                    (icons::RESUME, "Resume keyboard navigation", self.config.paused_fill)
                } else {
                    (icons::PAUSE, "Pause keyboard navigation", self.config.button_fill)
                };
                let toggle = ui.add_sized(
                    self.config.button_size,
                    egui::Button::new(RichText::new(icon).size(14.0)).fill(fill),
                );
                let toggle = toggle.on_hover_text(hover_text);
                if toggle.clicked() {
                    toggle.surrender_focus();
                    self.controls.toggle_paused();
                }
            }

            if self.config.show_position {
                ui.separator();
                ui.label(RichText::new(position_label(&snapshot)).strong());
            }
        });

        if let Some(outcome) = outcome {
            tracing::debug!("Navigation bar step: {:?}", outcome);
        }
        outcome
    }
}

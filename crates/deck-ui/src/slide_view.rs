//! Slide content and its view

use egui::{RichText, Color32};
use serde::{Serialize, Deserialize};

/// A single slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,

    #[serde(default)]
    pub body: String,
}

/// An ordered deck of slides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Built-in deck used when no deck file is given
    pub fn demo() -> Self {
        let slide = |title: &str, body: &str| Slide {
            title: title.to_string(),
            body: body.to_string(),
        };

        Self {
            title: "Deck".to_string(),
            slides: vec![
                slide("Welcome", "Press Space or the Right Arrow to move on."),
                slide("Navigation", "Left Arrow goes back. The buttons below work too."),
                slide("Pausing", "Pause keyboard navigation with the toggle; the buttons keep working."),
                slide("History", "Back and forward in the top bar move through the route history."),
                slide("The End", "This is the last slide."),
            ],
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Renders the slide at an index
#[derive(Debug, Clone)]
pub struct SlideView {
    pub title_size: f32,
    pub body_size: f32,
}

impl Default for SlideView {
    fn default() -> Self {
        Self {
            title_size: 32.0,
            body_size: 18.0,
        }
    }
}

impl SlideView {
    pub fn ui(&self, ui: &mut egui::Ui, deck: &Deck, index: usize) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);

            match deck.slide(index) {
                Some(slide) => {
                    ui.label(RichText::new(&slide.title).size(self.title_size).strong());
                    ui.add_space(16.0);
                    ui.label(RichText::new(&slide.body).size(self.body_size));
                }
                // The route can point past the deck until the next navigation
                None => {
                    ui.label(
                        RichText::new(format!("Slide {} not found", index + 1))
                            .size(self.title_size)
                            .color(Color32::from_rgb(220, 80, 80)),
                    );
                }
            }
        });
    }
}

//! Main application entry point

use std::sync::Arc;
use eframe::egui::{self, Context};
use anyhow::{Context as _, Result};
use tracing::info;

use deck_core::{
    AppContext, ControlsConfig, ControlsSnapshot, ControlsSubscriber, HistoryRouter,
    NavigateControls, use_navigate_controls,
};
use deck_ui::{icons, Deck, KeyboardInput, NavigationBar, SlideView};

/// Controls configuration looked up in the working directory
const CONTROLS_CONFIG_PATH: &str = "deck-controls.json";

/// Requests a repaint whenever the slide or the pause flag changes, so
/// navigations committed outside a frame still show up
struct RepaintOnChange {
    egui_ctx: egui::Context,
}

impl ControlsSubscriber for RepaintOnChange {
    fn on_controls_change(&self, snapshot: &ControlsSnapshot) {
        tracing::debug!("Showing slide {} of {}", snapshot.index + 1, snapshot.len);
        self.egui_ctx.request_repaint();
    }
}

/// Main application state
struct DeckApp {
    /// Slides being presented
    deck: Deck,

    /// Router owning the committed slide path
    router: Arc<HistoryRouter>,

    /// Context the navigation controls are installed into
    context: AppContext,

    /// Keyboard adapter
    keyboard: KeyboardInput,

    /// Navigation bar
    navigation_bar: NavigationBar,

    /// Slide view
    slide_view: SlideView,

    /// Keeps the repaint subscriber alive
    _repaint: Arc<RepaintOnChange>,
}

impl DeckApp {
    fn new(cc: &eframe::CreationContext<'_>, deck: Deck, config: ControlsConfig) -> Self {
        let router = Arc::new(HistoryRouter::new(HistoryRouter::slide_routes(deck.len()), "/"));
        let controls = NavigateControls::new(router.clone());

        let context = AppContext::new();
        controls.install(&context);

        let repaint = Arc::new(RepaintOnChange {
            egui_ctx: cc.egui_ctx.clone(),
        });
        controls.add_subscriber(repaint.clone());

        Self {
            deck,
            router,
            context,
            keyboard: KeyboardInput::new(config.bindings),
            navigation_bar: NavigationBar::new(controls),
            slide_view: SlideView::default(),
            _repaint: repaint,
        }
    }

    /// Back/forward through the route history. These navigations do not
    /// go through the controls; the controls pick them up from the router.
    fn history_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&self.deck.title).strong());
            ui.separator();

            if ui.button(icons::BACK).on_hover_text("History back").clicked() {
                self.router.back();
            }
            if ui.button(icons::FORWARD).on_hover_text("History forward").clicked() {
                self.router.forward();
            }
        });
    }
}

/// Current slide view. Retrieves the controls from the context instead of
/// holding them.
fn slide_panel(ui: &mut egui::Ui, context: &AppContext, deck: &Deck, view: &SlideView) {
    match use_navigate_controls(context) {
        Some(controls) => view.ui(ui, deck, controls.index()),
        None => {
            ui.label("Navigation controls are not installed");
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        if let Some(controls) = use_navigate_controls(&self.context) {
            self.keyboard.process(ctx, &controls);
        }

        egui::TopBottomPanel::top("history_bar").show(ctx, |ui| {
            self.history_bar(ui);
        });

        egui::TopBottomPanel::bottom("navigation_bar").show(ctx, |ui| {
            self.navigation_bar.ui(ui);
        });

        let child = self.context.child();
        egui::CentralPanel::default().show(ctx, |ui| {
            slide_panel(ui, &child, &self.deck, &self.slide_view);
        });
    }
}

fn load_deck() -> Result<Deck> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read deck {}", path))?;
            let deck = Deck::from_json_str(&json)
                .with_context(|| format!("Failed to parse deck {}", path))?;
            info!("Loaded deck '{}' with {} slides from {}", deck.title, deck.len(), path);
            Ok(deck)
        }
        None => Ok(Deck::demo()),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let deck = load_deck()?;
    let config = ControlsConfig::load_or_default(CONTROLS_CONFIG_PATH);

    info!("Starting deck '{}'", deck.title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    let title = deck.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Box::new(DeckApp::new(cc, deck, config))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

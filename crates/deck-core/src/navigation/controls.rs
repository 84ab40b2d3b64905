//! Navigation controls implementation

use super::{
    ControlsSnapshot, ControlsSubscriber, Direction, StepOutcome,
    slide_index_or_default, slide_path,
};
use crate::context::AppContext;
use crate::router::{RouteListener, Router};
use std::sync::{Arc, Weak};
use parking_lot::RwLock;

/// Controls state stored internally
#[derive(Debug, Clone)]
struct ControlsState {
    index: usize,
    paused: bool,
}

/// Slide navigation controls.
///
/// The current index is owned by the router: it is derived from the
/// committed path on every route-settled notification, and stepping only
/// asks the router to navigate. Keyboard input goes through a
/// [`KeyboardGate`](super::KeyboardGate) which honours the pause flag;
/// `next`/`prev` called directly never are.
pub struct NavigateControls {
    router: Arc<dyn Router>,
    len: usize,
    state: Arc<RwLock<ControlsState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn ControlsSubscriber>>>>,
}

impl NavigateControls {
    /// Create controls bound to a router and register for its
    /// route-settled notifications
    pub fn new(router: Arc<dyn Router>) -> Arc<Self> {
        let len = router
            .routes()
            .iter()
            .filter(|route| !route.is_redirect())
            .count();
        let initial_path = router.current_path();
        let index = slide_index_or_default(&initial_path);

        let controls = Arc::new(Self {
            router: router.clone(),
            len,
            state: Arc::new(RwLock::new(ControlsState {
                index,
                paused: false,
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        });

        let listener: Arc<dyn RouteListener> = controls.clone();
        router.after_each(Arc::downgrade(&listener));

        tracing::debug!("Navigation controls created at {} ({} of {} slides)", initial_path, index, len);
        controls
    }

    /// Re-derive the current index from a committed path.
    ///
    /// The index is not clamped to the deck: the router is trusted to only
    /// commit existing slides, and an out-of-range path shows up as-is in
    /// the boundary flags until the next navigation corrects it.
    pub fn on_route_changed(&self, path: &str) {
        let index = slide_index_or_default(path);
        if index >= self.len && self.len > 0 {
            tracing::warn!("Route {} points past the last slide ({} slides)", path, self.len);
        }

        let mut state = self.state.write();
        if state.index == index {
            return;
        }
        state.index = index;
        drop(state);

        tracing::debug!("Route settled at {}, current slide {}", path, index);
        self.notify_subscribers();
    }

    /// Move one slide in `direction`, clamped to the deck
    pub fn step(&self, direction: Direction) -> StepOutcome {
        let current = self.index();
        let Some(last) = self.len.checked_sub(1) else {
            return StepOutcome::AtBoundary;
        };

        let target = match direction {
            Direction::Forward => current.saturating_add(1).min(last),
            Direction::Backward => current.saturating_sub(1).min(last),
        };

        self.navigate_to(current, target)
    }

    /// Jump to a slide, clamped to the last one
    pub fn go_to(&self, index: usize) -> StepOutcome {
        let current = self.index();
        let Some(last) = self.len.checked_sub(1) else {
            return StepOutcome::AtBoundary;
        };

        self.navigate_to(current, index.min(last))
    }

    /// Navigate forward by one slide. Never gated by the pause flag.
    pub fn next(&self) -> StepOutcome {
        self.step(Direction::Forward)
    }

    /// Navigate backward by one slide. Never gated by the pause flag.
    pub fn prev(&self) -> StepOutcome {
        self.step(Direction::Backward)
    }

    /// Whether keyboard stepping is suppressed
    pub fn paused(&self) -> bool {
        self.state.read().paused
    }

    pub fn set_paused(&self, paused: bool) {
        let mut state = self.state.write();
        if state.paused == paused {
            return;
        }
        state.paused = paused;
        drop(state);

        tracing::debug!("Keyboard navigation {}", if paused { "paused" } else { "resumed" });
        self.notify_subscribers();
    }

    pub fn toggle_paused(&self) {
        let paused = self.paused();
        self.set_paused(!paused);
    }

    /// Current slide index as last reported by the router
    pub fn index(&self) -> usize {
        self.state.read().index
    }

    /// Number of navigable slides
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.index().saturating_add(1) < self.len
    }

    pub fn has_prev(&self) -> bool {
        self.index() > 0
    }

    /// Get current controls snapshot
    pub fn snapshot(&self) -> ControlsSnapshot {
        let state = self.state.read();
        ControlsSnapshot {
            index: state.index,
            len: self.len,
            paused: state.paused,
            has_next: state.index.saturating_add(1) < self.len,
            has_prev: state.index > 0,
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn ControlsSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Provide these controls to every component under `ctx`
    pub fn install(self: &Arc<Self>, ctx: &AppContext) {
        ctx.provide(self.clone());
        tracing::info!("Navigation controls installed into context {}", ctx.id());
    }

    fn navigate_to(&self, current: usize, target: usize) -> StepOutcome {
        if target == current {
            tracing::debug!("Already at slide {}, no navigation", current);
            return StepOutcome::AtBoundary;
        }

        // The router may notify synchronously, so no lock is held here
        self.router.push(&slide_path(target));
        StepOutcome::Navigated(target)
    }

    /// Notify all subscribers of a controls change
    fn notify_subscribers(&self) {
        let snapshot = self.snapshot();
        let live: Vec<Arc<dyn ControlsSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(|weak| weak.upgrade()).collect()
        };

        for subscriber in live {
            subscriber.on_controls_change(&snapshot);
        }
    }
}

impl RouteListener for NavigateControls {
    fn on_route_settled(&self, path: &str) {
        self.on_route_changed(path);
    }
}

/// Retrieve the controls installed in `ctx` or one of its ancestors
pub fn use_navigate_controls(ctx: &AppContext) -> Option<Arc<NavigateControls>> {
    ctx.inject::<NavigateControls>()
}

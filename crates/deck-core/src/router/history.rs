//! In-memory router with a browser-like history stack

use super::{RouteListener, RouteRecord, Router};
use std::sync::{Arc, Weak};
use parking_lot::{Mutex, RwLock};

/// History entries and the position of the committed one
#[derive(Debug, Clone)]
struct HistoryState {
    entries: Vec<String>,
    cursor: usize,
}

/// A router that keeps its history in memory and notifies listeners
/// synchronously after every commit
pub struct HistoryRouter {
    routes: Vec<RouteRecord>,
    state: Arc<RwLock<HistoryState>>,
    listeners: Arc<Mutex<Vec<Weak<dyn RouteListener>>>>,
}

impl HistoryRouter {
    /// Create a router over a catalog, starting at `initial_path`
    pub fn new(routes: Vec<RouteRecord>, initial_path: &str) -> Self {
        let router = Self {
            routes,
            state: Arc::new(RwLock::new(HistoryState {
                entries: Vec::new(),
                cursor: 0,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
        };

        let initial = router.resolve(initial_path);
        router.state.write().entries.push(initial);
        router
    }

    /// Catalog for a deck of `slide_count` slides: `/` redirects to `/0`,
    /// followed by `/0` through `/{slide_count - 1}`
    pub fn slide_routes(slide_count: usize) -> Vec<RouteRecord> {
        let mut routes = Vec::with_capacity(slide_count + 1);
        routes.push(RouteRecord::redirect("/", "/0"));
        routes.extend((0..slide_count).map(|i| RouteRecord::new(format!("/{}", i))));
        routes
    }

    /// Replace the committed entry without growing the history
    pub fn replace(&self, path: &str) {
        let resolved = self.resolve(path);
        {
            let mut state = self.state.write();
            let cursor = state.cursor;
            state.entries[cursor] = resolved.clone();
        }
        self.notify_listeners(&resolved);
    }

    /// Step back in history. Returns false when already at the oldest entry.
    pub fn back(&self) -> bool {
        let path = {
            let mut state = self.state.write();
            if state.cursor == 0 {
                return false;
            }
            state.cursor -= 1;
            state.entries[state.cursor].clone()
        };

        tracing::debug!("History back to {}", path);
        self.notify_listeners(&path);
        true
    }

    /// Step forward in history. Returns false when already at the newest entry.
    pub fn forward(&self) -> bool {
        let path = {
            let mut state = self.state.write();
            if state.cursor + 1 >= state.entries.len() {
                return false;
            }
            state.cursor += 1;
            state.entries[state.cursor].clone()
        };

        tracing::debug!("History forward to {}", path);
        self.notify_listeners(&path);
        true
    }

    /// All history entries, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.read().entries.clone()
    }

    /// Follow redirect records until a non-redirect path is reached
    fn resolve(&self, path: &str) -> String {
        let mut resolved = path.to_string();

        // A redirect cycle can visit each record at most once
        for _ in 0..=self.routes.len() {
            match self.routes.iter().find(|r| r.path == resolved) {
                Some(RouteRecord { redirect: Some(target), .. }) => {
                    resolved = target.clone();
                }
                _ => break,
            }
        }

        if !self.routes.iter().any(|r| r.path == resolved && !r.is_redirect()) {
            tracing::warn!("No route declared for {}, committing anyway", resolved);
        }

        resolved
    }

    /// Notify all listeners of a committed path
    fn notify_listeners(&self, path: &str) {
        let live: Vec<Arc<dyn RouteListener>> = {
            let mut listeners = self.listeners.lock();

            // Remove any dead weak references
            listeners.retain(|weak| weak.strong_count() > 0);
            listeners.iter().filter_map(|weak| weak.upgrade()).collect()
        };

        for listener in live {
            listener.on_route_settled(path);
        }
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> String {
        let state = self.state.read();
        state.entries[state.cursor].clone()
    }

    fn routes(&self) -> Vec<RouteRecord> {
        self.routes.clone()
    }

    fn push(&self, path: &str) {
        let resolved = self.resolve(path);
        {
            let mut state = self.state.write();
            let next = state.cursor + 1;
            state.entries.truncate(next);
            state.entries.push(resolved.clone());
            state.cursor = next;
        }

        tracing::debug!("Pushed {}", resolved);
        self.notify_listeners(&resolved);
    }

    fn after_each(&self, listener: Weak<dyn RouteListener>) {
        self.listeners.lock().push(listener);
    }
}

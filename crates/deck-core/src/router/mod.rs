//! Router contract consumed by the navigation controls

use std::sync::Weak;
use serde::{Serialize, Deserialize};

mod history;

pub use history::HistoryRouter;

/// One entry of the declared route catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Path matched by this record
    pub path: String,

    /// Target path when this record only redirects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteRecord {
    /// Create a navigable route
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect: None,
        }
    }

    /// Create a redirect-only route
    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect: Some(target.into()),
        }
    }

    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }
}

/// Trait for components that react to committed navigations
pub trait RouteListener: Send + Sync {
    /// Called after every committed navigation with the committed path
    fn on_route_settled(&self, path: &str);
}

/// The external router the navigation controls drive and observe
pub trait Router: Send + Sync {
    /// The currently committed path
    fn current_path(&self) -> String;

    /// The declared route catalog, in declaration order
    fn routes(&self) -> Vec<RouteRecord>;

    /// Navigate to a path. Fire-and-forget: the outcome arrives through
    /// the `after_each` listeners.
    fn push(&self, path: &str);

    /// Register a listener called after every committed navigation
    fn after_each(&self, listener: Weak<dyn RouteListener>);
}

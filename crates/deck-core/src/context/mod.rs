//! Tree-scoped context for handing shared services down to components
//!
//! A context maps a type to one shared instance. Child contexts inherit
//! their parent's entries and may shadow them; separate roots never share
//! anything, so two applications (or two tests) cannot see each other's
//! services.

use std::any::{Any, TypeId};
use std::sync::Arc;
use parking_lot::RwLock;
use ahash::AHashMap;
use uuid::Uuid;

/// Context scope identifier type
pub type ContextId = Uuid;

type Entry = Arc<dyn Any + Send + Sync>;

/// A scoped registry of shared services
#[derive(Clone)]
pub struct AppContext {
    inner: Arc<ContextScope>,
}

struct ContextScope {
    id: ContextId,
    parent: Option<Arc<ContextScope>>,
    entries: RwLock<AHashMap<TypeId, Entry>>,
}

impl ContextScope {
    fn lookup(&self, type_id: TypeId) -> Option<Entry> {
        if let Some(entry) = self.entries.read().get(&type_id) {
            return Some(entry.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.lookup(type_id))
    }
}

impl AppContext {
    /// Create a new root context
    pub fn new() -> Self {
        Self::with_parent(None)
    }

    /// Create a context that inherits everything provided to this one
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.inner.clone()))
    }

    fn with_parent(parent: Option<Arc<ContextScope>>) -> Self {
        Self {
            inner: Arc::new(ContextScope {
                id: Uuid::new_v4(),
                parent,
                entries: RwLock::new(AHashMap::new()),
            }),
        }
    }

    pub fn id(&self) -> ContextId {
        self.inner.id
    }

    /// Provide a value to this context and its descendants, replacing any
    /// value of the same type provided here before
    pub fn provide<T: Send + Sync + 'static>(&self, value: Arc<T>) {
        let mut entries = self.inner.entries.write();
        entries.insert(TypeId::of::<T>(), value as Entry);
    }

    /// Look up a value provided to this context or the nearest ancestor
    pub fn inject<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let entry = self.inner.lookup(TypeId::of::<T>())?;
        entry.downcast::<T>().ok()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

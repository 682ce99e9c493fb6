// Route table - ordered path matches with a mandatory wildcard fallback
use crate::domain::view::ViewKind;

#[derive(Debug, Clone)]
struct RouteEntry {
    path: String,
    target: ViewKind,
}

/// Ordered list of (path, view) pairs. Resolution walks the list in
/// declaration order; anything unmatched falls through to the fallback,
/// which every table must carry.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: ViewKind,
}

impl RouteTable {
    pub fn new(fallback: ViewKind) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    pub fn route(mut self, path: &str, target: ViewKind) -> Self {
        self.entries.push(RouteEntry {
            path: path.to_string(),
            target,
        });
        self
    }

    /// Resolve a navigation path to a view. Pure lookup, no side effects.
    pub fn resolve(&self, path: &str) -> ViewKind {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.target)
            .unwrap_or(self.fallback)
    }

    /// The application's route table: root, dashboard, everything else
    /// falls through to NotFound.
    pub fn standard() -> Self {
        Self::new(ViewKind::NotFound)
            .route("/", ViewKind::Home)
            .route("/dashboard", ViewKind::Dashboard)
    }
}

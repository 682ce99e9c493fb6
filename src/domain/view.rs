// The closed set of presentation states. Exactly one is mounted at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Error,
    Home,
    Dashboard,
    NotFound,
}

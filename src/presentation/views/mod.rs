// View capability interface and the static views
pub mod dashboard;
pub mod home;

use crate::domain::view::ViewKind;

/// What every presentation state can do. `mount` runs once when the view
/// becomes the active one, `unmount` once when it stops being active, and
/// `render` produces the markup the screen writes.
pub trait View {
    fn kind(&self) -> ViewKind;

    fn mount(&mut self) {}

    fn unmount(&mut self) {}

    fn render(&self) -> String;
}

/// Placeholder indicator shown before any network call completes.
pub struct LoadingView;

impl View for LoadingView {
    fn kind(&self) -> ViewKind {
        ViewKind::Loading
    }

    fn render(&self) -> String {
        "Loading...\n".to_string()
    }
}

/// Static failure message. Carries no diagnostic detail; the underlying
/// cause only goes to the developer log.
pub struct ErrorView;

impl View for ErrorView {
    fn kind(&self) -> ViewKind {
        ViewKind::Error
    }

    fn render(&self) -> String {
        "Error!\nAn error occurred while fetching data. Please try again later.\n".to_string()
    }
}

pub struct NotFoundView;

impl View for NotFoundView {
    fn kind(&self) -> ViewKind {
        ViewKind::NotFound
    }

    fn render(&self) -> String {
        "404 - Page Not Found\n".to_string()
    }
}

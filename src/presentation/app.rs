// Application shell - drives the startup state machine and navigation
use crate::application::bootstrap::{AppPhase, BootstrapService};
use crate::domain::route::RouteTable;
use crate::domain::view::ViewKind;
use crate::presentation::screen::Screen;
use crate::presentation::views::dashboard::DashboardView;
use crate::presentation::views::home::HomeView;
use crate::presentation::views::{ErrorView, LoadingView, NotFoundView, View};
use std::io::Write;

pub struct App<W: Write> {
    bootstrap: BootstrapService,
    routes: RouteTable,
    screen: Screen<W>,
    phase: AppPhase,
}

impl<W: Write> App<W> {
    pub fn new(bootstrap: BootstrapService, routes: RouteTable, out: W) -> Self {
        Self {
            bootstrap,
            routes,
            screen: Screen::new(out),
            phase: AppPhase::Loading,
        }
    }

    /// Run the startup sequence: show the loading indicator, fetch both
    /// resources in order, then either route the initial path or show the
    /// error view. The fetch sequence runs once and is never retried.
    pub async fn start(&mut self, initial_path: &str) -> anyhow::Result<()> {
        self.screen.swap(Box::new(LoadingView))?;

        match self.bootstrap.run().await {
            Ok(session) => {
                self.phase = AppPhase::Routed(session);
                self.navigate(initial_path)?;
            }
            Err(e) => {
                tracing::error!("Error fetching data: {e}");
                self.phase = AppPhase::Error;
                self.screen.swap(Box::new(ErrorView))?;
            }
        }

        Ok(())
    }

    /// Handle an external route change. Resolves the path against the
    /// table and swaps the mounted view; no network activity.
    pub fn navigate(&mut self, path: &str) -> anyhow::Result<()> {
        let AppPhase::Routed(session) = &self.phase else {
            tracing::warn!(path, "navigation ignored before startup completed");
            return Ok(());
        };

        let kind = self.routes.resolve(path);
        let view: Box<dyn View> = match kind {
            ViewKind::Home => Box::new(HomeView::new()),
            ViewKind::Dashboard => {
                Box::new(DashboardView::new(&session.profile, &session.series))
            }
            _ => Box::new(NotFoundView),
        };
        self.screen.swap(view)?;
        Ok(())
    }

    pub fn current_view(&self) -> Option<ViewKind> {
        self.screen.current_kind()
    }

    pub fn phase(&self) -> &AppPhase {
        &self.phase
    }

    /// The raw markup written so far. Only meaningful when the sink is a
    /// buffer.
    pub fn output(&self) -> &W {
        self.screen.sink()
    }
}

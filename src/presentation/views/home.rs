// Home view - heading with a timed fade-in
use crate::domain::view::ViewKind;
use crate::presentation::views::View;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

pub const WELCOME_HEADING: &str = "Welcome to our advanced web application!";

const FADE_DURATION_MS: u64 = 1000;
const FADE_STEPS: u32 = 10;

/// Handle to a running fade-in. Dropping it aborts the frame task, so no
/// frame can fire after the owning view is unmounted.
pub struct FadeIn {
    handle: JoinHandle<()>,
}

impl FadeIn {
    /// Redraw `text` in place, stepping its gray level from black to full
    /// white over the fade duration.
    pub fn start(text: String) -> Self {
        let handle = tokio::spawn(async move {
            let step_delay = Duration::from_millis(FADE_DURATION_MS / FADE_STEPS as u64);
            for step in 1..=FADE_STEPS {
                sleep(step_delay).await;
                let level = (255 * step / FADE_STEPS) as u8;
                let _ = execute!(
                    io::stdout(),
                    MoveToColumn(0),
                    SetForegroundColor(Color::Rgb {
                        r: level,
                        g: level,
                        b: level,
                    }),
                    Print(&text),
                    ResetColor,
                );
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FadeIn {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct HomeView {
    heading: String,
    fade: Option<FadeIn>,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            heading: WELCOME_HEADING.to_string(),
            fade: None,
        }
    }

    pub fn fade_running(&self) -> bool {
        self.fade.as_ref().is_some_and(|f| !f.is_finished())
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn kind(&self) -> ViewKind {
        ViewKind::Home
    }

    fn mount(&mut self) {
        // Every mount gets a fresh fade; a leftover handle from an earlier
        // cycle is aborted first.
        self.fade = Some(FadeIn::start(self.heading.clone()));
    }

    fn unmount(&mut self) {
        // Stop the animation whether or not it finished.
        self.fade = None;
    }

    fn render(&self) -> String {
        format!("{}\n", self.heading)
    }
}

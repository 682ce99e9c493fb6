// Screen - owns the single mounted view and the output sink
use crate::domain::view::ViewKind;
use crate::presentation::views::View;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// At most one view is mounted at any time. Swapping unmounts the old view
/// before the new one mounts, then clears the sink and writes the new
/// markup in one flush.
pub struct Screen<W: Write> {
    out: W,
    current: Option<Box<dyn View>>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out, current: None }
    }

    pub fn swap(&mut self, mut view: Box<dyn View>) -> io::Result<()> {
        if let Some(mut old) = self.current.take() {
            old.unmount();
        }
        view.mount();

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(view.render().as_bytes())?;
        self.out.flush()?;

        self.current = Some(view);
        Ok(())
    }

    pub fn current_kind(&self) -> Option<ViewKind> {
        self.current.as_ref().map(|v| v.kind())
    }

    /// Read-only access to the sink. Tests render into a byte buffer and
    /// inspect it through here.
    pub fn sink(&self) -> &W {
        &self.out
    }
}

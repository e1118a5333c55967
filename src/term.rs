use crate::TermInt;
use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::warn;

/// Output side of the terminal. Rows and columns are 1-based.
pub trait Screen {
    fn clear_screen(&mut self) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    fn move_cursor(&mut self, row: TermInt, col: TermInt) -> Result<()>;
    fn print(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    fn print_at(&mut self, row: TermInt, col: TermInt, text: &str) -> Result<()> {
        self.move_cursor(row, col)?;
        self.print(text)
    }

    /// Draws a `width` x `height` box with its top left corner at (1, 1).
    fn draw_borders(&mut self, width: TermInt, height: TermInt) -> Result<()> {
        let horizontal: String = (0..width)
            .map(|x| if x == 0 || x == width - 1 { '+' } else { '-' })
            .collect();

        self.print_at(1, 1, &horizontal)?;
        for row in 2..height {
            self.print_at(row, 1, "|")?;
            self.print_at(row, width, "|")?;
        }
        self.print_at(height, 1, &horizontal)
    }
}

/// Crossterm backed screen. Owns raw mode and the alternate screen while
/// active and gives both back on `restore` or on drop.
pub struct TermManager<W: Write = Stdout> {
    out: W,
    active: bool,
}

impl TermManager<Stdout> {
    pub fn new() -> Self {
        TermManager::with_writer(stdout())
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(out: W) -> Self {
        TermManager { out, active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        self.active = true;
        execute!(self.out, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.hide_cursor()?;
        execute!(self.out, cursor::DisableBlinking)
    }

    /// Runs every restore step even when an earlier one fails and reports
    /// the first failure. Only the first call does anything.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let shown = self.show_cursor();
        let raw_mode = terminal::disable_raw_mode();
        let screen = execute!(self.out, cursor::EnableBlinking, LeaveAlternateScreen);

        shown.and(raw_mode).and(screen)
    }
}

impl Default for TermManager<Stdout> {
    fn default() -> Self {
        TermManager::new()
    }
}

impl<W: Write> Drop for TermManager<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}

impl<W: Write> Screen for TermManager<W> {
    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.out, cursor::Hide)
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.out, cursor::Show)
    }

    fn move_cursor(&mut self, row: TermInt, col: TermInt) -> Result<()> {
        // crossterm is 0-based and takes (column, row)
        let (col, row) = (col.saturating_sub(1), row.saturating_sub(1));
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.out, style::Print(text))
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

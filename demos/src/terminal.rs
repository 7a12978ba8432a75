//! Crossterm front end for the delivery-route demo.
//!
//! [`Terminal`] switches the terminal into raw mode on an alternate screen,
//! draws [`Frame`]s in colour and turns key presses into [`Action`]s. The
//! terminal is restored when the value is dropped.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridroute_core::{Coord, OccupancyGrid};

use crate::{Action, Frame, GLYPH_END, GLYPH_PATH, GLYPH_START, GLYPH_WALL, HELP_TEXT, glyph_at};

// Colours
const COL_FREE_BG: CtColor = CtColor::Rgb { r: 20, g: 20, b: 30 };
const COL_WALL_BG: CtColor = CtColor::Rgb { r: 200, g: 205, b: 215 };
const COL_FREE_FG: CtColor = CtColor::Rgb { r: 70, g: 70, b: 90 };
const COL_PATH: CtColor = CtColor::Rgb { r: 255, g: 255, b: 0 };
const COL_START: CtColor = CtColor::Rgb { r: 230, g: 40, b: 40 };
const COL_END: CtColor = CtColor::Rgb { r: 255, g: 215, b: 0 };
const COL_STATUS_FG: CtColor = CtColor::Rgb { r: 200, g: 200, b: 200 };

/// Colours for a glyph as (foreground, background).
fn glyph_colors(ch: char) -> (CtColor, CtColor) {
    match ch {
        GLYPH_WALL => (COL_WALL_BG, COL_WALL_BG),
        GLYPH_PATH => (COL_PATH, COL_FREE_BG),
        GLYPH_START => (COL_START, COL_FREE_BG),
        GLYPH_END => (COL_END, COL_FREE_BG),
        _ => (COL_FREE_FG, COL_FREE_BG),
    }
}

/// Terminal row for a grid row, pinned to the last addressable row.
fn screen_row(row: usize) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

/// A raw-mode terminal session.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Built before the screen switch so Drop restores raw mode on failure.
        let mut term = Self { out: io::stdout() };
        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(term)
    }

    /// Draw `frame` over `grid`, two columns per cell so cells look square.
    pub fn draw(&mut self, grid: &OccupancyGrid, frame: &Frame) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        for row in 0..grid.height() {
            queue!(self.out, cursor::MoveTo(0, screen_row(row)))?;
            for col in 0..grid.width() {
                let ch = glyph_at(grid, frame, Coord::new(row as i32, col as i32));
                let (fg, bg) = glyph_colors(ch);
                let shown = if ch == GLYPH_WALL { ' ' } else { ch };
                queue!(
                    self.out,
                    SetForegroundColor(fg),
                    SetBackgroundColor(bg),
                    Print(shown),
                    Print(' ')
                )?;
            }
            queue!(self.out, ResetColor)?;
        }

        let status_row = screen_row(grid.height()).saturating_add(1);
        queue!(
            self.out,
            cursor::MoveTo(0, status_row),
            SetForegroundColor(COL_STATUS_FG),
            Print(frame.summary()),
            cursor::MoveTo(0, status_row + 1),
            Print(HELP_TEXT),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Block until a key mapped to an [`Action`] is pressed.
    pub fn next_action(&mut self) -> io::Result<Action> {
        loop {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = Action::from_key(code) {
                    return Ok(action);
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_glyphs_stand_out() {
        assert_eq!(glyph_colors(GLYPH_PATH).0, COL_PATH);
        assert_eq!(glyph_colors(GLYPH_START).0, COL_START);
        assert_eq!(glyph_colors(GLYPH_END).0, COL_END);
        let (fg, bg) = glyph_colors(GLYPH_WALL);
        assert_eq!(fg, bg);
        assert_eq!(glyph_colors('.').1, COL_FREE_BG);
    }

    #[test]
    fn tall_grids_saturate_the_screen_row() {
        assert_eq!(screen_row(12), 12);
        assert_eq!(screen_row(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(screen_row(1 << 20), u16::MAX);
        assert_eq!(screen_row(1 << 20).saturating_add(1), u16::MAX);
    }
}

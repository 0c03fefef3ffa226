// Chunk: docs/chunks/menu_terminal - crossterm frontend
//!
//! Terminal frontend built on crossterm.
//!
//! - [`TerminalSession`] puts the terminal into raw mode on the alternate
//!   screen and restores it on drop.
//! - [`CellCanvas`] is an in-memory grid of cells implementing [`Canvas`];
//!   one cell is one unit of layout.
//! - [`TerminalFrontend`] ties both to crossterm's event reader.
//!
//! The UI is drawn on stderr so stdout stays free for the selection.
//! crossterm reads input from the controlling terminal, so candidates can
//! be piped in on stdin.

use std::io::{self, BufWriter, Stderr, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    KeyboardEnhancementFlags, MouseEventKind as CtMouseKind, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use lite_menu_input::{
    Key, KeyEvent, LogicalEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, ScrollDirection,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::MenuError;
use crate::event_loop::Frontend;
use crate::geometry::{Rect, WindowGeometry};
use crate::keymap::{decode_key, decode_mouse};
use crate::layout::Canvas;
use crate::style::Rgba;

// =============================================================================
// Session guard
// =============================================================================

/// Raw mode, alternate screen, hidden cursor and mouse capture for as long
/// as the value lives.
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut err = io::stderr();
        execute!(err, EnterAlternateScreen, Hide, EnableMouseCapture)?;

        // Lets Ctrl-i, Ctrl-m and Ctrl-h be told apart from Tab, Enter and
        // Backspace. Not every terminal supports it.
        let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
            && execute!(
                err,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )
            .is_ok();

        tracing::debug!(keyboard_enhanced, "terminal session started");
        Ok(Self { keyboard_enhanced })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut err = io::stderr();
        if self.keyboard_enhanced {
            let _ = execute!(err, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(err, DisableMouseCapture, Show, ResetColor, LeaveAlternateScreen);
        let _ = err.flush();
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// Cell canvas
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Rgba,
    bg: Rgba,
    /// Right half of a wide glyph; not printed on its own.
    continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            continuation: false,
        }
    }
}

/// A window-sized grid of cells.
///
/// Text is measured in terminal columns and is always one row tall.
/// Everything drawn outside the window is clipped.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    window: Rect,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Creates a blank canvas for `window`, given in screen cells.
    pub fn new(window: Rect) -> Self {
        let mut canvas = Self {
            window,
            cells: Vec::new(),
        };
        canvas.resize(window);
        canvas
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    /// Moves and resizes the canvas, blanking it.
    pub fn resize(&mut self, window: Rect) {
        self.window = window;
        let len = (window.width.max(0) * window.height.max(0)) as usize;
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let bounds = Rect::new(0, 0, self.window.width, self.window.height);
        bounds
            .contains(x, y)
            .then(|| (y * self.window.width + x) as usize)
    }

    /// Returns the glyph and colors at `(x, y)`.
    pub fn cell(&self, x: i32, y: i32) -> Option<(char, Rgba, Rgba)> {
        self.index(x, y).map(|i| {
            let cell = &self.cells[i];
            (cell.ch, cell.fg, cell.bg)
        })
    }

    /// Returns the glyphs of row `y` as a string.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.window.width)
            .filter_map(|x| self.index(x, y))
            .filter(|&i| !self.cells[i].continuation)
            .map(|i| self.cells[i].ch)
            .collect()
    }

    /// Writes the grid at the window position on screen.
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut colors: Option<(Rgba, Rgba)> = None;

        for row in 0..self.window.height {
            queue!(out, MoveTo(to_u16(self.window.x), to_u16(self.window.y + row)))?;
            for column in 0..self.window.width {
                let Some(i) = self.index(column, row) else {
                    continue;
                };
                let cell = self.cells[i];
                if cell.continuation {
                    continue;
                }
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        out,
                        SetForegroundColor(to_color(cell.fg)),
                        SetBackgroundColor(to_color(cell.bg))
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(out, Print(cell.ch))?;
            }
        }

        queue!(out, ResetColor)?;
        out.flush()
    }
}

impl Canvas for CellCanvas {
    fn measure_text(&self, text: &str) -> (i32, i32) {
        (text.width() as i32, 1)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let clipped = rect.intersect(&Rect::new(0, 0, self.window.width, self.window.height));
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = Cell {
                        bg: color,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgba) {
        let mut column = x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            if column.saturating_add(width) > self.window.width {
                break;
            }
            if column >= 0 {
                if let Some(i) = self.index(column, y) {
                    self.cells[i].ch = ch;
                    self.cells[i].fg = color;
                    self.cells[i].continuation = false;
                }
                if width == 2 {
                    if let Some(i) = self.index(column + 1, y) {
                        self.cells[i].continuation = true;
                    }
                }
            }
            column = column.saturating_add(width);
        }
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn to_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

// =============================================================================
// Event translation
// =============================================================================

/// Converts a crossterm key event. Releases and unknown keys yield `None`.
pub fn translate_key(event: &event::KeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut modifiers = translate_modifiers(event.modifiers);

    let key = match event.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Return,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };

    Some(KeyEvent::new(key, modifiers))
}

/// Converts a crossterm mouse event, making the position relative to
/// `window`.
pub fn translate_mouse(event: &event::MouseEvent, window: Rect) -> MouseEvent {
    let button = |button: event::MouseButton| match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    };

    let kind = match event.kind {
        CtMouseKind::Down(b) => MouseEventKind::Down(button(b)),
        CtMouseKind::Up(b) => MouseEventKind::Up(button(b)),
        CtMouseKind::ScrollUp => MouseEventKind::Scroll(ScrollDirection::Up),
        CtMouseKind::ScrollDown => MouseEventKind::Scroll(ScrollDirection::Down),
        _ => MouseEventKind::Moved,
    };

    MouseEvent {
        kind,
        position: (
            i32::from(event.column) - window.x,
            i32::from(event.row) - window.y,
        ),
        modifiers: translate_modifiers(event.modifiers),
    }
}

fn translate_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.contains(KeyModifiers::SHIFT),
        command: modifiers.contains(KeyModifiers::SUPER),
        control: modifiers.contains(KeyModifiers::CONTROL),
    }
}

// =============================================================================
// Frontend
// =============================================================================

/// The menu running in the terminal.
pub struct TerminalFrontend {
    canvas: CellCanvas,
    geometry: WindowGeometry,
    out: BufWriter<Stderr>,
    clear_pending: bool,
    // Dropped last so the terminal is restored after the final flush.
    _session: TerminalSession,
}

impl TerminalFrontend {
    /// Takes over the terminal and places the window on it.
    pub fn start(geometry: WindowGeometry) -> io::Result<Self> {
        let session = TerminalSession::enter()?;
        let (columns, rows) = terminal::size()?;
        let window = geometry.resolve(i32::from(columns), i32::from(rows));
        tracing::debug!(?window, columns, rows, "placed window");

        Ok(Self {
            canvas: CellCanvas::new(window),
            geometry,
            out: BufWriter::new(io::stderr()),
            clear_pending: true,
            _session: session,
        })
    }

    /// The window, in screen cells.
    pub fn window(&self) -> Rect {
        self.canvas.window()
    }
}

impl Frontend for TerminalFrontend {
    fn next_event(&mut self) -> Result<LogicalEvent, MenuError> {
        loop {
            let decoded = match event::read()? {
                Event::Key(key) => translate_key(&key).and_then(|key| decode_key(&key)),
                Event::Mouse(mouse) => decode_mouse(&translate_mouse(&mouse, self.window())),
                Event::Resize(columns, rows) => {
                    let window = self.geometry.resolve(i32::from(columns), i32::from(rows));
                    tracing::debug!(?window, "terminal resized");
                    self.canvas.resize(window);
                    self.clear_pending = true;
                    Some(LogicalEvent::Resize {
                        width: window.width,
                        height: window.height,
                    })
                }
                _ => None,
            };

            if let Some(event) = decoded {
                return Ok(event);
            }
        }
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<(), MenuError> {
        if self.clear_pending {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
            self.clear_pending = false;
        }
        self.canvas.present(&mut self.out)?;
        Ok(())
    }
}

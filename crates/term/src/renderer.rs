//! TerminalRenderer: owns the terminal session and flushes framebuffers.
//!
//! The puzzle redraws only after input, so each flush writes just the cell
//! runs that differ from the frame on screen. With nothing on screen (first
//! frame, size change, [`TerminalRenderer::invalidate`]) every row is one run.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    session: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            session: false,
        }
    }

    /// Raw mode, alternate screen, mouse capture and focus reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.session = true;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(EnableMouseCapture)?
            .queue(EnableFocusChange)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). A no-op outside a session.
    pub fn exit(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.session, false) {
            return Ok(());
        }
        self.shown = None;
        self.buf.clear();
        self.buf
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(DisableFocusChange)?
            .queue(DisableMouseCapture)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint every cell on the next draw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the frame it replaced.
    ///
    /// The runner renders into the returned buffer next time, so frames are
    /// never cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        self.buf.clear();
        encode_frame(shown.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let spare = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        self.shown = Some(std::mem::replace(fb, spare));
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// Without a `shown` frame the screen is cleared and painted in full.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = StylePen::default();
    for (x, y, len) in changed_runs(shown, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            pen.set(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
    }

    if pen.used() {
        out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
    }
    Ok(())
}

/// Horizontal runs `(x, y, len)` where `next` differs from `shown`.
fn changed_runs<'a>(
    shown: Option<&'a FrameBuffer>,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let width = next.width();
    let differs = move |x: u16, y: u16| shown.map_or(true, |s| s.get(x, y) != next.get(x, y));

    (0..next.height()).flat_map(move |y| {
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x, y) {
                x += 1;
            }
            if x == width {
                return None;
            }
            let start = x;
            while x < width && differs(x, y) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

/// Tracks the terminal's current style so unchanged cells emit nothing.
#[derive(Default)]
struct StylePen {
    current: Option<CellStyle>,
}

impl StylePen {
    fn set(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(style.fg.into()))?
            .queue(SetBackgroundColor(style.bg.into()))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }

    fn used(&self) -> bool {
        self.current.is_some()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

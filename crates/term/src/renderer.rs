//! TerminalRenderer: flushes framebuffers to a terminal, rewriting only what changed.
//!
//! The renderer remembers the last frame it presented. The next frame is
//! compared against it and only runs of changed glyphs are emitted; a size
//! change (or [`TerminalRenderer::invalidate`]) forces a full repaint.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal run of changed glyphs: start column, row, length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Force the next present to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a frame and return how many glyphs were written.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let written = match self.last.as_ref() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                let runs = changed_runs(prev, fb);
                encode_runs_into(fb, &runs, &mut self.buf)?
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        };
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(written)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame repaint into `out`; returns the glyph count.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let runs: Vec<Run> = (0..fb.height())
        .map(|y| Run {
            x: 0,
            y,
            len: fb.width(),
        })
        .collect();
    encode_runs_into(fb, &runs, out)
}

/// Encode the given runs of `fb` into `out`; returns the glyph count.
pub fn encode_runs_into(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> Result<usize> {
    let mut current: Option<Style> = None;
    let mut written = 0;

    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x.saturating_add(run.len) {
            let glyph = fb.get(x, run.y).unwrap_or_default();
            if current != Some(glyph.style) {
                queue_style(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
            written += 1;
        }
    }

    if written > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(written)
}

/// Runs of glyphs that differ between two equally sized frames.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run {
                x: s,
                y,
                len: next.width() - s,
            });
        }
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    out.queue(SetAttribute(if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    }))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

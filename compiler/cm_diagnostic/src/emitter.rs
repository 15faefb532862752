//! Terminal output for pattern diagnostics.
//!
//! Patterns are short one-liners, so instead of file/line locations the
//! emitter echoes the pattern text and underlines each labeled span:
//!
//! ```text
//! error [E1003]: unclosed `[`
//!   | [a, b
//!   |      ^ expected `,` or `]`
//! ```

use std::io::{self, Write};

use cm_ir::Span;

use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics with the pattern text they point into.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Emit one diagnostic. `source` is the pattern text its spans index.
    pub fn emit(&mut self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        self.write_colored("error", colors::ERROR)?;
        writeln!(self.writer, " [{}]: {}", diagnostic.code, diagnostic.message)?;

        for label in &diagnostic.labels {
            self.emit_label(label, source)?;
        }

        for note in &diagnostic.notes {
            write!(self.writer, "  = ")?;
            self.write_colored("note", colors::NOTE)?;
            writeln!(self.writer, ": {note}")?;
        }
        for suggestion in &diagnostic.suggestions {
            write!(self.writer, "  = ")?;
            self.write_colored("help", colors::HELP)?;
            writeln!(self.writer, ": {suggestion}")?;
        }
        Ok(())
    }

    fn emit_label(&mut self, label: &Label, source: &str) -> io::Result<()> {
        let (line, column, width) = locate(source, label.span);
        writeln!(self.writer, "  | {line}")?;

        let marker = if label.is_primary { "^" } else { "-" };
        let underline = marker.repeat(width);
        write!(self.writer, "  | {:column$}", "")?;
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&underline, color)?;
        if label.message.is_empty() {
            writeln!(self.writer)
        } else {
            writeln!(self.writer, " {}", label.message)
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }
}

/// Find the line holding `span.start`, the display column of the span in
/// that line, and the underline width (at least one column).
///
/// Out-of-range or non-boundary offsets are clamped.
fn locate(source: &str, span: Span) -> (&str, usize, usize) {
    let mut start = (span.start as usize).min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let line = &source[line_start..line_end];

    let column = source[line_start..start].chars().count();
    let end = (span.end as usize).clamp(start, line_end);
    let width = source
        .get(start..end)
        .map_or(0, |text| text.chars().count())
        .max(1);
    (line, column, width)
}

/// Render a diagnostic to a plain (uncolored) string.
pub fn render(diagnostic: &Diagnostic, source: &str) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    // Writing into a Vec<u8> cannot fail.
    let _ = emitter.emit(diagnostic, source);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

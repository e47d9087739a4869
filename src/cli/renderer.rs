//! Command output
//!
//! Commands never print directly; everything goes through a [`Renderer`] so
//! output can be captured and examined in tests.

use std::io::{self, Write};

use colored::Colorize;

/// Sink for human-readable command output.
pub trait Renderer {
    /// Top-level heading.
    fn title(&mut self, text: &str);

    /// Section heading.
    fn subhead(&mut self, text: &str);

    /// Single line of plain text.
    fn text(&mut self, text: &str);

    /// Empty line.
    fn newline(&mut self);

    /// Two-column table; rows keep their given order.
    fn table(&mut self, rows: &[(String, String)]);

    /// Error message.
    fn error(&mut self, message: &str);

    /// Success status.
    fn success(&mut self, message: &str);

    /// Warning message.
    fn warning(&mut self, message: &str);
}

/// Renders to a pair of writers (stdout/stderr by default).
///
/// Errors and warnings go to `err`, everything else to `out`.
/// Write failures are ignored: there is nowhere left to report them.
pub struct TerminalRenderer<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
}

impl TerminalRenderer<io::Stdout, io::Stderr> {
    /// Renderer attached to the process's stdout and stderr.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> TerminalRenderer<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Consume the renderer, returning its writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn heading(&mut self, text: &str, underline: char) {
        let rule: String = std::iter::repeat(underline)
            .take(text.chars().count())
            .collect();
        if self.color {
            let _ = writeln!(self.out, "{}", text.bold());
            let _ = writeln!(self.out, "{}", rule.dimmed());
        } else {
            let _ = writeln!(self.out, "{text}");
            let _ = writeln!(self.out, "{rule}");
        }
    }
}

impl<O: Write, E: Write> Renderer for TerminalRenderer<O, E> {
    fn title(&mut self, text: &str) {
        self.heading(text, '=');
    }

    fn subhead(&mut self, text: &str) {
        self.heading(text, '-');
    }

    fn text(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn newline(&mut self) {
        let _ = writeln!(self.out);
    }

    fn table(&mut self, rows: &[(String, String)]) {
        let width = rows
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);

        for (key, value) in rows {
            let padded = format!("{key:<width$}");
            if self.color {
                let _ = writeln!(self.out, "  {}  {}", padded.cyan(), value);
            } else {
                let _ = writeln!(self.out, "  {padded}  {value}");
            }
        }
        let _ = writeln!(self.out);
    }

    fn error(&mut self, message: &str) {
        if self.color {
            let _ = writeln!(self.err, "{}: {}", "error".red().bold(), message);
        } else {
            let _ = writeln!(self.err, "error: {message}");
        }
    }

    fn success(&mut self, message: &str) {
        if self.color {
            let _ = writeln!(self.out, "{} {}", "✓".green(), message);
        } else {
            let _ = writeln!(self.out, "✓ {message}");
        }
    }

    fn warning(&mut self, message: &str) {
        if self.color {
            let _ = writeln!(self.err, "{}: {}", "Warning".yellow(), message);
        } else {
            let _ = writeln!(self.err, "Warning: {message}");
        }
    }
}

/// One call made against a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Title(String),
    Subhead(String),
    Text(String),
    Newline,
    Table(Vec<(String, String)>),
    Error(String),
    Success(String),
    Warning(String),
}

/// Renderer that records every call, for assertions in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All error messages, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All titles, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Title(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All plain text lines, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether anything was rendered at all.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn title(&mut self, text: &str) {
        self.events.push(RenderEvent::Title(text.to_string()));
    }

    fn subhead(&mut self, text: &str) {
        self.events.push(RenderEvent::Subhead(text.to_string()));
    }

    fn text(&mut self, text: &str) {
        self.events.push(RenderEvent::Text(text.to_string()));
    }

    fn newline(&mut self) {
        self.events.push(RenderEvent::Newline);
    }

    fn table(&mut self, rows: &[(String, String)]) {
        self.events.push(RenderEvent::Table(rows.to_vec()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(RenderEvent::Error(message.to_string()));
    }

    fn success(&mut self, message: &str) {
        self.events.push(RenderEvent::Success(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.events.push(RenderEvent::Warning(message.to_string()));
    }
}

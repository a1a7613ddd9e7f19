//! Text rendering of frames and error trails
//!
//! The plain renderings are a fixed contract:
//!
//! ```text
//! <file>:<line> | <function>() | [code=<code>] <message>
//!     <file>:<line> | <function>() | <message>
//! ```
//!
//! The `[code=...] ` segment is left out when the code is 0.

use ansi_term::Colour::Yellow;
use ansi_term::Style;

use crate::core::ContextError;
use crate::models::Frame;

/// Indentation of child lines in the plain detailed rendering
pub const DEFAULT_INDENT: usize = 4;

/// Render one frame on a single line
pub fn render_summary(frame: &Frame) -> String {
    let mut output = format!("{}:{} | {}() | ", frame.file(), frame.line(), frame.function());
    if frame.has_code() {
        output.push_str(&format!("[code={}] ", frame.code()));
    }
    output.push_str(frame.message());
    output
}

/// Render the base frame followed by one indented line per child frame
pub fn render_detailed(err: &ContextError) -> String {
    TextFormatter::default().format(err)
}

/// Render one frame with ANSI colors; the base frame's message is emphasized
pub fn render_summary_colored(frame: &Frame) -> String {
    let location = format!("{}:{} | {}() |", frame.file(), frame.line(), frame.function());
    let mut output = format!("{} ", Style::new().dimmed().paint(location));
    if frame.has_code() {
        output.push_str(&format!("{} ", Yellow.paint(format!("[code={}]", frame.code()))));
    }
    if frame.depth() == 0 {
        output.push_str(&Style::new().bold().paint(frame.message()).to_string());
    } else {
        output.push_str(frame.message());
    }
    output
}

/// Trait for error report formatters
pub trait Formatter {
    /// Format an error into report text
    fn format(&self, err: &ContextError) -> String;
}

/// Formatter for the full trail
#[derive(Debug, Clone)]
pub struct TextFormatter {
    pub indent: usize,
    pub use_colors: bool,
    pub max_child_frames: Option<usize>,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(indent: usize, use_colors: bool, max_child_frames: Option<usize>) -> Self {
        Self {
            indent,
            use_colors,
            max_child_frames,
        }
    }

    fn line(&self, frame: &Frame) -> String {
        if self.use_colors {
            render_summary_colored(frame)
        } else {
            render_summary(frame)
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT, false, None)
    }
}

impl Formatter for TextFormatter {
    fn format(&self, err: &ContextError) -> String {
        let padding = " ".repeat(self.indent);
        let children = err.child_frames();
        let shown = self
            .max_child_frames
            .map_or(children.len(), |max| max.min(children.len()));

        let mut output = self.line(err.base_frame());
        for frame in &children[..shown] {
            output.push('\n');
            output.push_str(&padding);
            output.push_str(&self.line(frame));
        }

        let hidden = children.len() - shown;
        if hidden > 0 {
            let plural = if hidden == 1 { "" } else { "s" };
            let note = format!("... {} more frame{}", hidden, plural);
            output.push('\n');
            output.push_str(&padding);
            if self.use_colors {
                output.push_str(&Style::new().dimmed().paint(note).to_string());
            } else {
                output.push_str(&note);
            }
        }

        output
    }
}

/// Formatter for the base frame only
#[derive(Debug, Clone, Default)]
pub struct SummaryFormatter {
    pub use_colors: bool,
}

impl SummaryFormatter {
    /// Create a new summary formatter
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Formatter for SummaryFormatter {
    fn format(&self, err: &ContextError) -> String {
        if self.use_colors {
            render_summary_colored(err.base_frame())
        } else {
            err.summary().to_string()
        }
    }
}

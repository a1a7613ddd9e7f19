//! Rendering and writing of error reports

mod formatters;
mod writers;

pub use self::formatters::{
    render_detailed, render_summary, render_summary_colored, Formatter, SummaryFormatter,
    TextFormatter, DEFAULT_INDENT,
};
pub use self::writers::{create_writer, FileWriter, ReportWriter, StderrWriter};

use crate::core::ContextError;
use crate::error::Result;
use crate::models::config::RenderSettings;

/// Create the detailed formatter described by `settings`
pub fn create_formatter(settings: &RenderSettings) -> Box<dyn Formatter> {
    Box::new(TextFormatter::new(
        settings.indent,
        settings.use_colors,
        settings.max_child_frames,
    ))
}

/// Render `err` with `settings` and hand it to `writer`
pub fn write_report(
    err: &ContextError,
    settings: &RenderSettings,
    writer: &dyn ReportWriter,
) -> Result<()> {
    let report = create_formatter(settings).format(err);
    writer.write(&report)
}

//! Error rendering using ariadne
//!
//! Script errors are drawn against the script source with the offending
//! command highlighted. Errors without a location print as a single line.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Falls back to the error's own filename, then "<script>".
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config
        .filename
        .or_else(|| error.filename())
        .unwrap_or("<script>");

    match (error, error.diagnostic()) {
        (Error::Script { source, .. }, Some(diagnostic)) => {
            render_diagnostic(source, &diagnostic, writer, config, filename)
        }
        _ => writeln!(writer, "Error: {}", error),
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    config: &RenderConfig,
    filename: &str,
) -> std::io::Result<()> {
    let Some(span) = &diag.span else {
        // Nothing to point at: print the message and any hints.
        match &diag.code {
            Some(code) => writeln!(writer, "[{}] Error: {}", code, diag.message)?,
            None => writeln!(writer, "Error: {}", diag.message)?,
        }
        for help_msg in &diag.help {
            writeln!(writer, "Help: {}", help_msg)?;
        }
        return Ok(());
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    // Spans are byte offsets into the script.
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (filename, span.0.clone()))
        .with_message(&diag.message)
        .with_config(ariadne_config);

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((filename, span.0.clone()))
            .with_message(&diag.label)
            .with_color(color),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

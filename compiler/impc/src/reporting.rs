//! Render session errors as annotated source reports.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::SessionError;

/// How reports are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { color: true }
    }
}

/// Write a report for `error` in `source` (named `path`) to `out`.
pub fn write_report(
    out: impl Write,
    path: &str,
    source: &str,
    error: &SessionError,
    options: ReportOptions,
) -> io::Result<()> {
    let range = error.span().map(|span| clamp(span.to_range(), source.len()));
    let offset = range.as_ref().map_or(0, |r| r.start);

    let mut report = Report::build(ReportKind::Error, path, offset)
        .with_config(Config::default().with_color(options.color))
        .with_code(error.code())
        .with_message(error.to_string());
    if let Some(range) = range {
        report = report.with_label(
            Label::new((path, range))
                .with_message(error.title())
                .with_color(Color::Red),
        );
    }
    if let Some(hint) = error.hint() {
        report = report.with_help(hint);
    }
    report.finish().write((path, Source::from(source)), out)
}

/// Print a report to stderr. Failures to write are ignored.
pub fn eprint_report(path: &str, source: &str, error: &SessionError, options: ReportOptions) {
    let _ = write_report(io::stderr(), path, source, error, options);
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    range.start.min(end)..end
}

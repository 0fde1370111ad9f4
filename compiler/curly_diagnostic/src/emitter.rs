//! Render diagnostics against source text.
//!
//! Snippets and labels are drawn by `ariadne`; color is opt-in so that
//! captured output stays plain text.

use std::io::{self, Write};

use ariadne::{Config, Label as SnippetLabel, Report, ReportKind, Source};

use crate::span_utils::{byte_to_char_offset, LineOffsetTable};
use crate::{Diagnostic, Severity};

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a terminal.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics for one source file.
pub struct Emitter<'a> {
    file_name: &'a str,
    source: &'a str,
    colors: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(file_name: &'a str, source: &'a str, colors: bool) -> Self {
        Emitter {
            file_name,
            source,
            colors,
        }
    }

    /// Render `diag` as an annotated source snippet.
    pub fn emit(&self, diag: &Diagnostic, writer: &mut impl Write) -> io::Result<()> {
        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Note => ReportKind::Advice,
        };
        let offset = diag
            .primary_span()
            .map_or(0, |span| self.char_offset(span.start as usize));

        let mut report = Report::build(kind, self.file_name, offset)
            .with_code(diag.code)
            .with_message(&diag.message)
            .with_config(Config::default().with_color(self.colors));

        for label in &diag.labels {
            let start = self.char_offset(label.span.start as usize);
            let end = self.char_offset(label.span.end as usize).max(start);
            report = report.with_label(
                SnippetLabel::new((self.file_name, start..end)).with_message(&label.message),
            );
        }

        if !diag.notes.is_empty() {
            report = report.with_note(diag.notes.join("\n"));
        }

        report
            .finish()
            .write((self.file_name, Source::from(self.source)), writer)
    }

    /// One-line summary: `file:line:col: error[E6004]: message`.
    pub fn summary(&self, diag: &Diagnostic) -> String {
        match diag.primary_span() {
            Some(span) => {
                let table = LineOffsetTable::build(self.source);
                let (line, col) = table.offset_to_line_col(self.source, span.start);
                format!("{}:{line}:{col}: {diag}", self.file_name)
            }
            None => format!("{}: {diag}", self.file_name),
        }
    }

    /// Emit every diagnostic, then a count line when there is more than one.
    pub fn emit_all(&self, diags: &[Diagnostic], writer: &mut impl Write) -> io::Result<()> {
        for diag in diags {
            self.emit(diag, writer)?;
        }
        if diags.len() > 1 {
            writeln!(writer, "{} errors reported", diags.len())?;
        }
        Ok(())
    }

    fn char_offset(&self, byte_offset: usize) -> usize {
        byte_to_char_offset(self.source, byte_offset)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

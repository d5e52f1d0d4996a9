//! Provides the functions related to logging/printing messages to the console.

use std::fmt::{Display, Formatter};

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::{Location, Span};

pub mod formatting;

/// How serious a console message is; decides the colored header printed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// A one line message for the user, printed as a colored `[severity]:` header followed by the
/// message in bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Gets the number of decimal digits of the line number; `0` has none since no line is numbered
/// zero.
fn get_digit(number: usize) -> usize { number.checked_ilog10().map_or(0, |log| log as usize + 1) }

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// The lines covered by the span are printed with the span underlined, surrounded by the line
/// before and the line after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// The location right after the last character of the source file.
    fn end_of_source(&self) -> Location {
        let source_file = self.span.source_file();
        let line = source_file.line_number();
        let column = source_file
            .get_line(line)
            .map_or(0, |line| line.chars().count())
            + 1;

        Location { line, column }
    }

    /// Writes the blank gutter followed by the given separator.
    fn write_empty_gutter(f: &mut Formatter<'_>, width: usize, separator: &str) -> std::fmt::Result {
        write!(f, "{:width$} ", "", width = width)?;
        write!(f, "{}", Style::Bold.with(Color::Cyan.with(separator)))
    }

    /// Writes the gutter holding the given line number.
    fn write_line_gutter(f: &mut Formatter<'_>, width: usize, line: usize) -> std::fmt::Result {
        write!(
            f,
            "{}{:pad$}{} ",
            Style::Bold.with(Color::Cyan.with(line)),
            "",
            Style::Bold.with(Color::Cyan.with("┃")),
            pad = width - get_digit(line) + 1
        )
    }

    /// Writes an unhighlighted line of the source file, if it exists.
    fn write_context_line(&self, f: &mut Formatter<'_>, width: usize, line: usize) -> std::fmt::Result {
        let Some(text) = self.span.source_file().get_line(line) else {
            return Ok(());
        };

        Self::write_line_gutter(f, width, line)?;

        for char in text.chars() {
            // if the char is tab, print 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if char != '\n' && char != '\r' {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let start_location = self
            .span
            .start_location()
            .unwrap_or_else(|| self.end_of_source());
        let end_location = self.span.end_location();

        let start_line = start_location.line;
        let end_line = end_location.map_or_else(
            || self.span.source_file().line_number(),
            |end_location| end_location.line,
        );
        let end_column = end_location.map_or(usize::MAX, |end_location| end_location.column);
        let is_multiline = start_line != end_line;

        // when printing the source code, show the line before the span and the line after the span
        let width = get_digit(end_line + 1);

        // prints the source location
        writeln!(
            f,
            "{:width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().name(),
            start_location.line,
            start_location.column,
            width = width
        )?;

        Self::write_empty_gutter(f, width, "┃")?;
        writeln!(f)?;

        self.write_context_line(f, width, start_line.saturating_sub(1))?;

        for line_number in start_line..=end_line {
            let Some(text) = self.span.source_file().get_line(line_number) else {
                break;
            };

            Self::write_line_gutter(f, width, line_number)?;

            for (index, char) in text.chars().enumerate() {
                let column = index + 1;

                // if the char is tab, print 4 spaces
                if char == '\t' {
                    write!(f, "    ")?;
                    continue;
                } else if char == '\n' || char == '\r' {
                    continue;
                }

                let is_in_span = if is_multiline {
                    (line_number == start_line && column >= start_location.column)
                        || (line_number == end_line && column < end_column)
                        || (line_number > start_line && line_number < end_line)
                } else {
                    column >= start_location.column && column < end_column
                };

                if is_in_span {
                    write!(
                        f,
                        "{}",
                        Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                    )?;
                } else {
                    write!(f, "{char}")?;
                }
            }

            writeln!(f)?;
        }

        if let (Some(message), false) = (&self.help_display, is_multiline) {
            Self::write_empty_gutter(f, width, "┃")?;
            write!(f, " ")?;

            // prints the whitespace until the start's column
            if let Some(text) = self.span.source_file().get_line(start_line) {
                for char in text.chars().take(start_location.column.saturating_sub(1)) {
                    write!(f, "{}", if char == '\t' { "    " } else { " " })?;
                }
            }

            writeln!(f, "{}: {message}", Style::Bold.with("help"))?;
        }

        self.write_context_line(f, width, end_line.saturating_add(1))?;

        Self::write_empty_gutter(f, width, "┃")?;
        writeln!(f)?;

        if let (Some(message), true) = (&self.help_display, is_multiline) {
            Self::write_empty_gutter(f, width, "=")?;
            writeln!(f, " {}: {message}", Style::Bold.with("help"))?;
        }

        Ok(())
    }
}

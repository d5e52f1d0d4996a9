//! Contains all kinds of lexical errors that can occur while scanning the source code.
//!
//! None of them stop the scan. They are handed to a [`Handler`] as they are found and the scanner
//! resumes with the next character.

use std::fmt::Display;

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use lox_base::{
    diagnostic::Handler,
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{SourceElement, Span},
};

/// The message reported for a character that cannot start any token.
pub const UNEXPECTED_CHARACTER: &str = "Unexpected character.";

/// The message reported when the source ends inside a string literal or a block comment.
pub const UNTERMINATED_STRING: &str = "Unterminated string.";

fn write_report(
    f: &mut std::fmt::Formatter<'_>,
    line: usize,
    message: &str,
    span: &Span,
    help: &str,
) -> std::fmt::Result {
    write!(
        f,
        "{}\n{}",
        Message::new(Severity::Error, format!("[line {line}] Error: {message}")),
        SourceCodeDisplay::new(span, Some(help))
    )
}

/// The source code contains a character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The span of the offending character.
    pub span: Span,

    /// The offending character.
    pub character: char,

    /// The line the character is on.
    pub line: usize,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_report(
            f,
            self.line,
            UNEXPECTED_CHARACTER,
            &self.span,
            &format!("`{}` cannot start a token", self.character.escape_debug()),
        )
    }
}

/// The source code ends before the closing `"` of a string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span from the opening `"` to the end of the source code.
    pub span: Span,

    /// The line reached when the source code ran out.
    pub line: usize,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_report(
            f,
            self.line,
            UNTERMINATED_STRING,
            &self.span,
            "this string is never closed by a `\"`",
        )
    }
}

/// The source code contains an unclosed `/*` comment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedBlockComment {
    /// The span of the unclosed `/*` that starts the comment.
    pub span: Span,

    /// The line reached when the source code ran out.
    pub line: usize,
}

impl Display for UnterminatedBlockComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_report(
            f,
            self.line,
            UNTERMINATED_STRING,
            &self.span,
            "this comment is never closed by a `*/`",
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedCharacter(UnexpectedCharacter),
    UnterminatedString(UnterminatedString),
    UnterminatedBlockComment(UnterminatedBlockComment),
}

impl Error {
    /// Gets the line (starting at 1) the error is reported at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter(err) => err.line,
            Self::UnterminatedString(err) => err.line,
            Self::UnterminatedBlockComment(err) => err.line,
        }
    }

    /// Gets the human-readable message of the error, without any location information.
    ///
    /// Unterminated block comments share the message of unterminated strings.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter(..) => UNEXPECTED_CHARACTER,
            Self::UnterminatedString(..) | Self::UnterminatedBlockComment(..) => {
                UNTERMINATED_STRING
            }
        }
    }
}

impl SourceElement for Error {
    fn span(&self) -> Span {
        match self {
            Self::UnexpectedCharacter(err) => err.span.clone(),
            Self::UnterminatedString(err) => err.span.clone(),
            Self::UnterminatedBlockComment(err) => err.span.clone(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnterminatedBlockComment(err) => write!(f, "{err}"),
        }
    }
}

/// A struct that implements [`Handler`] by forwarding the line and message of every lexical error
/// to a plain callback.
///
/// ```
/// use std::cell::RefCell;
///
/// use lox_base::source_file::SourceFile;
/// use lox_lexical::{error::LineReporter, token_stream::TokenStream};
///
/// let reports = RefCell::new(Vec::new());
/// let reporter = LineReporter::new(|line: usize, message: &str| {
///     reports.borrow_mut().push(format!("[line {line}] Error: {message}"));
/// });
///
/// let _ = TokenStream::tokenize(&SourceFile::new("<doc>", "print 1;\n#"), &reporter);
///
/// assert_eq!(reports.into_inner(), vec!["[line 2] Error: Unexpected character."]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct LineReporter<F> {
    report: F,
}

impl<F: Fn(usize, &str)> Handler<Error> for LineReporter<F> {
    fn receive(&self, error: Error) { (self.report)(error.line(), error.message()); }
}

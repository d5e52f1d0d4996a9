//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use lox_base::source_file::{SourceElement, Span};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};
use thiserror::Error;

/// Is an enumeration representing the reserved words of the Lox programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }

        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
        }
    }
}

/// Is an enumeration of every category a [`Token`] can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // one or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // literals
    Identifier,
    String,
    Number,

    Keyword(KeywordKind),

    /// Marks the end of the source code; always the last token of a
    /// [`TokenStream`](crate::token_stream::TokenStream).
    Eof,
}

impl From<KeywordKind> for TokenKind {
    fn from(keyword: KeywordKind) -> Self { Self::Keyword(keyword) }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(&keyword.as_str().to_ascii_uppercase()),
            kind => f.write_str(kind.as_ref()),
        }
    }
}

/// Is the value decoded from a literal token.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner)]
pub enum Literal {
    /// The value of a numeric literal; every number is a double precision float.
    Number(f64),

    /// The body of a string literal, without the surrounding quotes.
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // `Debug` keeps the fractional part of integral values, e.g. `1.0`
            Self::Number(number) => write!(f, "{number:?}"),
            Self::String(string) => f.write_str(string),
        }
    }
}

/// Represents a classified lexeme of the source code.
///
/// A token is created once by the [`Scanner`](crate::scanner::Scanner) and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the category of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the span of the source code that makes up the token.
    #[get = "pub"]
    span: Span,

    /// Gets the decoded value of the token; only numbers and strings carry one.
    #[get = "pub"]
    literal: Option<Literal>,

    /// Gets the line (starting at 1) on which the token begins.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Gets the exact source text that produced this token.
    ///
    /// The lexeme of the [`TokenKind::Eof`] token is empty.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme())?;

        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests;

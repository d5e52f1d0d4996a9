//! Contains the [`TokenStream`] struct, the final output of the lexical analysis phase.

use std::{fmt::Display, ops::Index, sync::Arc};

use derive_more::Deref;
use lox_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{
    error,
    scanner::Scanner,
    token::{Token, TokenKind},
};

/// Is the ordered list of tokens scanned from a source file.
///
/// The stream always holds at least one token: the last one is the only [`TokenKind::Eof`] token
/// and its line is the line the scanner reached at the end of the source code.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function runs a fresh [`Scanner`] over the whole source file. Lexical errors are
    /// reported to the `handler`; the malformed lexemes are simply missing from the stream.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        Scanner::new(source_file).scan_tokens(handler)
    }

    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|token| token.kind() == TokenKind::Eof),
            "a token stream must end with the end of file token"
        );

        Self { tokens }
    }

    /// Gets the trailing [`TokenKind::Eof`] token.
    #[must_use]
    pub fn eof(&self) -> &Token {
        self.tokens
            .last()
            .expect("a token stream always ends with the end of file token")
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

impl IntoIterator for TokenStream {
    type IntoIter = std::vec::IntoIter<Token>;
    type Item = Token;

    fn into_iter(self) -> Self::IntoIter { self.tokens.into_iter() }
}

impl<'a> IntoIterator for &'a TokenStream {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter { self.tokens.iter() }
}

/// Prints one token per line.
impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }

        Ok(())
    }
}

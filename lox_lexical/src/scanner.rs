//! Contains the [`Scanner`], the state machine that turns source code into tokens.

use std::{str::FromStr, sync::Arc};

use lox_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, SourceFile, Span},
};

use crate::{
    error::{self, UnexpectedCharacter, UnterminatedBlockComment, UnterminatedString},
    token::{KeywordKind, Literal, Token, TokenKind},
    token_stream::TokenStream,
};

/// Checks if the given character is a valid first character of an identifier.
fn is_first_identifier_character(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Checks if the given character is a valid character of an identifier.
fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// A single pass scanner over one [`SourceFile`].
///
/// The scanner keeps three cursors: `start` is the first byte of the lexeme being recognized,
/// `current` is the first byte not consumed yet and `line` counts the new lines seen so far,
/// starting at 1. It is consumed by [`Scanner::scan_tokens`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    iter: source_file::Iterator<'a>,
    start: ByteIndex,
    current: ByteIndex,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the beginning of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iter: source_file.iter(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source file into a [`TokenStream`].
    ///
    /// Malformed input never stops the scan: every lexical error is handed to the `handler` and
    /// scanning resumes right after it. The returned stream always ends with exactly one
    /// [`TokenKind::Eof`] token.
    #[must_use]
    pub fn scan_tokens(mut self, handler: &dyn Handler<error::Error>) -> TokenStream {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(handler);
        }

        self.start = self.current;
        self.add_token(TokenKind::Eof);

        TokenStream::new(self.tokens)
    }

    fn scan_token(&mut self, handler: &dyn Handler<error::Error>) {
        let Some(character) = self.advance() else {
            return;
        };

        match character {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.match_character('/') {
                    self.line_comment();
                } else if self.match_character('*') {
                    self.block_comment(handler);
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,

            '"' => self.string(handler),
            character if character.is_ascii_digit() => self.number(),
            character if is_first_identifier_character(character) => self.identifier(),

            character => handler.receive(
                UnexpectedCharacter {
                    span: self.lexeme_span(),
                    character,
                    line: self.line,
                }
                .into(),
            ),
        }
    }

    fn is_at_end(&mut self) -> bool { self.iter.peek().is_none() }

    /// Consumes the next character.
    fn advance(&mut self) -> Option<char> {
        let (index, character) = self.iter.next()?;
        self.current = index + character.len_utf8();

        Some(character)
    }

    fn peek(&mut self) -> Option<char> { self.iter.peek().map(|(_, character)| character) }

    fn peek_next(&self) -> Option<char> { self.iter.peek_next().map(|(_, character)| character) }

    /// Consumes the next character only if it is the expected one.
    fn match_character(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters as long as the predicate holds.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Gets the span from `start` to `current`.
    fn lexeme_span(&self) -> Span {
        Span::new(self.iter.source_file().clone(), self.start, self.current)
            .expect("the cursors always sit on character boundaries")
    }

    fn add_token(&mut self, kind: TokenKind) { self.add_literal_token(kind, None, self.line); }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>, line: usize) {
        let token = Token::new(kind, self.lexeme_span(), literal, line);
        self.tokens.push(token);
    }

    /// Adds the two character `double` token if the next character is `second`, otherwise the one
    /// character `single` token.
    fn add_either(&mut self, second: char, double: TokenKind, single: TokenKind) {
        let kind = if self.match_character(second) {
            double
        } else {
            single
        };

        self.add_token(kind);
    }

    /// Skips the rest of a `//` comment. The new line, if any, is left for the main loop.
    fn line_comment(&mut self) { self.walk(|character| character != '\n'); }

    /// Skips a `/*` comment up to the first `*/`; comments do not nest.
    fn block_comment(&mut self, handler: &dyn Handler<error::Error>) {
        loop {
            match self.peek() {
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return;
                }
                Some(character) => {
                    if character == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
                None => break,
            }
        }

        handler.receive(
            UnterminatedBlockComment {
                span: Span::new(self.iter.source_file().clone(), self.start, self.start + 2)
                    .expect("`/*` is two bytes long"),
                line: self.line,
            }
            .into(),
        );
    }

    fn string(&mut self, handler: &dyn Handler<error::Error>) {
        let line = self.line;

        while let Some(character) = self.peek().filter(|character| *character != '"') {
            if character == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            handler.receive(
                UnterminatedString {
                    span: self.lexeme_span(),
                    line: self.line,
                }
                .into(),
            );
            return;
        }

        // the closing quote
        self.advance();

        let lexeme = self.lexeme_span();
        let value = lexeme.str()[1..lexeme.str().len() - 1].to_string();

        self.add_literal_token(TokenKind::String, Some(Literal::String(value)), line);
    }

    fn number(&mut self) {
        self.walk(|character| character.is_ascii_digit());

        // the dot is only part of the number if a digit follows it, so `1.foo` stays `1` `.` `foo`
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.walk(|character| character.is_ascii_digit());
        }

        let value = f64::from_str(self.lexeme_span().str())
            .expect("digits with an optional fractional part always parse");

        self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)), self.line);
    }

    fn identifier(&mut self) {
        self.walk(is_identifier_character);

        let kind = KeywordKind::from_str(self.lexeme_span().str())
            .map_or(TokenKind::Identifier, TokenKind::Keyword);

        self.add_token(kind);
    }
}

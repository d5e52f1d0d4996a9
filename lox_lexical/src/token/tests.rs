use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use lazy_static::lazy_static;
use lox_base::source_file::SourceFile;
use lox_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert_eq, prop_oneof,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};
use strum::IntoEnumIterator;

use super::{KeywordKind, Literal, TokenKind};

/// Represents an input for an identifier token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_][A-Za-z0-9_]*"
            .prop_filter_map(
                "filter out identifiers that can be used as a keyword",
                |x| {
                    if KeywordKind::from_str(x.as_ref()).is_ok() {
                        None
                    } else {
                        Some(Self { string: x })
                    }
                },
            )
            .boxed()
    }
}

impl Input<&super::Token> for &Identifier {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::Identifier);
        prop_assert_eq!(self.string.as_str(), output.lexeme());
        prop_assert_eq!(output.literal(), &None);
        Ok(())
    }
}

/// Represents a valid keyword input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// The kind of keyword.
    pub keyword: KeywordKind,
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword.as_str())
    }
}

impl Arbitrary for Keyword {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref KEYWORDS: Vec<KeywordKind> = KeywordKind::iter().collect();
        }

        proptest::sample::select(KEYWORDS.as_slice())
            .prop_map(|kind| Self { keyword: kind })
            .boxed()
    }
}

impl Input<&super::Token> for &Keyword {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::Keyword(self.keyword));
        prop_assert_eq!(output.lexeme(), self.keyword.as_str());
        Ok(())
    }
}

/// Represents an input for a number literal token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number {
    /// The valid numeric literal value string.
    pub value: String,
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.value) }
}

impl Arbitrary for Number {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[0-9]{1,12}(\\.[0-9]{1,6})?"
            .prop_map(|value| Self { value })
            .boxed()
    }
}

impl Input<&super::Token> for &Number {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        let expected: f64 = self
            .value
            .parse()
            .map_err(|error| TestCaseError::fail(format!("{error}")))?;

        prop_assert_eq!(output.kind(), TokenKind::Number);
        prop_assert_eq!(output.lexeme(), self.value.as_str());
        prop_assert_eq!(output.literal(), &Some(Literal::Number(expected)));
        Ok(())
    }
}

/// Represents an input for a string literal token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// The content of the string literal (without the quotes).
    pub body: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        f.write_str(&self.body)?;
        f.write_char('"')
    }
}

impl Arbitrary for StringLiteral {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[^\"]*".prop_map(|body| Self { body }).boxed()
    }
}

impl Input<&super::Token> for &StringLiteral {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), TokenKind::String);
        prop_assert_eq!(output.lexeme(), self.to_string());
        prop_assert_eq!(output.literal(), &Some(Literal::String(self.body.clone())));
        Ok(())
    }
}

/// Every punctuation and operator lexeme along with the kind it scans into.
pub const PUNCTUATIONS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    ("-", TokenKind::Minus),
    ("+", TokenKind::Plus),
    (";", TokenKind::Semicolon),
    ("/", TokenKind::Slash),
    ("*", TokenKind::Star),
    ("!", TokenKind::Bang),
    ("!=", TokenKind::BangEqual),
    ("=", TokenKind::Equal),
    ("==", TokenKind::EqualEqual),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEqual),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEqual),
];

/// Represents an input for a punctuation or operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// The lexeme of the punctuation.
    pub lexeme: &'static str,

    /// The kind the lexeme scans into.
    pub kind: TokenKind,
}

impl Arbitrary for Punctuation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(PUNCTUATIONS)
            .prop_map(|(lexeme, kind)| Self { lexeme, kind })
            .boxed()
    }
}

impl Display for Punctuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.lexeme) }
}

impl Input<&super::Token> for &Punctuation {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        prop_assert_eq!(output.kind(), self.kind);
        prop_assert_eq!(output.lexeme(), self.lexeme);
        prop_assert_eq!(output.literal(), &None);
        Ok(())
    }
}

/// Represents an input for a `/* */` comment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockComment {
    /// The content of the block comment (without the `/*` and `*/`).
    pub comment_body: String,
}

impl Arbitrary for BlockComment {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[^\r]*"
            .prop_filter_map("must not contain */", |x| {
                if x.contains("*/") {
                    None
                } else {
                    Some(Self { comment_body: x })
                }
            })
            .boxed()
    }
}

impl Display for BlockComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("/*")?;
        f.write_str(&self.comment_body)?;
        f.write_str("*/")
    }
}

/// Represents an input for a `//` comment, including its terminating new line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineComment {
    /// The content of the line comment (without the `//` and new line terminator).
    pub comment_body: String,
}

impl Arbitrary for LineComment {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[^\\n]*"
            .prop_map(|body| Self { comment_body: body })
            .boxed()
    }
}

impl Display for LineComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("//")?;
        f.write_str(&self.comment_body)?;
        f.write_char('\n')
    }
}

/// Represents an input for either kind of comment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Comment {
    Line(LineComment),
    Block(BlockComment),
}

impl Arbitrary for Comment {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            LineComment::arbitrary().prop_map(Comment::Line),
            BlockComment::arbitrary().prop_map(Comment::Block)
        ]
        .boxed()
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(x) => x.fmt(f),
            Self::Block(x) => x.fmt(f),
        }
    }
}

/// Represents an input of characters the scanner skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum WhiteSpaces {
    Spaces(u8),
    Tabs(u8),
    CarriageReturns(u8),
    NewLines(u8),
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1u8..4)
            .prop_flat_map(|x| {
                prop_oneof![
                    Just(Self::Spaces(x)),
                    Just(Self::Tabs(x)),
                    Just(Self::CarriageReturns(x)),
                    Just(Self::NewLines(x))
                ]
            })
            .boxed()
    }
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (character, count) = match *self {
            Self::Spaces(x) => (' ', x),
            Self::Tabs(x) => ('\t', x),
            Self::CarriageReturns(x) => ('\r', x),
            Self::NewLines(x) => ('\n', x),
        };

        for _ in 0..count {
            f.write_char(character)?;
        }

        Ok(())
    }
}

/// Represents an input for any token that ends up in the token stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Keyword(Keyword),
    Number(Number),
    String(StringLiteral),
    Punctuation(Punctuation),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            Keyword::arbitrary().prop_map(Self::Keyword),
            Number::arbitrary().prop_map(Self::Number),
            StringLiteral::arbitrary().prop_map(Self::String),
            Punctuation::arbitrary().prop_map(Self::Punctuation)
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(x) => Display::fmt(x, f),
            Self::Keyword(x) => Display::fmt(x, f),
            Self::Number(x) => Display::fmt(x, f),
            Self::String(x) => Display::fmt(x, f),
            Self::Punctuation(x) => Display::fmt(x, f),
        }
    }
}

impl Input<&super::Token> for &Token {
    fn assert(self, output: &super::Token) -> TestCaseResult {
        match self {
            Token::Identifier(i) => i.assert(output),
            Token::Keyword(i) => i.assert(output),
            Token::Number(i) => i.assert(output),
            Token::String(i) => i.assert(output),
            Token::Punctuation(i) => i.assert(output),
        }
    }
}

#[test]
fn keyword_table_round_trip() {
    for keyword in KeywordKind::iter() {
        assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
    }

    assert_eq!(KeywordKind::iter().count(), 16);
    assert!(KeywordKind::from_str("orchid").is_err());
    assert!(KeywordKind::from_str("Var").is_err());
    assert!(KeywordKind::from_str("").is_err());
}

#[test]
fn token_kind_display() {
    assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
    assert_eq!(TokenKind::GreaterEqual.to_string(), "GREATER_EQUAL");
    assert_eq!(TokenKind::String.to_string(), "STRING");
    assert_eq!(TokenKind::Keyword(KeywordKind::While).to_string(), "WHILE");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn token_display() {
    let source_file = SourceFile::new("test", "var x = 12;");
    let token_of = |kind, start, end, literal| {
        super::Token::new(
            kind,
            lox_base::source_file::Span::new(source_file.clone(), start, end).unwrap(),
            literal,
            1,
        )
    };

    assert_eq!(
        token_of(TokenKind::Keyword(KeywordKind::Var), 0, 3, None).to_string(),
        "VAR var nil"
    );
    assert_eq!(
        token_of(TokenKind::Number, 8, 10, Some(Literal::Number(12.0))).to_string(),
        "NUMBER 12 12.0"
    );
    assert_eq!(token_of(TokenKind::Eof, 11, 11, None).to_string(), "EOF  nil");
}

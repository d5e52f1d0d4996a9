//! Contains various kinds of definition for formatting ASCII color/style codes.

use std::fmt::Display;

/// Represents anything that maps to an ANSI escape sequence.
pub trait Ansi: Copy {
    /// Gets the escape sequence that turns this attribute on.
    fn code(self) -> &'static str;
}

/// Is a struct implementing [`Display`] that wraps a displayable object in an ANSI attribute and
/// resets the terminal afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<A, T> {
    /// The attribute applied to the displayable object.
    pub ansi: A,

    /// The displayable object.
    pub display: T,
}

impl<A: Ansi, T: Display> Display for Painted<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.ansi.code(), self.display)
    }
}

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<Self, T> {
        Painted {
            ansi: self,
            display,
        }
    }
}

impl Ansi for Style {
    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

/// Represents a color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<Self, T> {
        Painted {
            ansi: self,
            display,
        }
    }
}

impl Ansi for Color {
    fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1B[30m",
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Blue => "\x1B[34m",
            Self::Magenta => "\x1B[35m",
            Self::Cyan => "\x1B[36m",
            Self::White => "\x1B[37m",
        }
    }
}

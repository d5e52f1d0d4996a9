//! This crate implements the lexical analysis phase of the Lox toolchain. This phase is responsible
//! for scanning the source code into a sequence of classified tokens.
//!
//! The final output of this phase is a [`token_stream::TokenStream`], the list of tokens of a
//! source file terminated by an end of file token.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;

//! `glint_core` — the foundational tokenizer library for the Glint syntax
//! highlighter.
//!
//! # Crate layout
//!
//! - [`lexer`] — Line-oriented lexical tokenizer for JavaScript-like source
//!   (character classifiers, the per-line state machine, and the document
//!   driver).
//! - [`error`] — Error types for the fallible surfaces around the tokenizer.

/// Error types for the fallible surfaces around the tokenizer.
pub mod error;
/// Line-oriented lexical tokenizer for JavaScript-like source.
pub mod lexer;

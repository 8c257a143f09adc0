//! Line-oriented lexical tokenizer for JavaScript-like source.
//!
//! The tokenizer is split into three layers, leaves first:
//!
//! - [`classify`] — pure, stateless character-class matchers applied at a
//!   cursor position within one line.
//! - [`line`] — the per-line state machine: consumes one line plus the
//!   lexical state carried from the previous line and produces a gapless
//!   token tiling of the line plus the state to carry forward.
//! - [`document`] — splits a full source text into lines, threads the
//!   lexical state across them in order, and applies the language-tag
//!   bypass policy.
//!
//! Every character of the input is covered by a [`token::Token`];
//! concatenating a line's token texts reproduces the line exactly.

/// Pure character-class matchers (whitespace, number, identifier, operator,
/// punctuation).
pub mod classify;
/// Document driver: line splitting, state threading, language bypass.
pub mod document;
/// The per-line tokenizer state machine.
pub mod line;
/// Token, token-kind, and carried-state definitions.
pub mod token;

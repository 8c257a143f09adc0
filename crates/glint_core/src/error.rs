//! Error types for the Glint tokenizer.
//!
//! Tokenization itself is infallible: malformed input degrades to `Plain`
//! tokens or truncated string/comment tokens, never to an error. The error
//! type here covers the surfaces around the tokenizer that can actually
//! fail, such as loading source text in the shell.

use thiserror::Error;

/// All errors that can be produced by Glint.
#[derive(Debug, Error)]
pub enum GlintError {
    /// Reading source text from a file or stream failed.
    #[error("failed to read source: {0}")]
    ReadSource(#[from] std::io::Error),
}

/// Convenient `Result` alias for fallible Glint operations.
pub type GlintResult<T> = Result<T, GlintError>;

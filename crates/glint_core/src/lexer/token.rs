//! Token, token-kind, and carried-state definitions.

// ─────────────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────────────

/// The lexical category of a [`Token`].
///
/// This is a closed set: every character of a tokenized line falls into
/// exactly one of these categories, with [`TokenKind::Plain`] as the
/// single-character fallback for anything no other classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reserved word such as `function`, `return`, or `const`.
    Keyword,
    /// `true`, `false`, `null`, or `undefined`.
    BooleanOrNullLiteral,
    /// A quoted string (`"…"` / `'…'`) or template literal (`` `…` ``),
    /// including any span continued from or carried into another line.
    String,
    /// A `// …` line comment or a `/* … */` block comment, including any
    /// span continued from or carried into another line.
    Comment,
    /// A numeric literal: hexadecimal, or decimal with optional fraction
    /// and exponent.
    Number,
    /// An operator, longest-match first (`===` before `==` before `=`).
    Operator,
    /// A single punctuation character from `{ } ( ) [ ] . , ;`.
    Punctuation,
    /// A name that is neither a keyword nor a boolean/null literal.
    Identifier,
    /// A run of whitespace characters.
    Whitespace,
    /// A single character matched by no other classifier, or an entire
    /// line in bypass mode.
    Plain,
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// A classified, contiguous substring of one source line.
///
/// `text` is the exact, unmodified substring covered by this token —
/// including escape backslashes, quote characters, and comment markers.
/// Concatenating a line's token texts in order reproduces the line
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The exact source text covered by this token.
    pub text: String,
}

impl Token {
    /// Create a new token from a kind and the source text it covers.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LineState
// ─────────────────────────────────────────────────────────────────────────────

/// The lexical state carried from the end of one line to the start of the
/// next.
///
/// The two flags are independent booleans rather than a single enum: the
/// per-line state machine resumes whichever multi-line construct was left
/// open, checking each flag on its own. A well-formed tokenization never
/// sets both at once, but the representation does not forbid it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// The previous line ended inside an unterminated `/* … */` comment.
    pub in_block_comment: bool,
    /// The previous line ended inside an unterminated `` `…` `` template
    /// literal.
    pub in_template_string: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Word classification
// ─────────────────────────────────────────────────────────────────────────────

/// Map an identifier-shaped word to its final [`TokenKind`].
///
/// Boolean/null literals take precedence over the keyword set; a word in
/// neither set is a plain [`TokenKind::Identifier`]. Both sets are fixed at
/// compile time.
pub fn word_kind(word: &str) -> TokenKind {
    if is_boolean_or_null(word) {
        TokenKind::BooleanOrNullLiteral
    } else if is_keyword(word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Returns `true` for the boolean and null-like literals.
fn is_boolean_or_null(word: &str) -> bool {
    matches!(word, "true" | "false" | "null" | "undefined")
}

/// Returns `true` for JavaScript reserved words and the contextual
/// keywords a highlighter conventionally treats as reserved.
fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "async"
            | "await"
            | "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "export"
            | "extends"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "let"
            | "new"
            | "of"
            | "return"
            | "static"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_kind_keywords() {
        assert_eq!(word_kind("return"), TokenKind::Keyword);
        assert_eq!(word_kind("function"), TokenKind::Keyword);
        assert_eq!(word_kind("await"), TokenKind::Keyword);
    }

    #[test]
    fn test_word_kind_literals_take_precedence() {
        assert_eq!(word_kind("true"), TokenKind::BooleanOrNullLiteral);
        assert_eq!(word_kind("false"), TokenKind::BooleanOrNullLiteral);
        assert_eq!(word_kind("null"), TokenKind::BooleanOrNullLiteral);
        assert_eq!(word_kind("undefined"), TokenKind::BooleanOrNullLiteral);
    }

    #[test]
    fn test_word_kind_identifiers() {
        assert_eq!(word_kind("foo"), TokenKind::Identifier);
        assert_eq!(word_kind("returned"), TokenKind::Identifier);
        assert_eq!(word_kind("Truthy"), TokenKind::Identifier);
        assert_eq!(word_kind(""), TokenKind::Identifier);
    }

    #[test]
    fn test_line_state_default_is_clear() {
        let state = LineState::default();
        assert!(!state.in_block_comment);
        assert!(!state.in_template_string);
    }
}

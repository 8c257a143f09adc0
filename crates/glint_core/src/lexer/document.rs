//! Document driver: line splitting, state threading, language bypass.
//!
//! The driver is the public entry point for whole-document tokenization. It
//! normalizes line endings, folds [`tokenize_line`] across the lines in
//! order while threading the carried [`LineState`] forward, and applies the
//! language-tag selection policy: only JavaScript sources get real
//! tokenization, everything else passes through verbatim.

use super::line::tokenize_line;
use super::token::{LineState, Token, TokenKind};

/// Returns `true` when a declared language tag selects real tokenization.
fn is_supported_language(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("javascript") || tag.eq_ignore_ascii_case("js")
}

/// Normalize line endings and split into lines.
///
/// `\r\n` is treated as `\n`. An empty source text yields a single empty
/// line rather than zero lines — rendering always needs at least one row.
fn split_lines(source: &str) -> Vec<String> {
    source
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Tokenize a whole document, one token sequence per line.
///
/// The lexical state starts clear and is threaded from each line's output
/// into the next line's input, so block comments and template literals
/// continue correctly across line boundaries. The outer index of the result
/// is the zero-based line number; the inner tokens tile each line exactly.
pub fn tokens_by_line(source: &str) -> Vec<Vec<Token>> {
    let mut state = LineState::default();
    split_lines(source)
        .iter()
        .map(|line| {
            let (tokens, next) = tokenize_line(line, state);
            state = next;
            tokens
        })
        .collect()
}

/// Bypass mode: one verbatim [`TokenKind::Plain`] token per line.
///
/// Used for any language the tokenizer does not understand, so foreign
/// source is rendered unstyled instead of mis-highlighted.
pub fn plain_lines(source: &str) -> Vec<Vec<Token>> {
    split_lines(source)
        .iter()
        .map(|line| vec![Token::new(TokenKind::Plain, line.as_str())])
        .collect()
}

/// Tokenize `source` according to the declared language.
///
/// A present `language` tag that is not (case-insensitively) `"javascript"`
/// or `"js"` selects [`plain_lines`]; an absent tag or a JavaScript tag
/// selects [`tokens_by_line`].
pub fn tokenize(source: &str, language: Option<&str>) -> Vec<Vec<Token>> {
    match language {
        Some(tag) if !is_supported_language(tag) => plain_lines(source),
        _ => tokens_by_line(source),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Concatenate each line's token texts and rejoin with `\n`.
    fn rebuild(lines: &[Vec<Token>]) -> String {
        lines
            .iter()
            .map(|toks| toks.iter().map(|t| t.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── Line splitting ───────────────────────────────────────────────────────

    #[test]
    fn test_empty_source_is_one_empty_line() {
        let lines = tokens_by_line("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_crlf_normalization() {
        let lines = tokens_by_line("a\r\nb\nc");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "a");
        assert_eq!(lines[1][0].text, "b");
        assert_eq!(lines[2][0].text, "c");
    }

    #[test]
    fn test_document_reassembles_exactly() {
        let source = "function f() {\n  return `multi\nline`;\n}\n";
        let lines = tokens_by_line(source);
        assert_eq!(rebuild(&lines), source);
    }

    // ── State threading ──────────────────────────────────────────────────────

    #[test]
    fn test_block_comment_threads_across_lines() {
        let lines = tokens_by_line("/* start\nend */ x");
        assert_eq!(lines[0], vec![Token::new(TokenKind::Comment, "/* start")]);
        assert_eq!(lines[1][0], Token::new(TokenKind::Comment, "end */"));
        assert_eq!(lines[1][2], Token::new(TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_template_literal_threads_across_lines() {
        let lines = tokens_by_line("const t = `one\ntwo\nthree`;");
        assert_eq!(
            lines[0].last().unwrap(),
            &Token::new(TokenKind::String, "`one")
        );
        assert_eq!(lines[1], vec![Token::new(TokenKind::String, "two")]);
        assert_eq!(lines[2][0], Token::new(TokenKind::String, "three`"));
        assert_eq!(
            lines[2][1],
            Token::new(TokenKind::Punctuation, ";")
        );
    }

    #[test]
    fn test_state_does_not_leak_past_closing_line() {
        let lines = tokens_by_line("/* a */\nlet x;");
        assert_eq!(lines[1][0], Token::new(TokenKind::Keyword, "let"));
    }

    // ── Language bypass ──────────────────────────────────────────────────────

    #[test]
    fn test_unknown_language_bypasses_tokenization() {
        let lines = tokenize("def f():\n    return 1", Some("python"));
        assert_eq!(
            lines,
            vec![
                vec![Token::new(TokenKind::Plain, "def f():")],
                vec![Token::new(TokenKind::Plain, "    return 1")],
            ]
        );
    }

    #[test]
    fn test_language_tag_is_case_insensitive() {
        let lines = tokenize("let x;", Some("JavaScript"));
        assert_eq!(lines[0][0], Token::new(TokenKind::Keyword, "let"));
        let lines = tokenize("let x;", Some("JS"));
        assert_eq!(lines[0][0], Token::new(TokenKind::Keyword, "let"));
    }

    #[test]
    fn test_absent_language_tokenizes() {
        let lines = tokenize("let x;", None);
        assert_eq!(lines[0][0], Token::new(TokenKind::Keyword, "let"));
    }

    #[test]
    fn test_bypass_preserves_text_verbatim() {
        let source = "a === b // not a comment here";
        let lines = tokenize(source, Some("rust"));
        assert_eq!(lines, vec![vec![Token::new(TokenKind::Plain, source)]]);
    }
}

//! The per-line tokenizer state machine.
//!
//! [`tokenize_line`] consumes one line of text plus the lexical state
//! carried from the previous line and produces an ordered token sequence
//! covering the line with no gaps or overlaps, together with the state to
//! carry into the next line.

use super::classify;
use super::token::{LineState, Token, TokenKind, word_kind};

// ─────────────────────────────────────────────────────────────────────────────
// Scanning helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Find the byte index of the first unescaped `delim` at or after `from`.
///
/// A backslash escapes the character after it; the pair is skipped
/// atomically so an escaped delimiter (or escaped backslash) can never
/// terminate the scan. A trailing lone backslash escapes nothing and the
/// scan ends unmatched.
fn find_unescaped(line: &str, from: usize, delim: char) -> Option<usize> {
    let mut chars = line[from..].char_indices();
    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if c == delim {
            return Some(from + offset);
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Line tokenizer
// ─────────────────────────────────────────────────────────────────────────────

/// Tokenize one line of source text.
///
/// `state` is the lexical state left over from the previous line; the
/// returned state describes exactly what must be resumed on the next line.
/// A line that neither opens nor continues a block comment or template
/// literal always returns the default state, regardless of its input —
/// state cannot leak past a line that fully closes it.
///
/// The emitted tokens tile the line exactly: their texts concatenate to the
/// original line and their lengths sum to its length. The function never
/// panics and never returns an error; anything unrecognized becomes a
/// single-character [`TokenKind::Plain`] token, which also guarantees the
/// cursor always advances.
pub fn tokenize_line(line: &str, state: LineState) -> (Vec<Token>, LineState) {
    let mut tokens = Vec::new();
    let mut state = state;
    let mut i = 0;

    while i < line.len() {
        // Resume an open template literal from the previous line.
        if state.in_template_string {
            match find_unescaped(line, i, '`') {
                Some(tick) => {
                    tokens.push(Token::new(TokenKind::String, &line[i..=tick]));
                    state.in_template_string = false;
                    i = tick + 1;
                }
                None => {
                    // The whole remainder is still template text; the line
                    // ends mid-literal.
                    tokens.push(Token::new(TokenKind::String, &line[i..]));
                    return (tokens, state);
                }
            }
            continue;
        }

        // Resume an open block comment from the previous line.
        if state.in_block_comment {
            match line[i..].find("*/") {
                Some(offset) => {
                    let end = i + offset + 2;
                    tokens.push(Token::new(TokenKind::Comment, &line[i..end]));
                    state.in_block_comment = false;
                    i = end;
                }
                None => {
                    tokens.push(Token::new(TokenKind::Comment, &line[i..]));
                    return (tokens, state);
                }
            }
            continue;
        }

        let rest = &line[i..];

        // Line comment: swallows the rest of the line and cannot carry
        // state forward.
        if rest.starts_with("//") {
            tokens.push(Token::new(TokenKind::Comment, rest));
            return (tokens, state);
        }

        // Block comment: closed on this line, or open into the next.
        if rest.starts_with("/*") {
            match rest[2..].find("*/") {
                Some(offset) => {
                    let end = i + 2 + offset + 2;
                    tokens.push(Token::new(TokenKind::Comment, &line[i..end]));
                    i = end;
                }
                None => {
                    tokens.push(Token::new(TokenKind::Comment, rest));
                    state.in_block_comment = true;
                    return (tokens, state);
                }
            }
            continue;
        }

        let c = rest.chars().next().unwrap_or('\0');

        // Quoted string: truncated at end of line when unterminated —
        // unlike template literals, `"` / `'` strings never span lines.
        if c == '"' || c == '\'' {
            match find_unescaped(line, i + 1, c) {
                Some(quote) => {
                    tokens.push(Token::new(TokenKind::String, &line[i..=quote]));
                    i = quote + 1;
                }
                None => {
                    tokens.push(Token::new(TokenKind::String, rest));
                    i = line.len();
                }
            }
            continue;
        }

        // Template literal: closed on this line, or open into the next.
        if c == '`' {
            match find_unescaped(line, i + 1, '`') {
                Some(tick) => {
                    tokens.push(Token::new(TokenKind::String, &line[i..=tick]));
                    i = tick + 1;
                }
                None => {
                    tokens.push(Token::new(TokenKind::String, rest));
                    state.in_template_string = true;
                    return (tokens, state);
                }
            }
            continue;
        }

        // Classifier ladder, fixed priority order.
        if let Some(len) = classify::whitespace_at(line, i) {
            tokens.push(Token::new(TokenKind::Whitespace, &line[i..i + len]));
            i += len;
        } else if let Some(len) = classify::number_at(line, i) {
            tokens.push(Token::new(TokenKind::Number, &line[i..i + len]));
            i += len;
        } else if let Some(len) = classify::identifier_at(line, i) {
            let text = &line[i..i + len];
            tokens.push(Token::new(word_kind(text), text));
            i += len;
        } else if let Some(len) = classify::operator_at(line, i) {
            tokens.push(Token::new(TokenKind::Operator, &line[i..i + len]));
            i += len;
        } else if let Some(len) = classify::punctuation_at(line, i) {
            tokens.push(Token::new(TokenKind::Punctuation, &line[i..i + len]));
            i += len;
        } else {
            // Nothing matched: one opaque character.
            let len = c.len_utf8();
            tokens.push(Token::new(TokenKind::Plain, &line[i..i + len]));
            i += len;
        }
    }

    (tokens, state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

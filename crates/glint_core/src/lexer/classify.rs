//! Pure character-class matchers.
//!
//! Each function takes a line and a byte position within it and returns the
//! byte length of the longest match starting exactly at that position, or
//! `None`. The matchers are stateless and never look behind the cursor; the
//! per-line state machine only invokes them once strings, template literals,
//! and comments have been ruled out at the current position.

/// Multi-character operators, longest first.
///
/// Ordered so that a prefix of a longer operator can never win: matching `=`
/// before `===` would split one operator into three and corrupt the
/// highlighting downstream.
const MULTI_CHAR_OPERATORS: [&str; 22] = [
    "===", "!==", ">>>", "<<=", ">>=", "==", "!=", "<=", ">=", "=>", "++", "--", "+=", "-=", "*=",
    "/=", "%=", "&&", "||", "^=", "&=", "|=",
];

/// Returns `true` for characters that may *start* an identifier.
fn is_id_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Returns `true` for characters that may *continue* an identifier.
fn is_id_continue(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphanumeric()
}

// ─────────────────────────────────────────────────────────────────────────────
// Matchers
// ─────────────────────────────────────────────────────────────────────────────

/// Match a one-or-more run of whitespace characters.
pub fn whitespace_at(line: &str, start: usize) -> Option<usize> {
    let mut len = 0;
    for c in line[start..].chars() {
        if !c.is_whitespace() {
            break;
        }
        len += c.len_utf8();
    }
    (len > 0).then_some(len)
}

/// Match a numeric literal: `0x`/`0X` plus hex digits, or a decimal with
/// optional fraction and optional signed exponent.
///
/// The fraction is only consumed when at least one digit follows the `.`,
/// and the exponent only when at least one digit follows the `e`/`E` and
/// optional sign, so `1.` lexes as `1` + `.` and `1e` as `1` + `e`.
pub fn number_at(line: &str, start: usize) -> Option<usize> {
    let rest = &line[start..];
    let bytes = rest.as_bytes();

    // Hexadecimal: 0x / 0X prefix with at least one hex digit.
    if rest.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1], b'x' | b'X') {
        let digits = rest[2..]
            .bytes()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if digits > 0 {
            return Some(2 + digits);
        }
    }

    if !bytes.first().is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();

    // Optional fraction.
    if bytes.get(len) == Some(&b'.') {
        let frac = rest[len + 1..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac > 0 {
            len += 1 + frac;
        }
    }

    // Optional exponent.
    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp_end = len + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits = rest[exp_end..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 {
            len = exp_end + digits;
        }
    }

    Some(len)
}

/// Match an identifier: a letter, `_`, or `$`, continued by letters,
/// digits, `_`, or `$`.
pub fn identifier_at(line: &str, start: usize) -> Option<usize> {
    let mut chars = line[start..].chars();
    let first = chars.next()?;
    if !is_id_start(first) {
        return None;
    }
    let mut len = first.len_utf8();
    for c in chars {
        if !is_id_continue(c) {
            break;
        }
        len += c.len_utf8();
    }
    Some(len)
}

/// Match the longest operator at the cursor.
///
/// Multi-character candidates are tried in [`MULTI_CHAR_OPERATORS`] order
/// before the single-character fallback.
pub fn operator_at(line: &str, start: usize) -> Option<usize> {
    let rest = &line[start..];
    for op in MULTI_CHAR_OPERATORS {
        if rest.starts_with(op) {
            return Some(op.len());
        }
    }
    let c = rest.chars().next()?;
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '~' | '<' | '>' | '?' | ':' | '='
    )
    .then_some(1)
}

/// Match a single punctuation character.
pub fn punctuation_at(line: &str, start: usize) -> Option<usize> {
    let c = line[start..].chars().next()?;
    matches!(c, '{' | '}' | '(' | ')' | '[' | ']' | '.' | ',' | ';').then_some(1)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

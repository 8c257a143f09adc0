#![no_main]

use libfuzzer_sys::fuzz_target;

use glint_core::lexer::line::tokenize_line;
use glint_core::lexer::token::LineState;

fuzz_target!(|data: &[u8]| {
    // The first byte drives the incoming lexical state (including the
    // both-flags-set combination a well-formed document never produces);
    // the rest is the line text.
    if data.is_empty() {
        return;
    }
    let state = LineState {
        in_block_comment: data[0] & 1 != 0,
        in_template_string: data[0] & 2 != 0,
    };
    let Ok(line) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let (tokens, next) = tokenize_line(line, state);

    // Lossless tiling holds for any input and any incoming state.
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, line, "token texts must tile the line");

    // The carried state can only report constructs that are still open;
    // an empty line changes nothing.
    if line.is_empty() {
        assert_eq!(next, state, "empty line must pass state through");
    }
});

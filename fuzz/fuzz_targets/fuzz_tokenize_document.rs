#![no_main]

use libfuzzer_sys::fuzz_target;

use glint_core::lexer::document;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let lines = document::tokens_by_line(source);

    // One token sequence per line, even for empty input.
    let normalized = source.replace("\r\n", "\n");
    assert_eq!(
        lines.len(),
        normalized.split('\n').count(),
        "line count must match the split source"
    );

    // Lossless tiling: each line's token texts concatenate back to the line.
    for (line_text, tokens) in normalized.split('\n').zip(&lines) {
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, line_text, "token texts must tile the line");
        let total: usize = tokens.iter().map(|t| t.text.len()).sum();
        assert_eq!(total, line_text.len(), "token lengths must sum to line length");
    }

    // Determinism: a second pass over the same input is identical.
    assert_eq!(document::tokens_by_line(source), lines);

    // Bypass mode must also tile, for any input.
    let plain = document::tokenize(source, Some("not-javascript"));
    for (line_text, tokens) in normalized.split('\n').zip(&plain) {
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, line_text, "bypass tokens must tile the line");
    }
});

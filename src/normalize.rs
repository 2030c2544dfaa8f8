/// Characters that end a line, matching the universal-newline convention.
///
/// `\r\n` needs no special case: splitting on both halves only produces an
/// extra empty line, which is discarded anyway.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace stripped from the ends of a line. Besides Unicode whitespace
/// this covers the ASCII unit separator, which is not a line boundary.
fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{1f}'
}

/// Normalize simulation output for comparison.
///
/// Splits `output` into lines, trims surrounding whitespace from each line and
/// drops lines that end up empty. Relative order is preserved. `None` (no
/// output at all) normalizes to an empty sequence, same as an empty string.
pub fn normalize_output(output: Option<&str>) -> Vec<&str> {
    let Some(text) = output else {
        return Vec::new();
    };

    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_padding))
        .filter(|line| !line.is_empty())
        .collect()
}

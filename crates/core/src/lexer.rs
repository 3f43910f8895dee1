/// Characters stripped from the front of a header line.
pub const MARKER_CHARS: [char; 2] = ['#', ' '];

/// Splits on `\n` only. No CR handling, no trimming; `""` yields `[""]`.
pub fn split_lines(input: &str) -> Vec<&str> {
    input.split('\n').collect()
}

/// Removes the whole leading run of `#` and space characters, not just the
/// marker that matched. `"# ## Header"` becomes `"Header"`.
pub fn trim_marker(line: &str) -> &str {
    line.trim_start_matches(&MARKER_CHARS[..])
}

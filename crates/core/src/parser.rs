use log::trace;

use crate::{split_lines, trim_marker, Token};

/// Classifies one line. The `## ` check runs before `# `.
pub fn classify_line(line: &str) -> Token {
    if line.starts_with("## ") {
        Token::header(2, trim_marker(line))
    } else if line.starts_with("# ") {
        Token::header(1, trim_marker(line))
    } else {
        Token::text(line)
    }
}

/// One token per `\n`-separated line, in input order.
pub fn parse_markdown(input: &str) -> Vec<Token> {
    let lines = split_lines(input);
    trace!("classifying {} lines", lines.len());
    lines.into_iter().map(classify_line).collect()
}

mod lexer;
mod parser;
mod token;

pub use lexer::{split_lines, trim_marker, MARKER_CHARS};
pub use parser::{classify_line, parse_markdown};
pub use token::*;

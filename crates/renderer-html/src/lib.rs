use headmark_core::{parse_markdown, Token};
use log::debug;

/// Renders one token. Text passes through without escaping.
pub fn render_token(token: &Token) -> String {
    match token {
        Token::Header { level, text } => format!("<h{level}>{text}</h{level}>"),
        Token::Text { text } => text.clone(),
    }
}

/// Renders each token and joins them with `\n`.
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.content().len() + 10).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_token(token));
    }
    out
}

pub fn parse_markdown_to_html(input: &str) -> String {
    let tokens = parse_markdown(input);
    debug!(
        "rendering {} tokens ({} headers)",
        tokens.len(),
        tokens.iter().filter(|t| t.is_header()).count()
    );
    render_html(&tokens)
}

use headmark_core::Token;
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "type")]
enum Tk<'a> {
    Header { level: u8, text: &'a str },
    Text { text: &'a str },
}

impl<'a> From<&'a Token> for Tk<'a> {
    fn from(token: &'a Token) -> Self {
        match token {
            Token::Header { level, text } => Tk::Header {
                level: *level,
                text,
            },
            Token::Text { text } => Tk::Text { text },
        }
    }
}

/// Tokens as a JSON array of `{"type": ...}` objects.
pub fn render_tokens_to_string(tokens: &[Token]) -> Result<String, serde_json::Error> {
    let out: Vec<Tk> = tokens.iter().map(Tk::from).collect();
    serde_json::to_string(&out)
}

pub fn render_tokens_to_string_pretty(tokens: &[Token]) -> Result<String, serde_json::Error> {
    let out: Vec<Tk> = tokens.iter().map(Tk::from).collect();
    serde_json::to_string_pretty(&out)
}

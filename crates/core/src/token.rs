/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `# ` or `## ` line; `level` is 1 or 2.
    Header { level: u8, text: String },
    Text { text: String },
}

impl Token {
    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Token::Header {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Token::Text { text: text.into() }
    }

    pub fn content(&self) -> &str {
        match self {
            Token::Header { text, .. } | Token::Text { text } => text,
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            Token::Header { level, .. } => Some(*level),
            Token::Text { .. } => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Token::Header { .. })
    }
}

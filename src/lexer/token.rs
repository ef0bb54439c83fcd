use super::TokenKind;

/// A single lexical token: a kind, an optional printable lexeme, and the
/// 1-based source line it started on. Tokens are immutable after creation
/// and own their lexeme text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Option<String>, line: usize) -> Self {
        Self { kind, lexeme, line }
    }

    /// Build a keyword/punctuation/operator token that carries no
    /// identifying text beyond its kind.
    pub fn bare(kind: TokenKind, line: usize) -> Self {
        Self::new(kind, None, line)
    }
}

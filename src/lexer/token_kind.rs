/// The closed set of lexical categories the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Dee,
    Ma,
    Mana,
    Mgbe,
    Gosi,
    Eziokwu,
    Ugha,

    // Literals / names
    Identifier,
    Number,
    String,

    // Operators
    Assign,
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Terminator
    Eof,
}

//! Hand-written scanner turning a UTF-8 source string into a token stream.
//!
//! No grammar crate sits in front of this: identifiers, numbers, strings
//! and operators are all recognized by direct `char` inspection, matching
//! the shape of the language's reference implementation. The scanner never
//! aborts on bad input — an unrecognized byte is reported and skipped, and
//! scanning resumes on the next character (see [`crate::diagnostics`]).

mod token;
mod token_kind;

pub use token::Token;
pub use token_kind::TokenKind;

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use once_cell::sync::Lazy;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::{FALSE_LITERAL, TRUE_LITERAL};

/// Fixed keyword table: byte-exact, case-sensitive lookup from lexeme to
/// [`TokenKind`]. `ụgha` is matched by its exact UTF-8 encoding, the same
/// constant the parser and evaluator use for the false literal.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("dee", TokenKind::Dee);
    m.insert("ma", TokenKind::Ma);
    m.insert("mana", TokenKind::Mana);
    m.insert("mgbe", TokenKind::Mgbe);
    m.insert("gosi", TokenKind::Gosi);
    m.insert(TRUE_LITERAL, TokenKind::Eziokwu);
    m.insert(FALSE_LITERAL, TokenKind::Ugha);
    m
});

/// Scan `source` into a token stream terminated by exactly one [`TokenKind::Eof`].
pub fn tokenize(source: &str, diagnostics: &Diagnostics) -> Result<Vec<Token>, Diagnostic> {
    Lexer::new(source, diagnostics).scan()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    diagnostics: &'a Diagnostics,
    line: usize,
    tokens: Vec<Token>,
    halted: bool,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, diagnostics: &'a Diagnostics) -> Self {
        Self {
            chars: source.chars().peekable(),
            diagnostics,
            line: 1,
            tokens: Vec::new(),
            halted: false,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn scan(mut self) -> Result<Vec<Token>, Diagnostic> {
        while !self.halted {
            let Some(c) = self.peek() else {
                break;
            };
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '/' if self.starts_comment() => self.skip_comment(),
                '"' => self.scan_string()?,
                c if is_identifier_start(c) => self.scan_identifier(),
                c if c.is_ascii_digit() => self.scan_number(),
                _ => self.scan_operator()?,
            }
        }

        self.tokens.push(Token::bare(TokenKind::Eof, self.line));
        Ok(self.tokens)
    }

    fn starts_comment(&mut self) -> bool {
        let mut lookahead = self.chars.clone();
        lookahead.next() == Some('/') && lookahead.next() == Some('/')
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_identifier(&mut self) {
        let line = self.line;
        let mut lexeme = String::new();

        while let Some(c) = self.peek() {
            if is_identifier_continue(c) {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match KEYWORDS.get(lexeme.as_str()) {
            Some(kind) => self.tokens.push(Token::bare(*kind, line)),
            None => self
                .tokens
                .push(Token::new(TokenKind::Identifier, Some(lexeme), line)),
        }
    }

    fn scan_number(&mut self) {
        let line = self.line;
        let mut lexeme = String::new();

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.advance();
            } else {
                break;
            }
        }

        self.tokens
            .push(Token::new(TokenKind::Number, Some(lexeme), line));
    }

    fn scan_string(&mut self) -> Result<(), Diagnostic> {
        let line = self.line;
        self.advance(); // opening quote
        let mut lexeme = String::new();
        let mut terminated = false;

        while let Some(c) = self.advance() {
            if c == '"' {
                terminated = true;
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            lexeme.push(c);
        }

        if !terminated {
            self.diagnostics.report("Unterminated string", Some(line))?;
            self.halted = true;
            return Ok(());
        }

        self.tokens
            .push(Token::new(TokenKind::String, Some(lexeme), line));
        Ok(())
    }

    fn scan_operator(&mut self) -> Result<(), Diagnostic> {
        let line = self.line;
        let c = self.advance().expect("caller peeked a character");

        let kind = match c {
            '=' if self.advance_if('=') => TokenKind::Equal,
            '=' => TokenKind::Assign,
            '!' if self.advance_if('=') => TokenKind::NotEqual,
            '<' if self.advance_if('=') => TokenKind::LessEqual,
            '<' => TokenKind::Less,
            '>' if self.advance_if('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::Greater,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            other => {
                self.diagnostics
                    .report(format!("Unexpected character '{other}'"), Some(line))?;
                return Ok(());
            }
        };

        self.tokens.push(Token::bare(kind, line));
        Ok(())
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

use std::fmt::Display;

use crate::ast::span::Span;
use crate::lexer::token::Token;
use logos::Logos;

/// Raw tokens straight out of Logos
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")] // whitespace and `#` line comments
pub enum RawToken {
    #[token("match")]
    Match,
    #[token("isa")]
    Isa,
    #[token("type")]
    Type,

    #[token("$_", priority = 5)]
    AnonVar,

    // `$` is not part of the name; a bare `$_` lexes as `AnonVar` above
    #[regex(r"\$[a-zA-Z0-9_-]+", |lex| lex.slice()[1..].to_string())]
    Var(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Label(String),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
}

impl RawToken {
    pub fn to_token(&self) -> Token {
        match self {
            RawToken::Match => Token::Match,
            RawToken::Isa => Token::Isa,
            RawToken::Type => Token::Type,
            RawToken::AnonVar => Token::AnonVar,
            RawToken::Var(name) => Token::Var(name.clone()),
            RawToken::Label(label) => Token::Label(label.clone()),
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
            RawToken::Comma => Token::Comma,
            RawToken::Colon => Token::Colon,
            RawToken::Semicolon => Token::Semicolon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError(pub String, pub Span);

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.1, self.0)
    }
}

/// Lex source code into raw tokens with spans
pub fn lex(source: &str) -> Result<Vec<(RawToken, Span)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);

        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => {
                return Err(LexError(
                    format!(
                        "Unexpected token {}",
                        source.get(span.start..span.end).unwrap_or_default()
                    ),
                    span,
                ));
            }
        }
    }

    Ok(tokens)
}

//! Token registry shared by the lexer and the printers, so that what gets
//! printed is exactly what gets lexed.

use std::fmt::Display;

/// Keywords naming concept types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Relation,
}

impl TypeKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Relation => "relation",
        }
    }
}

/// Keywords introducing a statement property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKeyword {
    Isa,
    Type,
}

impl PropertyKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKeyword::Isa => "isa",
            PropertyKeyword::Type => "type",
        }
    }
}

/// Punctuation used when printing patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Char {
    ParenOpen,
    ParenClose,
    Comma,
    CommaSpace,
    Colon,
    ColonSpace,
    Semicolon,
    Space,
    Dollar,
}

impl Char {
    pub fn as_str(&self) -> &'static str {
        match self {
            Char::ParenOpen => "(",
            Char::ParenClose => ")",
            Char::Comma => ",",
            Char::CommaSpace => ", ",
            Char::Colon => ":",
            Char::ColonSpace => ": ",
            Char::Semicolon => ";",
            Char::Space => " ",
            Char::Dollar => "$",
        }
    }
}

impl Display for TypeKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for PropertyKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Char {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens handed to the parser
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Match,
    Isa,
    Type,

    // Variables
    Var(String), // $x (name without the dollar)
    AnonVar,     // $_

    // Type and role labels
    Label(String),

    // Delimiters
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Match => write!(f, "match"),
            Token::Isa => write!(f, "{}", PropertyKeyword::Isa),
            Token::Type => write!(f, "{}", PropertyKeyword::Type),
            Token::Var(name) => write!(f, "{}{}", Char::Dollar, name),
            Token::AnonVar => write!(f, "{}_", Char::Dollar),
            Token::Label(label) => write!(f, "{}", label),
            Token::LParen => write!(f, "{}", Char::ParenOpen),
            Token::RParen => write!(f, "{}", Char::ParenClose),
            Token::Comma => write!(f, "{}", Char::Comma),
            Token::Colon => write!(f, "{}", Char::Colon),
            Token::Semicolon => write!(f, "{}", Char::Semicolon),
        }
    }
}

pub mod token;
pub mod logos_lexer;

pub use token::{Char, PropertyKeyword, Token, TypeKeyword};
pub use logos_lexer::{lex as lex_raw, LexError};

use crate::ast::span::Spanned;

/// Main lexer entry point: lex and convert to parser tokens
pub fn lex(source: &str) -> Result<Vec<Spanned<Token>>, LexError> {
    let raw_tokens = lex_raw(source)?;

    Ok(raw_tokens
        .into_iter()
        .map(|(tok, span)| Spanned::new(tok.to_token(), span))
        .collect())
}

use crate::ast::span::Spanned;
use crate::diagnostics::GraqlError;
use crate::lexer::Token;

/// Feeds lexed tokens to LALRPOP as `(start, token, end)` triples
pub struct LexerAdapter {
    tokens: std::vec::IntoIter<Spanned<Token>>,
}

impl LexerAdapter {
    pub fn new(tokens: Vec<Spanned<Token>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for LexerAdapter {
    type Item = Result<(usize, Token, usize), GraqlError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens
            .next()
            .map(|spanned| Ok((spanned.span.start, spanned.node, spanned.span.end)))
    }
}

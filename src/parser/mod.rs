// Parser module - LALRPOP-generated parser over the logos token stream

pub mod lexer_adapter;

// LALRPOP generates this module from grammar.lalrpop
#[allow(clippy::all, unused, unused_lifetimes)]
mod grammar {
    include!(concat!(env!("OUT_DIR"), "/parser/grammar.rs"));
}

use lalrpop_util::ParseError;
use tracing::debug;

use crate::ast::span::Span;
use crate::ast::{Pattern, Statement};
use crate::diagnostics::GraqlError;
use crate::lexer::{lex, Token};
use crate::property::{Property, RelationProperty};
use crate::validate;
use lexer_adapter::LexerAdapter;

/// Parse a pattern (`$x isa person; ...`, optionally prefixed by `match`)
/// and validate every statement in it.
pub fn parse(source: &str) -> Result<Pattern, GraqlError> {
    let pattern = grammar::PatternParser::new()
        .parse(tokens(source)?)
        .map_err(convert_error)?;
    validate::validate_pattern(&pattern)?;
    debug!(statements = pattern.statements().len(), "parsed pattern");
    Ok(pattern)
}

/// Parse and validate a single statement, without the trailing `;`
pub fn parse_statement(source: &str) -> Result<Statement, GraqlError> {
    let statement = grammar::StatementParser::new()
        .parse(tokens(source)?)
        .map_err(convert_error)?;
    validate::validate_statement(&statement)?;
    Ok(statement)
}

/// Parse a bare relation property such as `(wife: $x, husband: $y)`
pub fn parse_relation(source: &str) -> Result<RelationProperty, GraqlError> {
    grammar::RelationParser::new()
        .parse(tokens(source)?)
        .map_err(convert_error)
}

fn tokens(source: &str) -> Result<LexerAdapter, GraqlError> {
    let tokens = lex(source).map_err(|e| GraqlError::LexError {
        span: e.1,
        message: e.0,
    })?;
    Ok(LexerAdapter::new(tokens))
}

/// Grammar action: attach parsed properties one by one so that unique
/// properties are checked the same way as in the builder API.
pub(crate) fn build_statement(
    statement: Statement,
    properties: Vec<Property>,
) -> Result<Statement, GraqlError> {
    properties
        .into_iter()
        .try_fold(statement, Statement::add_property)
}

fn convert_error(error: ParseError<usize, Token, GraqlError>) -> GraqlError {
    match error {
        ParseError::InvalidToken { location } => GraqlError::SyntaxError {
            span: Span::new(location, location),
            message: "invalid token".to_string(),
        },
        ParseError::UnrecognizedEof { location, expected } => GraqlError::SyntaxError {
            span: Span::new(location, location),
            message: format!("unexpected end of input, expected one of {}", expected.join(", ")),
        },
        ParseError::UnrecognizedToken {
            token: (start, token, end),
            expected,
        } => GraqlError::SyntaxError {
            span: Span::new(start, end),
            message: format!("unexpected `{}`, expected one of {}", token, expected.join(", ")),
        },
        ParseError::ExtraToken {
            token: (start, token, end),
        } => GraqlError::SyntaxError {
            span: Span::new(start, end),
            message: format!("unexpected trailing `{}`", token),
        },
        ParseError::User { error } => error,
    }
}

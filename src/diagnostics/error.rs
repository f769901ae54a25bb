use crate::ast::kind::StatementKind;
use crate::ast::span::Span;
use thiserror::Error;

/// Errors raised while lexing, parsing or assembling Graql patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraqlError {
    /// A mandatory constructor argument was absent
    #[error("Invalid argument: `{argument}` must be present")]
    InvalidArgument { argument: &'static str },

    #[error("Lexical error at {span}: {message}")]
    LexError { span: Span, message: String },

    #[error("Parse error at {span}: {message}")]
    SyntaxError { span: Span, message: String },

    /// A unique property was given twice with different values
    #[error("Statement `{statement}` has conflicting properties: `{first}` and `{second}`")]
    ConflictingProperties {
        statement: String,
        first: String,
        second: String,
    },

    /// A property cannot live on a statement of the kind implied by its other properties
    #[error("Property `{property}` cannot be attached to {kind} statement `{statement}`")]
    IncompatibleProperties {
        statement: String,
        kind: StatementKind,
        property: String,
    },
}

impl GraqlError {
    /// Source span of the error, when it came out of the parser
    pub fn get_span(&self) -> Option<Span> {
        match self {
            GraqlError::LexError { span, .. } | GraqlError::SyntaxError { span, .. } => Some(*span),
            _ => None,
        }
    }
}

//! Structural checks run after parsing: every property must be allowed on
//! the kind of statement implied by the statement's other properties.

use tracing::debug;

use crate::ast::kind::StatementKind;
use crate::ast::pattern::Pattern;
use crate::ast::statement::Statement;
use crate::diagnostics::GraqlError;
use crate::property::VarProperty;

/// Kind of a single statement, folded from its properties' classes.
/// A statement without properties is a plain thing.
pub fn statement_kind(statement: &Statement) -> Result<StatementKind, GraqlError> {
    let mut kind: Option<StatementKind> = None;
    for property in statement.properties() {
        let class = property.statement_class();
        kind = match kind {
            None => Some(class),
            Some(current) => match current.unify(class) {
                Some(unified) => Some(unified),
                None => {
                    return Err(GraqlError::IncompatibleProperties {
                        statement: statement.to_string(),
                        kind: current,
                        property: property.to_string(),
                    })
                }
            },
        };
    }
    Ok(kind.unwrap_or(StatementKind::Thing))
}

/// Check the statement and everything nested inside it
pub fn validate_statement(statement: &Statement) -> Result<(), GraqlError> {
    for inner in statement.inner_statements() {
        let kind = statement_kind(inner)?;
        debug!(statement = %inner, %kind, "validated statement");
    }
    Ok(())
}

pub fn validate_pattern(pattern: &Pattern) -> Result<(), GraqlError> {
    pattern.statements().iter().try_for_each(validate_statement)
}

use std::collections::HashSet;
use std::fmt::Display;

use crate::ast::statement::Statement;
use crate::ast::variable::Variable;
use crate::lexer::token::Char;

/// A conjunction of statements, printed as `stmt; stmt;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    statements: Vec<Statement>,
}

impl Pattern {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Top-level statements, in source order
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Every statement reachable from the pattern, top-level ones included
    pub fn inner_statements(&self) -> Vec<&Statement> {
        self.statements
            .iter()
            .flat_map(Statement::inner_statements)
            .collect()
    }

    /// Named variables used anywhere in the pattern, in first-seen order
    pub fn variables(&self) -> Vec<&Variable> {
        let mut seen = HashSet::new();
        self.statements
            .iter()
            .flat_map(Statement::variables)
            .filter(|v| seen.insert(*v))
            .collect()
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Char::Space)?;
            }
            write!(f, "{}{}", statement, Char::Semicolon)?;
        }
        Ok(())
    }
}

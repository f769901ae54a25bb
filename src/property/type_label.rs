use std::fmt::Display;
use std::iter;

use crate::ast::kind::StatementKind;
use crate::lexer::token::{Char, PropertyKeyword};
use crate::property::{Statements, VarProperty};

/// `type <label>`: names a schema type or role
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeProperty {
    label: String,
}

impl TypeProperty {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl VarProperty for TypeProperty {
    fn keyword(&self) -> &'static str {
        PropertyKeyword::Type.as_str()
    }

    fn property(&self) -> String {
        self.label.clone()
    }

    fn is_unique(&self) -> bool {
        true
    }

    fn statements(&self) -> Statements<'_> {
        Box::new(iter::empty())
    }

    fn types(&self) -> Statements<'_> {
        Box::new(iter::empty())
    }

    fn statement_class(&self) -> StatementKind {
        StatementKind::Type
    }
}

impl Display for TypeProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.keyword(), Char::Space, self.label)
    }
}

use std::fmt::Display;
use std::iter;

use crate::ast::kind::StatementKind;
use crate::ast::statement::Statement;
use crate::lexer::token::{Char, PropertyKeyword};
use crate::property::{Statements, VarProperty};

/// `isa <type>`: the instance's type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsaProperty {
    ty: Statement,
}

impl IsaProperty {
    pub fn new(ty: Statement) -> Self {
        Self { ty }
    }
}

impl VarProperty for IsaProperty {
    fn keyword(&self) -> &'static str {
        PropertyKeyword::Isa.as_str()
    }

    fn property(&self) -> String {
        self.ty.printable_name()
    }

    fn is_unique(&self) -> bool {
        true
    }

    fn statements(&self) -> Statements<'_> {
        Box::new(iter::once(&self.ty))
    }

    fn types(&self) -> Statements<'_> {
        Box::new(iter::once(&self.ty))
    }

    fn statement_class(&self) -> StatementKind {
        StatementKind::Thing
    }
}

impl Display for IsaProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.keyword(), Char::Space, self.property())
    }
}

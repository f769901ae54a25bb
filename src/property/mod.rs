//! Statement properties.
//!
//! Every property knows its keyword, how to print itself, which statements
//! it references and which class of statement may own it. `Property` is the
//! closed set the parser and the statement builders work with.

pub mod isa;
pub mod relation;
pub mod type_label;

pub use isa::IsaProperty;
pub use relation::{RelationProperty, RolePlayer};
pub use type_label::TypeProperty;

use std::fmt::Display;

use crate::ast::kind::StatementKind;
use crate::ast::statement::Statement;

/// Lazily walked statements referenced by a property
pub type Statements<'a> = Box<dyn Iterator<Item = &'a Statement> + 'a>;

/// Contract shared by all statement properties
pub trait VarProperty: Display {
    /// Keyword identifying the property kind
    fn keyword(&self) -> &'static str;

    /// Body of the property, without its keyword
    fn property(&self) -> String;

    /// Whether a statement may carry at most one property of this kind
    fn is_unique(&self) -> bool;

    /// Every statement this property refers to
    fn statements(&self) -> Statements<'_>;

    /// The subset of `statements` that name types (or roles)
    fn types(&self) -> Statements<'_>;

    /// Class of statement allowed to own this property
    fn statement_class(&self) -> StatementKind;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    Relation(RelationProperty),
    Isa(IsaProperty),
    Type(TypeProperty),
}

impl Property {
    fn inner(&self) -> &dyn VarProperty {
        match self {
            Property::Relation(p) => p,
            Property::Isa(p) => p,
            Property::Type(p) => p,
        }
    }
}

impl VarProperty for Property {
    fn keyword(&self) -> &'static str {
        self.inner().keyword()
    }

    fn property(&self) -> String {
        self.inner().property()
    }

    fn is_unique(&self) -> bool {
        self.inner().is_unique()
    }

    fn statements(&self) -> Statements<'_> {
        self.inner().statements()
    }

    fn types(&self) -> Statements<'_> {
        self.inner().types()
    }

    fn statement_class(&self) -> StatementKind {
        self.inner().statement_class()
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Property::Relation(p) => p.fmt(f),
            Property::Isa(p) => p.fmt(f),
            Property::Type(p) => p.fmt(f),
        }
    }
}

impl From<RelationProperty> for Property {
    fn from(p: RelationProperty) -> Self {
        Property::Relation(p)
    }
}

impl From<IsaProperty> for Property {
    fn from(p: IsaProperty) -> Self {
        Property::Isa(p)
    }
}

impl From<TypeProperty> for Property {
    fn from(p: TypeProperty) -> Self {
        Property::Type(p)
    }
}

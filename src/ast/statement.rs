use std::collections::HashSet;
use std::fmt::Display;

use tracing::trace;

use crate::ast::variable::Variable;
use crate::diagnostics::GraqlError;
use crate::lexer::token::Char;
use crate::property::{IsaProperty, Property, RelationProperty, RolePlayer, TypeProperty, VarProperty};

/// A variable together with the properties constraining it, e.g.
/// `$r (wife: $x, husband: $y) isa marriage`.
///
/// Statements are built once and then only read. Every builder method
/// consumes `self` and returns the extended statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    var: Variable,
    properties: Vec<Property>,
}

impl Statement {
    pub fn new(var: Variable) -> Self {
        Self {
            var,
            properties: Vec::new(),
        }
    }

    /// `$name`
    pub fn var(name: impl Into<String>) -> Self {
        Self::new(Variable::named(name))
    }

    /// `$_`
    pub fn anonymous() -> Self {
        Self::new(Variable::anonymous())
    }

    /// A type or role referred to by its label
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            var: Variable::anonymous(),
            properties: vec![Property::Type(TypeProperty::new(label))],
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.var
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn relation(&self) -> Option<&RelationProperty> {
        self.properties.iter().find_map(|p| match p {
            Property::Relation(rel) => Some(rel),
            _ => None,
        })
    }

    pub fn type_label(&self) -> Option<&str> {
        self.properties.iter().find_map(|p| match p {
            Property::Type(ty) => Some(ty.label()),
            _ => None,
        })
    }

    /// Attach a property.
    ///
    /// A unique property may appear once: re-adding an identical one is a
    /// no-op, a different value fails with `ConflictingProperties`.
    pub fn add_property(mut self, property: Property) -> Result<Self, GraqlError> {
        if property.is_unique() {
            let existing = self
                .properties
                .iter()
                .find(|p| p.keyword() == property.keyword());
            if let Some(existing) = existing {
                if *existing == property {
                    return Ok(self);
                }
                return Err(GraqlError::ConflictingProperties {
                    statement: self.to_string(),
                    first: existing.to_string(),
                    second: property.to_string(),
                });
            }
        }
        self.properties.push(property);
        Ok(self)
    }

    /// Add `role: player` to this statement's relation, creating it if needed
    pub fn rel(self, role: Statement, player: Statement) -> Self {
        self.add_role_player(RolePlayer::new(Some(role), player))
    }

    /// Add a player without a role to this statement's relation
    pub fn rel_player(self, player: Statement) -> Self {
        self.add_role_player(RolePlayer::new(None, player))
    }

    fn add_role_player(mut self, role_player: RolePlayer) -> Self {
        trace!(statement = %self.var, role_player = %role_player, "adding role player");
        let relation = self.properties.iter_mut().find_map(|p| match p {
            Property::Relation(rel) => Some(rel),
            _ => None,
        });
        match relation {
            Some(rel) => *rel = rel.with_player(role_player),
            None => self
                .properties
                .push(Property::Relation(RelationProperty::new(vec![role_player]))),
        }
        self
    }

    /// `isa <type>`
    pub fn isa(self, ty: Statement) -> Result<Self, GraqlError> {
        self.add_property(Property::Isa(IsaProperty::new(ty)))
    }

    /// Short form used when this statement is printed inside another one:
    /// the bare variable, the label of an anonymous type reference, or the
    /// full statement otherwise.
    pub fn printable_name(&self) -> String {
        if self.properties.is_empty() {
            return self.var.to_string();
        }
        if !self.var.is_visible() {
            if let [Property::Type(ty)] = self.properties.as_slice() {
                return ty.label().to_string();
            }
        }
        self.to_string()
    }

    /// Depth-first walk over this statement and every statement reachable
    /// through its properties, starting with `self`.
    pub fn inner_statements(&self) -> Vec<&Statement> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(statement) = stack.pop() {
            out.push(statement);
            let children: Vec<&Statement> = statement
                .properties
                .iter()
                .flat_map(|p| p.statements())
                .collect();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Named variables reachable from this statement, in first-seen order
    pub fn variables(&self) -> Vec<&Variable> {
        let mut seen = HashSet::new();
        self.inner_statements()
            .into_iter()
            .map(|s| &s.var)
            .filter(|v| v.is_visible() && seen.insert(*v))
            .collect()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        if self.var.is_visible() || self.properties.is_empty() {
            write!(f, "{}", self.var)?;
            first = false;
        }
        for property in &self.properties {
            if !first {
                write!(f, "{}", Char::Space)?;
            }
            write!(f, "{}", property)?;
            first = false;
        }
        Ok(())
    }
}

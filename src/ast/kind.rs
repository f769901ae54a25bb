use std::fmt::Display;

/// Which class of statement may own a property.
///
/// `Relation` refines `Thing`: a relation statement may also carry `isa`.
/// `Type` statements describe schema concepts and accept no instance
/// properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Thing,
    Relation,
    Type,
}

impl StatementKind {
    /// Combine the kinds required by two properties of the same statement.
    /// Returns `None` when no statement can satisfy both.
    pub fn unify(self, other: StatementKind) -> Option<StatementKind> {
        use StatementKind::*;
        match (self, other) {
            (a, b) if a == b => Some(a),
            (Thing, Relation) | (Relation, Thing) => Some(Relation),
            _ => None,
        }
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::Thing => write!(f, "thing"),
            StatementKind::Relation => write!(f, "relation"),
            StatementKind::Type => write!(f, "type"),
        }
    }
}

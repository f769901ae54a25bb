use std::fmt::Display;

use crate::lexer::token::Char;

/// A query variable: `$name`, or the anonymous `$_`.
///
/// Anonymous variables carry no identity, so any two compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: Option<String>,
}

impl Variable {
    /// `_` and the empty name print as `$_`, so both give the anonymous variable
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() || name == "_" {
            return Self::anonymous();
        }
        Self { name: Some(name) }
    }

    pub fn anonymous() -> Self {
        Self { name: None }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Named variables are visible to the caller of a query
    pub fn is_visible(&self) -> bool {
        self.name.is_some()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Char::Dollar, self.name.as_deref().unwrap_or("_"))
    }
}

//! Graql pattern syntax tree
//!
//! Models Graql patterns around the relation property, the role-player list
//! of a relation pattern such as `(wife: $x, husband: $y)`.
//! The pipeline has three stages:
//! 1. Logos-based lexer
//! 2. LALRPOP-based parser building `Statement`s and their properties
//! 3. Validation of the statement kind implied by each statement's properties
//!
//! Every node prints back to the syntax the parser accepts, and compares and
//! hashes structurally so patterns can be deduplicated.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod property;
pub mod validate;

// Re-export main types
pub use ast::{Pattern, Statement, StatementKind, Variable};
pub use diagnostics::GraqlError;
pub use lexer::{lex, Token};
pub use parser::{parse, parse_relation, parse_statement};
pub use property::{Property, RelationProperty, RolePlayer, VarProperty};

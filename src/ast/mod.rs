pub mod kind;
pub mod pattern;
pub mod span;
pub mod statement;
pub mod variable;

pub use kind::StatementKind;
pub use pattern::Pattern;
pub use span::{SourcePos, Span, Spanned};
pub use statement::Statement;
pub use variable::Variable;

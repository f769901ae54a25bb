pub mod error;

pub use error::GraqlError;

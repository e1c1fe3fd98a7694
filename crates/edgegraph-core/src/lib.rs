#[macro_use]
mod error;
pub use error::{Error, IntoError, ValidationEntry};

pub mod schema;
pub use schema::{FieldRef, Model, ModelName, Property};

pub mod stmt;
pub use stmt::Statement;

pub type Result<T, E = Error> = core::result::Result<T, E>;

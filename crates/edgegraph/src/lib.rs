pub mod driver;
pub use driver::Executor;

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::{Insert, Select, Update};

pub mod validate;
pub use validate::SchemaValidator;

pub use edgegraph_core::{bail, err, schema, Error, Result, ValidationEntry};
pub use edgegraph_ql::{Params, Query, Serializer};

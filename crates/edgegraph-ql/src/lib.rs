mod query;
pub use query::Query;

pub mod serializer;
pub use serializer::{Params, Serializer};

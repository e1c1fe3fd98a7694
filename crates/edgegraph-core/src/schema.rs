mod builder;
pub use builder::ModelBuilder;

mod field_ty;
pub use field_ty::FieldTy;

mod model;
pub use model::Model;

mod name;
pub use name::ModelName;

mod property;
pub use property::{FieldRef, Property};

mod registry;
pub use registry::{lookup, register, reflect_type, registered};

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

pub use edgegraph_core::stmt::{
    AssignOp, Direction, EmptyStrategy, Expr, FieldInput, Literal, PrimitiveType, Shape,
    ShapeItem, Statement, Value,
};

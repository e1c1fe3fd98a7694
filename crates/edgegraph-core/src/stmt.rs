mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_coalesce;
pub use expr_coalesce::ExprCoalesce;

mod expr_compare;
pub use expr_compare::{CompareOp, ExprCompare};

mod expr_in;
pub use expr_in::{ExprIn, InOp};

mod expr_invoke;
pub use expr_invoke::ExprInvoke;

mod expr_like;
pub use expr_like::{ExprLike, LikeOp};

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_path;
pub use expr_path::ExprPath;

mod expr_reduce;
pub use expr_reduce::{ExprReduce, ReduceOp};

mod expr_scope;
pub use expr_scope::ExprScope;

mod expr_side;
pub use expr_side::ExprSide;

mod expr_union;
pub use expr_union::ExprUnion;

mod field_input;
pub use field_input::{FieldInput, FieldValue};

mod insert;
pub use insert::{Insert, InsertField, UnlessConflict};

mod literal;
pub use literal::Literal;

mod order_by;
pub use order_by::{Direction, EmptyStrategy, OrderBy};

mod select;
pub use select::{Select, SelectField, SelectFieldKind};

mod shape;
pub use shape::{Pointer, Shape, ShapeContext, ShapeItem, ShapeValue};

mod statement;
pub use statement::Statement;

mod ty;
pub use ty::PrimitiveType;

mod update;
pub use update::{AssignOp, Update, UpdateField};

mod value;
pub use value::Value;

pub mod visit;
pub use visit::Visit;

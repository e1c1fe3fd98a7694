use super::Formatter;

use edgegraph_core::stmt::{
    AssignOp, CompareOp, Direction, EmptyStrategy, InOp, LikeOp, Pointer, PrimitiveType,
    ReduceOp,
};

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_edgeql($f);
        )*
    }};
}

pub(super) trait ToEdgeql {
    fn to_edgeql(self, f: &mut Formatter<'_>);
}

impl ToEdgeql for &str {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToEdgeql for &String {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToEdgeql for u64 {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

/// Keywords and operators write their `Display` form.
macro_rules! display_to_edgeql {
    ( $( $ty:ty ),* ) => {
        $(
            impl ToEdgeql for $ty {
                fn to_edgeql(self, f: &mut Formatter<'_>) {
                    f.dst.push_str(&self.to_string());
                }
            }
        )*
    };
}

display_to_edgeql!(
    AssignOp,
    CompareOp,
    Direction,
    EmptyStrategy,
    InOp,
    LikeOp,
    Pointer,
    PrimitiveType,
    ReduceOp
);

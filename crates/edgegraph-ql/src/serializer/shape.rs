use super::{declared_ty, Formatter, ToEdgeql};

use edgegraph_core::stmt::{Pointer, Shape, ShapeItem, ShapeValue};

impl ToEdgeql for &Shape {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        fmt!(f, "{\n");

        for item in &self.items {
            fmt!(f, item);
        }

        fmt!(f, "}");
    }
}

impl ToEdgeql for &ShapeItem {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let name = self.field.name();

        match self.pointer {
            Pointer::None => fmt!(f, name),
            Pointer::Linked => fmt!(f, name ": "),
            pointer => fmt!(f, name " " pointer " "),
        }

        match &self.value {
            None => {}
            Some(ShapeValue::Shape(shape)) => {
                f.nested(name, |f| fmt!(f, shape));
            }
            Some(ShapeValue::Expr(expr)) => {
                f.nested(name, |f| fmt!(f, expr));
            }
            Some(ShapeValue::Subquery(stmt)) => {
                let stmt = &**stmt;
                f.nested(name, |f| fmt!(f, "(\n" stmt ")"));
            }
            Some(ShapeValue::Literal(literal)) => {
                let ty = declared_ty(literal);
                let placeholder = f.bind_next(name, &literal.value);
                fmt!(f, "<" ty ">" placeholder);
            }
        }

        fmt!(f, ",\n");
    }
}

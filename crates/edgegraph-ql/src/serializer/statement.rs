use super::{declared_ty, Delimited, Formatter, ToEdgeql};

use edgegraph_core::schema::ModelName;
use edgegraph_core::stmt::{
    Expr, FieldValue, Insert, Select, SelectFieldKind, Statement, Update,
};

impl ToEdgeql for &Statement {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_edgeql(f),
            Statement::Insert(stmt) => stmt.to_edgeql(f),
            Statement::Update(stmt) => stmt.to_edgeql(f),
        }
    }
}

impl ToEdgeql for &ModelName {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let (module, name) = (&self.module, &self.name);
        fmt!(f, module "::" name);
    }
}

/// Each filter is written under its own `filter_<i>` prefix.
struct Filters<'a>(&'a [Expr]);

impl ToEdgeql for Filters<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                fmt!(f, " and ");
            }
            f.nested(&format!("filter_{i}"), |f| fmt!(f, filter));
        }
    }
}

/// The `{ ... }` projection of a SELECT.
struct SelectShape<'a>(&'a Select);

impl ToEdgeql for SelectShape<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        fmt!(f, "{\n");

        for field in self.0.sorted_fields() {
            let name = field.field.name();

            match &field.kind {
                SelectFieldKind::Plain => fmt!(f, name),
                SelectFieldKind::Expr(expr) => {
                    fmt!(f, name " := ");
                    f.nested(name, |f| fmt!(f, expr));
                }
                SelectFieldKind::Subquery(subquery) => {
                    fmt!(f, name ": ");
                    f.nested(name, |f| fmt!(f, NestedSelect(subquery)));
                }
            }

            fmt!(f, ",\n");
        }

        fmt!(f, "}");
    }
}

/// A SELECT used as a link's projection: its shape followed by its own
/// clauses on the same line.
struct NestedSelect<'a>(&'a Select);

impl ToEdgeql for NestedSelect<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let select = self.0;
        fmt!(f, SelectShape(select));

        if !select.filters.is_empty() {
            fmt!(f, " filter " Filters(&select.filters));
        }

        if let Some(order_by) = &select.order_by {
            let field = &order_by.field;
            fmt!(f, " order by " field " " order_by.direction);

            if let Some(empty) = order_by.empty {
                fmt!(f, " empty " empty);
            }
        }

        if let Some(offset) = select.offset {
            fmt!(f, " offset " offset);
        }

        if let Some(limit) = select.limit {
            fmt!(f, " limit " limit);
        }
    }
}

impl ToEdgeql for &Select {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let model = &self.model.name;
        fmt!(f, "select " model " " SelectShape(self) "\n");

        if !self.filters.is_empty() {
            fmt!(f, "filter " Filters(&self.filters) "\n");
        }

        if let Some(order_by) = &self.order_by {
            let field = &order_by.field;
            fmt!(f, "order by " field " " order_by.direction);

            if let Some(empty) = order_by.empty {
                fmt!(f, " empty " empty);
            }

            fmt!(f, "\n");
        }

        if let Some(offset) = self.offset {
            fmt!(f, "offset " offset "\n");
        }

        if let Some(limit) = self.limit {
            fmt!(f, "limit " limit "\n");
        }
    }
}

/// The value of an INSERT or UPDATE field. Literals are bound under the
/// field's own name; expressions and subqueries get the field name as a
/// prefix segment.
struct Assigned<'a> {
    name: &'a str,
    value: &'a FieldValue,
}

impl ToEdgeql for Assigned<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        match self.value {
            FieldValue::Literal(literal) => {
                let ty = declared_ty(literal);
                let placeholder = f.bind_named(self.name, &literal.value);
                fmt!(f, "<" ty ">" placeholder);
            }
            FieldValue::Expr(expr) => {
                f.nested(self.name, |f| fmt!(f, expr));
            }
            FieldValue::Subquery(stmt) => {
                let stmt = &**stmt;
                f.nested(self.name, |f| fmt!(f, "(\n" stmt ")"));
            }
        }
    }
}

impl ToEdgeql for &Insert {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        let model = &self.model.name;
        fmt!(f, "insert " model " {\n");

        for field in self.sorted_fields() {
            let name = field.property.name.as_str();
            let value = Assigned {
                name,
                value: &field.value,
            };
            fmt!(f, name ": " value ",\n");
        }

        fmt!(f, "}\n");

        let Some(conflict) = &self.unless_conflict else {
            return;
        };

        if conflict.fields.is_empty() {
            fmt!(f, "unless conflict\n");
        } else {
            let keys = conflict.fields.iter().map(|name| Key(name));
            fmt!(f, "unless conflict on (" Delimited(keys, ", ") ")\n");
        }

        if let Some(alternate) = &conflict.alternate {
            let alternate = &**alternate;
            f.nested("else", |f| fmt!(f, "else (\n" alternate ")\n"));
        }
    }
}

/// A conflict key, `.name`
struct Key<'a>(&'a str);

impl ToEdgeql for Key<'_> {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        fmt!(f, "." self.0);
    }
}

impl ToEdgeql for &Update {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        match &self.target {
            Some(target) => {
                let target = &**target;
                f.nested("target", |f| fmt!(f, "update (\n" target ")\n"));
            }
            None => {
                let model = &self.model.name;
                fmt!(f, "update " model "\n");
            }
        }

        if !self.filters.is_empty() {
            fmt!(f, "filter " Filters(&self.filters) "\n");
        }

        fmt!(f, "set {\n");

        for field in self.sorted_fields() {
            let name = field.property.name.as_str();
            let value = Assigned {
                name,
                value: &field.value,
            };
            fmt!(f, name " " field.op " " value ",\n");
        }

        fmt!(f, "}\n");
    }
}

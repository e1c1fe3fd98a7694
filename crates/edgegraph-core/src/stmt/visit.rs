#![allow(unused_variables)]

use super::{
    Expr, ExprAnd, ExprCoalesce, ExprCompare, ExprIn, ExprInvoke, ExprLike, ExprNot, ExprOr,
    ExprPath, ExprReduce, ExprScope, ExprSide, ExprUnion, FieldValue, Insert, Literal, Select,
    SelectFieldKind, Shape, ShapeValue, Statement, Update,
};
use crate::Result;

/// Read-only traversal of expressions, shapes and statements.
///
/// Every method defaults to the free function of the same name, which visits
/// the node's children. Override a method to act on a node kind and call the
/// free function to keep descending.
pub trait Visit {
    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        visit_expr_and(self, i);
    }

    fn visit_expr_coalesce(&mut self, i: &ExprCoalesce) {
        visit_expr_coalesce(self, i);
    }

    fn visit_expr_compare(&mut self, i: &ExprCompare) {
        visit_expr_compare(self, i);
    }

    fn visit_expr_in(&mut self, i: &ExprIn) {
        visit_expr_in(self, i);
    }

    fn visit_expr_invoke(&mut self, i: &ExprInvoke) {
        visit_expr_invoke(self, i);
    }

    fn visit_expr_like(&mut self, i: &ExprLike) {
        visit_expr_like(self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        visit_expr_not(self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        visit_expr_or(self, i);
    }

    fn visit_expr_path(&mut self, i: &ExprPath) {}

    fn visit_expr_reduce(&mut self, i: &ExprReduce) {
        visit_expr_reduce(self, i);
    }

    fn visit_expr_scope(&mut self, i: &ExprScope) {
        visit_expr_scope(self, i);
    }

    fn visit_expr_side(&mut self, i: &ExprSide) {
        visit_expr_side(self, i);
    }

    fn visit_expr_union(&mut self, i: &ExprUnion) {
        visit_expr_union(self, i);
    }

    fn visit_literal(&mut self, i: &Literal) {}

    fn visit_shape(&mut self, i: &Shape) {
        visit_shape(self, i);
    }

    fn visit_stmt(&mut self, i: &Statement) {
        visit_stmt(self, i);
    }

    fn visit_stmt_select(&mut self, i: &Select) {
        visit_stmt_select(self, i);
    }

    fn visit_stmt_insert(&mut self, i: &Insert) {
        visit_stmt_insert(self, i);
    }

    fn visit_stmt_update(&mut self, i: &Update) {
        visit_stmt_update(self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and(expr),
        Expr::Coalesce(expr) => v.visit_expr_coalesce(expr),
        Expr::Compare(expr) => v.visit_expr_compare(expr),
        Expr::In(expr) => v.visit_expr_in(expr),
        Expr::Invoke(expr) => v.visit_expr_invoke(expr),
        Expr::Like(expr) => v.visit_expr_like(expr),
        Expr::Literal(literal) => v.visit_literal(literal),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::Or(expr) => v.visit_expr_or(expr),
        Expr::Path(expr) => v.visit_expr_path(expr),
        Expr::Reduce(expr) => v.visit_expr_reduce(expr),
        Expr::Scope(expr) => v.visit_expr_scope(expr),
        Expr::Side(expr) => v.visit_expr_side(expr),
        Expr::Union(expr) => v.visit_expr_union(expr),
    }
}

pub fn visit_expr_and<V>(v: &mut V, node: &ExprAnd)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_coalesce<V>(v: &mut V, node: &ExprCoalesce)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_compare<V>(v: &mut V, node: &ExprCompare)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_in<V>(v: &mut V, node: &ExprIn)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.target);
    v.visit_expr(&node.list);
}

pub fn visit_expr_invoke<V>(v: &mut V, node: &ExprInvoke)
where
    V: Visit + ?Sized,
{
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_like<V>(v: &mut V, node: &ExprLike)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.target);
    v.visit_expr(&node.pattern);
}

pub fn visit_expr_not<V>(v: &mut V, node: &ExprNot)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_or<V>(v: &mut V, node: &ExprOr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_reduce<V>(v: &mut V, node: &ExprReduce)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_scope<V>(v: &mut V, node: &ExprScope)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_side<V>(v: &mut V, node: &ExprSide)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.origin);
    v.visit_expr(&node.target);
}

pub fn visit_expr_union<V>(v: &mut V, node: &ExprUnion)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_shape<V>(v: &mut V, node: &Shape)
where
    V: Visit + ?Sized,
{
    for item in &node.items {
        match &item.value {
            Some(ShapeValue::Shape(shape)) => v.visit_shape(shape),
            Some(ShapeValue::Expr(expr)) => v.visit_expr(expr),
            Some(ShapeValue::Subquery(stmt)) => v.visit_stmt(stmt),
            Some(ShapeValue::Literal(literal)) => v.visit_literal(literal),
            None => {}
        }
    }
}

pub fn visit_stmt<V>(v: &mut V, node: &Statement)
where
    V: Visit + ?Sized,
{
    match node {
        Statement::Select(stmt) => v.visit_stmt_select(stmt),
        Statement::Insert(stmt) => v.visit_stmt_insert(stmt),
        Statement::Update(stmt) => v.visit_stmt_update(stmt),
    }
}

pub fn visit_stmt_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    for field in &node.fields {
        match &field.kind {
            SelectFieldKind::Plain => {}
            SelectFieldKind::Expr(expr) => v.visit_expr(expr),
            SelectFieldKind::Subquery(select) => v.visit_stmt_select(select),
        }
    }

    for filter in &node.filters {
        v.visit_expr(filter);
    }
}

fn visit_field_value<V>(v: &mut V, node: &FieldValue)
where
    V: Visit + ?Sized,
{
    match node {
        FieldValue::Literal(literal) => v.visit_literal(literal),
        FieldValue::Expr(expr) => v.visit_expr(expr),
        FieldValue::Subquery(stmt) => v.visit_stmt(stmt),
    }
}

pub fn visit_stmt_insert<V>(v: &mut V, node: &Insert)
where
    V: Visit + ?Sized,
{
    for field in &node.fields {
        visit_field_value(v, &field.value);
    }

    if let Some(conflict) = &node.unless_conflict {
        if let Some(alternate) = &conflict.alternate {
            v.visit_stmt(alternate);
        }
    }
}

pub fn visit_stmt_update<V>(v: &mut V, node: &Update)
where
    V: Visit + ?Sized,
{
    if let Some(target) = &node.target {
        v.visit_stmt_select(target);
    }

    for filter in &node.filters {
        v.visit_expr(filter);
    }

    for field in &node.fields {
        visit_field_value(v, &field.value);
    }
}

/// Calls `f` on every literal reachable from `node`.
pub fn for_each_literal<F>(node: &Expr, f: F)
where
    F: FnMut(&Literal),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Literal),
    {
        fn visit_literal(&mut self, node: &Literal) {
            (self.f)(node);
        }
    }

    ForEach { f }.visit_expr(node);
}

/// Counts the literals in a statement, which is the number of parameters it
/// binds when built.
pub fn count_literals(node: &Statement) -> usize {
    struct Count(usize);

    impl Visit for Count {
        fn visit_literal(&mut self, _: &Literal) {
            self.0 += 1;
        }
    }

    let mut count = Count(0);
    count.visit_stmt(node);
    count.0
}

/// Stops at the first literal without a declared type.
struct VerifyLiterals {
    subject: &'static str,
    result: Result<()>,
}

impl Visit for VerifyLiterals {
    fn visit_literal(&mut self, node: &Literal) {
        if self.result.is_ok() {
            self.result = node.expect_ty(self.subject).map(|_| ());
        }
    }
}

pub fn verify_stmt_literals(node: &Statement) -> Result<()> {
    let mut v = VerifyLiterals {
        subject: "statement",
        result: Ok(()),
    };
    v.visit_stmt(node);
    v.result
}

pub fn verify_shape_literals(node: &Shape) -> Result<()> {
    let mut v = VerifyLiterals {
        subject: "shape",
        result: Ok(()),
    };
    v.visit_shape(node);
    v.result
}

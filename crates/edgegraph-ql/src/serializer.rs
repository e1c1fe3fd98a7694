#[macro_use]
mod fmt;
use fmt::ToEdgeql;

mod delim;
use delim::{Delimited, Operand};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod shape;
mod statement;

use crate::Query;

use edgegraph_core::stmt::{visit, Expr, Literal, PrimitiveType, Shape, Statement};
use edgegraph_core::Result;
use std::collections::HashMap;

/// Separates the segments of a parameter name.
const SEPARATOR: &str = "__";

/// Serializes statements, expressions and shapes to query text.
///
/// Parameter names are derived from where a literal sits in the statement:
/// the field or filter it belongs to, then the kind of expression that bound
/// it and a counter. The same statement always produces the same text and
/// the same names, and names from nested subqueries never collide with the
/// enclosing statement's.
#[derive(Debug, Default)]
pub struct Serializer {
    /// Prefix for every parameter name produced by this serializer.
    prefix: String,
}

struct Formatter<'a> {
    /// Where to write the serialized text
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut Params,

    /// Name prefix of the fragment currently being written
    prefix: String,

    /// Literals bound so far, per `<prefix>__<context>`
    counters: HashMap<String, usize>,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    /// A serializer whose parameter names all start with `prefix__`.
    pub fn with_prefix(prefix: impl Into<String>) -> Serializer {
        Serializer {
            prefix: prefix.into(),
        }
    }

    /// Serializes `stmt`. Fails if any literal lacks a declared type.
    pub fn serialize(&self, stmt: &Statement) -> Result<Query> {
        stmt.verify_literals()?;
        let query = self.run(|f| stmt.to_edgeql(f));

        tracing::debug!(
            kind = stmt.kind(),
            model = %stmt.model_name(),
            params = query.params.len(),
            "serialized statement"
        );
        tracing::trace!(text = %query.text);
        debug_assert_eq!(visit::count_literals(stmt), query.params.len());

        Ok(query)
    }

    pub fn serialize_expr(&self, expr: &Expr) -> Result<Query> {
        expr.verify_literals()?;
        Ok(self.run(|f| expr.to_edgeql(f)))
    }

    /// Serializes `shape`. Fails on an illegal pointer kind or an untyped
    /// literal before any text is written.
    pub fn serialize_shape(&self, shape: &Shape) -> Result<Query> {
        shape.verify()?;
        Ok(self.run(|f| shape.to_edgeql(f)))
    }

    fn run(&self, write: impl FnOnce(&mut Formatter<'_>)) -> Query {
        let mut text = String::new();
        let mut params = Params::new();

        let mut fmt = Formatter {
            dst: &mut text,
            params: &mut params,
            prefix: self.prefix.clone(),
            counters: HashMap::new(),
        };

        write(&mut fmt);

        Query::new(text, params)
    }
}

impl Formatter<'_> {
    /// Runs `f` with `segment` appended to the parameter name prefix.
    fn nested<R>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        let outer = self.prefix.len();

        if !self.prefix.is_empty() {
            self.prefix.push_str(SEPARATOR);
        }
        self.prefix.push_str(segment);

        let ret = f(self);
        self.prefix.truncate(outer);
        ret
    }

    /// `name` under the current prefix.
    fn key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}{SEPARATOR}{name}", self.prefix)
        }
    }

    /// Binds a literal created by an expression of kind `context`. The name
    /// is `<prefix>__<context>_<n>`, `n` counting earlier literals bound
    /// under the same prefix and context.
    fn bind_next(&mut self, context: &str, value: &edgegraph_core::stmt::Value) -> Placeholder {
        let base = self.key(context);
        let seq = self.counters.entry(base.clone()).or_default();
        let key = format!("{base}_{seq}");
        *seq += 1;

        self.params.insert(key, value.clone())
    }

    /// Binds a field's literal under `<prefix>__<name>`.
    fn bind_named(&mut self, name: &str, value: &edgegraph_core::stmt::Value) -> Placeholder {
        let key = self.key(name);
        self.params.insert(key, value.clone())
    }
}

/// The cast of a literal being written. Every entry point verifies literal
/// types before writing anything.
fn declared_ty(literal: &Literal) -> PrimitiveType {
    match literal.ty {
        Some(ty) => ty,
        None => unreachable!("untyped literal `{}` reached the serializer", literal.value),
    }
}

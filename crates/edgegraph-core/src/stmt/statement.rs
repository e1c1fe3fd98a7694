use super::{visit, Insert, Select, Update};
use crate::schema::{Model, ModelName};
use crate::Result;

use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    pub fn model(&self) -> &Arc<Model> {
        match self {
            Statement::Select(stmt) => &stmt.model,
            Statement::Insert(stmt) => &stmt.model,
            Statement::Update(stmt) => &stmt.model,
        }
    }

    pub fn model_name(&self) -> &ModelName {
        &self.model().name
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
        }
    }

    /// Checks that every literal in the statement, nested subqueries
    /// included, carries a declared type.
    pub fn verify_literals(&self) -> Result<()> {
        visit::verify_stmt_literals(self)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Statement {
        Statement::Select(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Statement {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Statement {
        Statement::Update(value)
    }
}

use super::SchemaValidator;
use crate::{Executor, Model, Result};

use edgegraph_core::{bail, schema};
use std::sync::Arc;

type Reflect = fn() -> Result<Arc<schema::Model>>;

/// Configures a [`SchemaValidator`].
#[derive(Debug)]
pub struct Builder {
    models: Vec<Reflect>,
    fail_fast: bool,
    max_concurrency: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            models: vec![],
            fail_fast: false,
            max_concurrency: 4,
        }
    }
}

impl Builder {
    /// Adds a declared model to validate.
    pub fn model<M: Model>(&mut self) -> &mut Self {
        self.models.push(M::reflect);
        self
    }

    /// Stop at the first finding instead of collecting all of them.
    pub fn fail_fast(&mut self, fail_fast: bool) -> &mut Self {
        self.fail_fast = fail_fast;
        self
    }

    /// How many models are introspected at the same time.
    pub fn max_concurrency(&mut self, max_concurrency: usize) -> &mut Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn build<E: Executor>(&self, executor: E) -> Result<SchemaValidator<E>> {
        if self.max_concurrency == 0 {
            bail!("max_concurrency must be at least 1");
        }

        let mut models: Vec<Arc<schema::Model>> = vec![];

        for reflect in &self.models {
            let model = reflect()?;

            if !models.iter().any(|m| m.name == model.name) {
                models.push(model);
            }
        }

        models.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(SchemaValidator {
            executor,
            models,
            fail_fast: self.fail_fast,
            max_concurrency: self.max_concurrency,
        })
    }
}

mod builder;
pub use builder::Builder;

mod catalog;
use catalog::ObjectTypeRow;

mod inspect;

use crate::{Executor, Result};

use edgegraph_core::schema;
use edgegraph_core::{Error, ValidationEntry};
use futures::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Checks declared models against the catalog of a live database.
///
/// Validation runs in two passes. The outline pass compares the set of
/// non-abstract object types in the database with the declared models. The
/// model pass then introspects each declared model, several at a time, and
/// compares its properties and links field by field. Each pass reports every
/// finding at once in a single [`Error::validation`] unless fail-fast is
/// enabled.
#[derive(Debug)]
pub struct SchemaValidator<E> {
    executor: E,
    models: Vec<Arc<schema::Model>>,
    fail_fast: bool,
    max_concurrency: usize,
}

impl SchemaValidator<()> {
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<E: Executor> SchemaValidator<E> {
    pub fn models(&self) -> &[Arc<schema::Model>] {
        &self.models
    }

    /// Runs both passes. Returns `Ok(())` when the database matches every
    /// declared model.
    pub async fn validate(&self) -> Result<()> {
        self.validate_outline().await?;
        self.validate_models().await
    }

    async fn validate_outline(&self) -> Result<()> {
        let query = catalog::outline_query()?;
        let rows = self.executor.run(&query).await?;

        let found = rows
            .into_iter()
            .map(catalog::name_row)
            .collect::<Result<Vec<_>>>()?;

        let declared = self
            .models
            .iter()
            .filter(|model| !model.is_abstract)
            .map(|model| model.name.to_string())
            .collect::<Vec<_>>();

        tracing::debug!(
            found = found.len(),
            declared = declared.len(),
            "inspected schema outline"
        );

        let entries = inspect::outline(&found, &declared);
        self.finish("outline inspection failed", entries)
    }

    async fn validate_models(&self) -> Result<()> {
        let inspections = stream::iter(self.models.iter().filter(|model| !model.is_abstract))
            .map(|model| self.inspect_model(model))
            .buffered(self.max_concurrency);

        let entries: Vec<Vec<ValidationEntry>> = if self.fail_fast {
            inspections
                .and_then(|entries| async move {
                    match self.fail_fast_entry(&entries) {
                        Some(err) => Err(err),
                        None => Ok(entries),
                    }
                })
                .try_collect()
                .await?
        } else {
            inspections.try_collect().await?
        };

        let entries = entries.into_iter().flatten().collect();
        self.finish("model inspection failed", entries)
    }

    async fn inspect_model(&self, model: &schema::Model) -> Result<Vec<ValidationEntry>> {
        let query = catalog::object_type_query(&model.name)?;
        let rows = self.executor.run(&query).await.map_err(|err| {
            Error::from(err).context(format!("failed to inspect {}", model.name))
        })?;

        let row = match rows.into_iter().next() {
            Some(row) => Some(serde_json::from_value::<ObjectTypeRow>(row)?),
            None => None,
        };

        let entries = inspect::model(model, row.as_ref());

        tracing::debug!(model = %model.name, entries = entries.len(), "inspected model");
        Ok(entries)
    }

    fn fail_fast_entry(&self, entries: &[ValidationEntry]) -> Option<Error> {
        let first = entries.first()?;
        tracing::warn!(%first, "schema validation failed");
        Some(Error::validation("model inspection failed", vec![first.clone()]))
    }

    fn finish(&self, message: &str, mut entries: Vec<ValidationEntry>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if self.fail_fast {
            entries.truncate(1);
        }

        for entry in &entries {
            tracing::warn!(%entry, "schema validation failed");
        }

        Err(Error::validation(message, entries))
    }
}

use super::{Model, ModelName};
use crate::{Error, Result};

use parking_lot::RwLock;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Process-wide table of declared models. Entries are never replaced once
/// inserted.
#[derive(Default)]
struct Registry {
    by_name: HashMap<ModelName, Arc<Model>>,
    by_type: HashMap<TypeId, Arc<Model>>,
}

fn registry() -> &'static RwLock<Registry> {
    static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

impl Registry {
    fn insert(&mut self, model: Model) -> Result<Arc<Model>> {
        if self.by_name.contains_key(&model.name) {
            return Err(Error::invalid_schema(format!(
                "model {} is already registered",
                model.name
            )));
        }

        let model = Arc::new(model);
        self.by_name.insert(model.name.clone(), model.clone());
        Ok(model)
    }
}

/// Registers a model under its qualified name.
pub fn register(model: Model) -> Result<Arc<Model>> {
    let model = registry().write().insert(model)?;
    tracing::debug!(model = %model.name, fields = model.properties.len(), "registered model");
    Ok(model)
}

pub fn lookup(name: &ModelName) -> Option<Arc<Model>> {
    registry().read().by_name.get(name).cloned()
}

/// All registered models, sorted by name.
pub fn registered() -> Vec<Arc<Model>> {
    let mut models: Vec<_> = registry().read().by_name.values().cloned().collect();
    models.sort_by(|a, b| a.name.cmp(&b.name));
    models
}

/// Returns the model registered for the Rust type `T`, declaring and
/// registering it on first use.
///
/// `declare` runs without holding the registry lock so it may itself reflect
/// other types (a base model, for example).
pub fn reflect_type<T: 'static>(declare: impl FnOnce() -> Result<Model>) -> Result<Arc<Model>> {
    let type_id = TypeId::of::<T>();

    if let Some(model) = registry().read().by_type.get(&type_id) {
        return Ok(model.clone());
    }

    let model = declare()?;

    let mut registry = registry().write();

    // Another thread may have won the race while `declare` ran.
    if let Some(model) = registry.by_type.get(&type_id) {
        return Ok(model.clone());
    }

    let model = registry.insert(model)?;
    registry.by_type.insert(type_id, model.clone());

    tracing::debug!(
        model = %model.name,
        rust_type = std::any::type_name::<T>(),
        "reflected model"
    );

    Ok(model)
}

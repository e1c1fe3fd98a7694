use super::{Formatter, ToEdgeql};

use edgegraph_core::stmt::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// Named parameters of a built query, in the order they were bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, Value>,
}

/// A reference to a bound parameter, written as `$name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(pub String);

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    pub(super) fn insert(&mut self, key: String, value: Value) -> Placeholder {
        debug_assert!(
            !self.values.contains_key(&key),
            "parameter `{key}` bound twice"
        );
        self.values.insert(key.clone(), value);
        Placeholder(key)
    }

    #[cfg(test)]
    pub(crate) fn insert_for_test(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl ToEdgeql for Placeholder {
    fn to_edgeql(self, f: &mut Formatter<'_>) {
        f.dst.push('$');
        f.dst.push_str(&self.0);
    }
}

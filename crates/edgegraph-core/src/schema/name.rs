use std::fmt;

/// The qualified name of a declared model, e.g. `default::Memo`.
///
/// This is the identity used for context checks: two models are the same
/// model exactly when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelName {
    pub module: String,
    pub name: String,
}

impl ModelName {
    pub const DEFAULT_MODULE: &'static str = "default";

    pub fn new(module: impl Into<String>, name: impl Into<String>) -> ModelName {
        ModelName {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Parses `module::Name`. A bare name lands in the `default` module.
    /// Nested modules keep everything before the last `::`.
    pub fn parse(src: &str) -> ModelName {
        match src.rsplit_once("::") {
            Some((module, name)) => ModelName::new(module, name),
            None => ModelName::new(Self::DEFAULT_MODULE, src),
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

impl From<&str> for ModelName {
    fn from(src: &str) -> ModelName {
        ModelName::parse(src)
    }
}

impl From<&ModelName> for ModelName {
    fn from(src: &ModelName) -> ModelName {
        src.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::ModelName;

    #[test]
    fn parse_qualified_and_bare_names() {
        assert_eq!(
            ModelName::parse("default::Memo"),
            ModelName::new("default", "Memo")
        );
        assert_eq!(ModelName::parse("User"), ModelName::new("default", "User"));
        assert_eq!(
            ModelName::parse("std::cal::Thing").to_string(),
            "std::cal::Thing"
        );
    }
}

use crate::stmt::{Expr, Literal, PrimitiveType, Select};
use crate::{Model, Query, Result};

use edgegraph_core::schema::{self, FieldTy, ModelName};
use serde::Deserialize;

/// Modules owned by the database itself.
const SYSTEM_MODULES: [&str; 4] = ["cfg", "std", "sys", "schema"];

/// `schema::ObjectType` from the database catalog.
pub(super) struct ObjectType;

/// `schema::Link` from the database catalog.
pub(super) struct Link;

/// `schema::Property` from the database catalog.
pub(super) struct Property;

impl Model for ObjectType {
    fn declare() -> Result<schema::Model> {
        schema::Model::builder("schema", "ObjectType")
            .field("name", PrimitiveType::Str)
            .field("abstract", PrimitiveType::Bool)
            .field("links", FieldTy::list(FieldTy::link("schema::Link")))
            .field("properties", FieldTy::list(FieldTy::link("schema::Property")))
            .build()
    }
}

impl Model for Link {
    fn declare() -> Result<schema::Model> {
        schema::Model::builder("schema", "Link")
            .field("name", PrimitiveType::Str)
            .field("cardinality", PrimitiveType::Str)
            .field("required", PrimitiveType::Bool)
            .field("target", FieldTy::link("schema::ObjectType"))
            .build()
    }
}

impl Model for Property {
    fn declare() -> Result<schema::Model> {
        schema::Model::builder("schema", "Property")
            .field("name", PrimitiveType::Str)
            .field("cardinality", PrimitiveType::Str)
            .field("required", PrimitiveType::Bool)
            .build()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ObjectTypeRow {
    #[serde(rename = "abstract", default)]
    pub(super) is_abstract: bool,

    #[serde(default)]
    pub(super) links: Vec<PointerRow>,

    #[serde(default)]
    pub(super) properties: Vec<PointerRow>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PointerRow {
    pub(super) name: String,

    /// `One` or `Many`
    #[serde(default)]
    pub(super) cardinality: Option<String>,
}

/// Lists every user-defined, non-abstract object type.
pub(super) fn outline_query() -> Result<Query> {
    let name = ObjectType::field("name")?;

    let mut select = ObjectType::select()?
        .field(&name)?
        .filter(Expr::eq(ObjectType::field("abstract")?, Literal::bool(false))?)?;

    for module in SYSTEM_MODULES {
        let pattern = Literal::str(format!("{module}::%"));
        select = select.filter(Expr::not_like(&name, pattern)?)?;
    }

    select.build()
}

pub(super) fn name_row(row: serde_json::Value) -> Result<String> {
    #[derive(Deserialize)]
    struct NameRow {
        name: String,
    }

    Ok(serde_json::from_value::<NameRow>(row)?.name)
}

/// Introspects the object type named `name`, with its links and properties.
pub(super) fn object_type_query(name: &ModelName) -> Result<Query> {
    let links = Select::<Link>::new()?.fields([Link::field("name")?, Link::field("cardinality")?])?;

    let properties = Select::<Property>::new()?
        .fields([Property::field("name")?, Property::field("cardinality")?])?;

    let select = ObjectType::select()?
        .fields([ObjectType::field("name")?, ObjectType::field("abstract")?])?
        .subquery(ObjectType::field("links")?, links)?
        .subquery(ObjectType::field("properties")?, properties)?
        .filter(Expr::eq(
            ObjectType::field("name")?,
            Literal::str(name.to_string()),
        )?)?
        .limit(1);

    select.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_query_excludes_system_modules() {
        let query = outline_query().unwrap();

        assert_eq!(
            query.text,
            "select schema::ObjectType {\n\
             name,\n\
             }\n\
             filter .abstract = <bool>$filter_0__equation_0 \
             and .name not like <str>$filter_1__like_0 \
             and .name not like <str>$filter_2__like_0 \
             and .name not like <str>$filter_3__like_0 \
             and .name not like <str>$filter_4__like_0\n"
        );
        assert_eq!(
            query.params.get("filter_4__like_0").and_then(|v| v.as_str()),
            Some("schema::%")
        );
    }

    #[test]
    fn object_type_query_projects_pointers() {
        let query = object_type_query(&ModelName::parse("default::Memo")).unwrap();

        assert_eq!(
            query.text,
            "select schema::ObjectType {\n\
             abstract,\n\
             links: {\n\
             cardinality,\n\
             name,\n\
             },\n\
             name,\n\
             properties: {\n\
             cardinality,\n\
             name,\n\
             },\n\
             }\n\
             filter .name = <str>$filter_0__equation_0\n\
             limit 1\n"
        );
        assert_eq!(
            query.params.get("filter_0__equation_0").and_then(|v| v.as_str()),
            Some("default::Memo")
        );
    }
}

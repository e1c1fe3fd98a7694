use super::catalog::ObjectTypeRow;

use edgegraph_core::schema::{self, ModelName};
use edgegraph_core::ValidationEntry;

/// Pointers every object type has without declaring them.
const IMPLICIT_POINTERS: [&str; 1] = ["__type__"];

/// Compares the qualified names found in the database with the declared ones.
pub(super) fn outline(found: &[String], declared: &[String]) -> Vec<ValidationEntry> {
    let mut entries = vec![];

    if found.len() != declared.len() {
        entries.push(ValidationEntry::new(format!(
            "{} models found in database, {} expected",
            found.len(),
            declared.len()
        )));
    }

    for name in found {
        if !declared.contains(name) {
            let parsed = ModelName::parse(name);
            entries.push(
                ValidationEntry::new(format!("{name} is not declared"))
                    .model(parsed.module, parsed.name),
            );
        }
    }

    entries
}

/// Compares one declared model with its catalog entry.
pub(super) fn model(model: &schema::Model, row: Option<&ObjectTypeRow>) -> Vec<ValidationEntry> {
    let entry =
        |message: String| ValidationEntry::new(message).model(model.module(), model.type_name());

    let Some(row) = row else {
        return vec![entry(format!(
            "{} can't be inspected in database",
            model.name
        ))];
    };

    let mut entries = vec![];

    if row.is_abstract {
        entries.push(entry(format!("{} is an abstract type", model.name)));
    }

    let catalog = row
        .links
        .iter()
        .chain(&row.properties)
        .map(|pointer| pointer.name.as_str())
        .filter(|name| !IMPLICIT_POINTERS.contains(name))
        .collect::<Vec<_>>();

    let before = entries.len();

    if catalog.len() != model.properties.len() {
        entries.push(entry(format!(
            "{} properties and links found in database, {} declared",
            catalog.len(),
            model.properties.len()
        )));
    }

    for name in &catalog {
        if !model.contains(name) {
            entries.push(entry(format!("{name} is not declared")).property(*name));
        }
    }

    // Field checks only make sense once both sides list the same pointers.
    if entries.len() > before {
        return entries;
    }

    for property in model.properties() {
        let pointers = if property.is_link() {
            &row.links
        } else {
            &row.properties
        };

        let Some(pointer) = pointers.iter().find(|pointer| pointer.name == property.name) else {
            entries.push(
                entry(format!("{} not found in database", property.name))
                    .property(&property.name),
            );
            continue;
        };

        if !property.is_link() {
            continue;
        }

        let expected = if property.multi { "Many" } else { "One" };
        let actual = pointer.cardinality.as_deref().unwrap_or("unknown");

        if actual != expected {
            entries.push(
                entry(format!(
                    "cardinality is {actual} in database, declared as {expected}"
                ))
                .property(&property.name),
            );
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgegraph_core::schema::FieldTy;
    use edgegraph_core::stmt::PrimitiveType;
    use serde_json::json;

    fn user() -> schema::Model {
        schema::Model::builder("default", "User")
            .field("id", PrimitiveType::Uuid)
            .field("name", PrimitiveType::Str)
            .field("friends", FieldTy::list(FieldTy::link("default::User")))
            .build()
            .unwrap()
    }

    fn row(value: serde_json::Value) -> ObjectTypeRow {
        serde_json::from_value(value).unwrap()
    }

    fn messages(entries: &[ValidationEntry]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn outline_reports_count_and_undeclared_types() {
        let found = vec!["default::User".to_string(), "default::Memo".to_string()];
        let declared = vec!["default::User".to_string()];

        assert_eq!(
            messages(&outline(&found, &declared)),
            [
                "2 models found in database, 1 expected",
                "default::Memo: default::Memo is not declared",
            ]
        );
        assert!(outline(&declared, &declared).is_empty());
    }

    #[test]
    fn matching_model_has_no_entries() {
        let row = row(json!({
            "name": "default::User",
            "abstract": false,
            "links": [
                { "name": "__type__", "cardinality": "One" },
                { "name": "friends", "cardinality": "Many" },
            ],
            "properties": [
                { "name": "id", "cardinality": "One" },
                { "name": "name", "cardinality": "One" },
            ],
        }));

        assert!(model(&user(), Some(&row)).is_empty());
    }

    #[test]
    fn missing_type() {
        assert_eq!(
            messages(&model(&user(), None)),
            ["default::User: default::User can't be inspected in database"]
        );
    }

    #[test]
    fn undeclared_pointer_stops_field_checks() {
        let row = row(json!({
            "abstract": true,
            "links": [{ "name": "friends", "cardinality": "One" }],
            "properties": [
                { "name": "id" },
                { "name": "name" },
                { "name": "nickname" },
            ],
        }));

        assert_eq!(
            messages(&model(&user(), Some(&row))),
            [
                "default::User: default::User is an abstract type",
                "default::User: 4 properties and links found in database, 3 declared",
                "default::User.nickname: nickname is not declared",
            ]
        );
    }

    #[test]
    fn link_cardinality_and_misplaced_pointer() {
        let row = row(json!({
            "links": [{ "name": "friends", "cardinality": "One" }],
            "properties": [{ "name": "id" }],
            "extra": [{ "name": "name" }],
        }));

        // `name` is missing from both lists, so the counts differ first.
        assert_eq!(
            messages(&model(&user(), Some(&row))),
            ["default::User: 2 properties and links found in database, 3 declared"]
        );

        let row = self::row(json!({
            "links": [
                { "name": "friends", "cardinality": "One" },
                { "name": "name", "cardinality": "One" },
            ],
            "properties": [{ "name": "id" }],
        }));

        assert_eq!(
            messages(&model(&user(), Some(&row))),
            [
                "default::User.name: name not found in database",
                "default::User.friends: cardinality is One in database, declared as Many",
            ]
        );
    }
}

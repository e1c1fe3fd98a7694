use edgegraph_core::schema::{FieldTy, Model};
use edgegraph_core::stmt::{
    AssignOp, Expr, FieldInput, Insert, Literal, PrimitiveType, Select, SelectFieldKind,
    Statement, Update,
};
use edgegraph_ql::Serializer;

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;

fn user() -> Arc<Model> {
    Arc::new(
        Model::builder("default", "User")
            .field("id", PrimitiveType::Uuid)
            .field("name", PrimitiveType::Str)
            .field("age", PrimitiveType::Int32)
            .field("friends", FieldTy::list(FieldTy::link("default::User")))
            .build()
            .unwrap(),
    )
}

fn named(user: &Arc<Model>, name: &str) -> Select {
    let mut select = Select::new(user.clone());
    select
        .add_field(user.property("id").unwrap(), SelectFieldKind::Plain)
        .unwrap();
    select
        .add_filter(Expr::eq(user.property("name").unwrap(), Literal::str(name)).unwrap())
        .unwrap();
    select
        .add_filter(
            Expr::ge(
                user.property("age").unwrap(),
                Literal::new(18, PrimitiveType::Int32),
            )
            .unwrap(),
        )
        .unwrap();
    select
}

/// A statement with literals at several nesting levels.
fn statement() -> Statement {
    let user = user();
    let mut update = Update::new(user.clone());

    update.set_target(named(&user, "alice")).unwrap();
    update
        .add_field(
            user.property("name").unwrap(),
            FieldInput::value("alice", PrimitiveType::Str),
            AssignOp::Assign,
        )
        .unwrap();
    update
        .add_field(
            user.property("friends").unwrap(),
            FieldInput::subquery(named(&user, "bob")),
            AssignOp::Append,
        )
        .unwrap();

    update.into()
}

#[test]
fn serialization_is_deterministic() {
    let stmt = statement();

    let first = Serializer::new().serialize(&stmt).unwrap();
    let second = Serializer::new().serialize(&stmt).unwrap();

    assert_eq!(first, second);
}

#[test]
fn placeholders_match_params() {
    let query = Serializer::new().serialize(&statement()).unwrap();

    let placeholders: BTreeSet<_> = query.placeholders().into_iter().collect();
    let keys: BTreeSet<_> = query.params.keys().collect();

    assert_eq!(placeholders, keys);
    assert_eq!(query.params.len(), 5);
}

#[test]
fn prefixed_names_do_not_collide() {
    let stmt = statement();

    let plain = Serializer::new().serialize(&stmt).unwrap();
    let prefixed = Serializer::with_prefix("F").serialize(&stmt).unwrap();

    assert_eq!(plain.params.len(), prefixed.params.len());
    for key in prefixed.params.keys() {
        assert!(key.starts_with("F__"), "{key}");
        assert!(!plain.params.contains_key(key), "{key}");
    }
}

#[test]
fn params_serialize_as_a_json_object() {
    let user = user();
    let mut insert = Insert::new(user.clone());
    insert
        .add_field(
            user.property("name").unwrap(),
            FieldInput::value("carol", PrimitiveType::Str),
        )
        .unwrap();
    insert
        .add_field(
            user.property("age").unwrap(),
            FieldInput::value(30, PrimitiveType::Int32),
        )
        .unwrap();

    let query = Serializer::new().serialize(&insert.into()).unwrap();

    assert_eq!(
        serde_json::to_value(&query.params).unwrap(),
        serde_json::json!({ "age": 30, "name": "carol" })
    );
}

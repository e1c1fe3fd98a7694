use chrono::{TimeZone, Utc};
use edgegraph_core::schema::{FieldTy, Model};
use edgegraph_core::stmt::{
    Expr, FieldInput, Insert, Literal, PrimitiveType, Select, SelectFieldKind, Statement, Value,
};
use edgegraph_ql::Serializer;

use pretty_assertions::assert_eq;
use std::sync::Arc;

fn user() -> Arc<Model> {
    Arc::new(
        Model::builder("default", "User")
            .field("id", PrimitiveType::Uuid)
            .field("email", PrimitiveType::Str)
            .build()
            .unwrap(),
    )
}

fn memo() -> Arc<Model> {
    Arc::new(
        Model::builder("default", "Memo")
            .field("id", PrimitiveType::Uuid)
            .field("title", PrimitiveType::Str)
            .field("content", PrimitiveType::Str)
            .field("created_at", PrimitiveType::DateTime)
            .field("created_by", FieldTy::link("default::User"))
            .build()
            .unwrap(),
    )
}

#[test]
fn insert_literals() {
    let memo = memo();
    let date = Utc.with_ymd_and_hms(2023, 4, 1, 9, 30, 0).unwrap();
    let mut insert = Insert::new(memo.clone());

    insert
        .add_field(
            memo.property("content").unwrap(),
            FieldInput::value("Some Memo", PrimitiveType::STRING),
        )
        .unwrap();
    insert
        .add_field(
            memo.property("created_at").unwrap(),
            FieldInput::value(date, PrimitiveType::DateTime),
        )
        .unwrap();

    let query = Serializer::new().serialize(&Statement::from(insert)).unwrap();

    assert_eq!(
        query.text,
        "insert default::Memo {\n\
         content: <str>$content,\n\
         created_at: <datetime>$created_at,\n\
         }\n"
    );
    assert_eq!(query.params.len(), 2);
    assert_eq!(query.params.get("content"), Some(&Value::from("Some Memo")));
    assert_eq!(query.params.get("created_at"), Some(&Value::from(date)));
}

#[test]
fn insert_with_subquery_conflict_and_alternate() {
    let memo = memo();
    let user = user();

    let mut author = Select::new(user.clone());
    author
        .add_field(user.property("id").unwrap(), SelectFieldKind::Plain)
        .unwrap();
    author
        .add_filter(
            Expr::eq(user.property("email").unwrap(), Literal::str("a@b.c")).unwrap(),
        )
        .unwrap();

    let mut existing = Select::new(memo.clone());
    existing
        .add_field(memo.property("id").unwrap(), SelectFieldKind::Plain)
        .unwrap();
    existing
        .add_filter(
            Expr::eq(memo.property("title").unwrap(), Literal::str("Hello")).unwrap(),
        )
        .unwrap();

    let mut insert = Insert::new(memo.clone());
    insert
        .add_field(
            memo.property("title").unwrap(),
            FieldInput::value("Hello", PrimitiveType::Str),
        )
        .unwrap();
    insert
        .add_field(
            memo.property("created_by").unwrap(),
            FieldInput::subquery(author),
        )
        .unwrap();
    insert
        .unless_conflict([".title", ".content", "title"], Some(existing.into()))
        .unwrap();

    let query = Serializer::new().serialize(&Statement::from(insert)).unwrap();

    assert_eq!(
        query.text,
        "insert default::Memo {\n\
         created_by: (\n\
         select default::User {\n\
         id,\n\
         }\n\
         filter .email = <str>$created_by__filter_0__equation_0\n\
         ),\n\
         title: <str>$title,\n\
         }\n\
         unless conflict on (.content, .title)\n\
         else (\n\
         select default::Memo {\n\
         id,\n\
         }\n\
         filter .title = <str>$else__filter_0__equation_0\n\
         )\n"
    );
    assert_eq!(
        query.params.keys().collect::<Vec<_>>(),
        [
            "created_by__filter_0__equation_0",
            "title",
            "else__filter_0__equation_0"
        ]
    );
}

#[test]
fn insert_expression_is_prefixed_with_the_field() {
    let memo = memo();
    let mut insert = Insert::new(memo.clone());

    let now = Expr::invoke(Some("std"), "datetime_current", Vec::<Expr>::new()).unwrap();
    insert
        .add_field(memo.property("created_at").unwrap(), FieldInput::expr(now))
        .unwrap();

    let title = Expr::invoke(
        Some("str"),
        "str_upper",
        [Expr::from(Literal::str("hello"))],
    )
    .unwrap();
    insert
        .add_field(memo.property("title").unwrap(), FieldInput::expr(title))
        .unwrap();

    let query = Serializer::new().serialize(&Statement::from(insert)).unwrap();

    assert_eq!(
        query.text,
        "insert default::Memo {\n\
         created_at: std::datetime_current(),\n\
         title: str::str_upper(<str>$title__invoke_0),\n\
         }\n"
    );
}

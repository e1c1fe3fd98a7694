use edgegraph_core::schema::{FieldTy, Model};
use edgegraph_core::stmt::{
    AssignOp, Expr, FieldInput, Literal, PrimitiveType, Select, Update,
};

use std::sync::Arc;

fn user() -> Arc<Model> {
    Arc::new(
        Model::builder("default", "User")
            .field("name", PrimitiveType::Str)
            .field("deleted", PrimitiveType::Bool)
            .field("friends", FieldTy::list(FieldTy::link("default::User")))
            .build()
            .unwrap(),
    )
}

fn memo() -> Arc<Model> {
    Arc::new(
        Model::builder("default", "Memo")
            .field("content", PrimitiveType::Str)
            .build()
            .unwrap(),
    )
}

fn name_filter(user: &Model, name: &str) -> Expr {
    Expr::eq(
        user.property("name").unwrap(),
        Literal::new(name, PrimitiveType::Str),
    )
    .unwrap()
}

#[test]
fn target_then_filter_is_rejected() {
    let user = user();
    let mut update = Update::new(user.clone());

    update.set_target(Select::new(user.clone())).unwrap();
    let err = update.add_filter(name_filter(&user, "alice")).unwrap_err();

    assert!(err.is_invalid_condition());
}

#[test]
fn filter_then_target_is_rejected() {
    let user = user();
    let mut update = Update::new(user.clone());

    update.add_filter(name_filter(&user, "alice")).unwrap();
    let err = update.set_target(Select::new(user.clone())).unwrap_err();

    assert!(err.is_invalid_condition());
}

#[test]
fn target_must_select_the_same_model() {
    let user = user();
    let mut update = Update::new(user);

    let err = update.set_target(Select::new(memo())).unwrap_err();
    assert!(err.is_context_mismatch());
}

#[test]
fn append_is_normalized_for_literals() {
    let user = user();
    let mut update = Update::new(user.clone());

    update
        .add_field(
            user.property("deleted").unwrap(),
            FieldInput::value(true, PrimitiveType::Bool),
            AssignOp::Append,
        )
        .unwrap();

    let mut friends = Select::new(user.clone());
    friends.add_filter(name_filter(&user, "bob")).unwrap();
    update
        .add_field(
            user.property("friends").unwrap(),
            FieldInput::subquery(friends),
            AssignOp::Append,
        )
        .unwrap();

    assert_eq!(update.fields[0].op, AssignOp::Assign);
    assert_eq!(update.fields[1].op, AssignOp::Append);
}

#[test]
fn duplicate_field_is_rejected() {
    let user = user();
    let mut update = Update::new(user.clone());
    let name = user.property("name").unwrap();

    update
        .add_field(name, FieldInput::value("a", PrimitiveType::Str), AssignOp::Assign)
        .unwrap();
    let err = update
        .add_field(name, FieldInput::value("b", PrimitiveType::Str), AssignOp::Assign)
        .unwrap_err();

    assert!(err.is_duplicate_field());
}

#[test]
fn expression_must_be_rooted_in_the_updated_model() {
    let user = user();
    let memo = memo();
    let content = memo.property("content").unwrap();
    let mut update = Update::new(memo.clone());

    let err = update
        .add_field(
            content,
            FieldInput::expr(Expr::from(user.property("name").unwrap())),
            AssignOp::Assign,
        )
        .unwrap_err();
    assert!(err.is_context_mismatch());
    assert!(update.fields.is_empty());

    let suffixed = Expr::side(content, "++", Literal::new("!", PrimitiveType::Str)).unwrap();
    update
        .add_field(content, FieldInput::expr(suffixed), AssignOp::Assign)
        .unwrap();
    assert_eq!(update.fields.len(), 1);
}

use edgegraph_core::schema::{FieldTy, Model};
use edgegraph_core::stmt::{
    Expr, Literal, Pointer, PrimitiveType, Select, SelectFieldKind, Shape, ShapeContext, ShapeItem,
    ShapeValue, Statement, Value,
};
use edgegraph_ql::Serializer;

use pretty_assertions::assert_eq;
use std::sync::Arc;

fn user() -> Model {
    Model::builder("default", "User")
        .field("id", PrimitiveType::Uuid)
        .field("name", PrimitiveType::Str)
        .field("email", PrimitiveType::Str)
        .field("friends", FieldTy::list(FieldTy::link("default::User")))
        .build()
        .unwrap()
}

#[test]
fn select_shape() {
    let user = user();
    let name = user.property("name").unwrap();

    let shape = Shape::select()
        .item(ShapeItem::field(name))
        .unwrap()
        .item(ShapeItem::linked(
            "friends",
            Shape::select().item(ShapeItem::field("email")).unwrap(),
        ))
        .unwrap()
        .item(ShapeItem::assign("name_len", Expr::len(name).unwrap()))
        .unwrap();

    let query = Serializer::new().serialize_shape(&shape).unwrap();

    assert_eq!(
        query.text,
        "{\n\
         name,\n\
         friends: {\n\
         email,\n\
         },\n\
         name_len := std::len(.name),\n\
         }"
    );
    assert!(query.params.is_empty());
}

#[test]
fn upsert_shape_binds_literals_and_subqueries() {
    let user = Arc::new(user());

    let mut bob = Select::new(user.clone());
    bob.add_field(user.property("id").unwrap(), SelectFieldKind::Plain)
        .unwrap();
    bob.add_filter(Expr::eq(user.property("name").unwrap(), Literal::str("bob")).unwrap())
        .unwrap();

    let shape = Shape::upsert()
        .item(ShapeItem::assign("name", Literal::str("alice")))
        .unwrap()
        .item(ShapeItem::append("friends", Statement::from(bob)))
        .unwrap();

    let query = Serializer::new().serialize_shape(&shape).unwrap();

    assert_eq!(
        query.text,
        "{\n\
         name := <str>$name_0,\n\
         friends += (\n\
         select default::User {\n\
         id,\n\
         }\n\
         filter .name = <str>$friends__filter_0__equation_0\n\
         ),\n\
         }"
    );
    assert_eq!(query.params.get("name_0"), Some(&Value::from("alice")));
    assert_eq!(
        query.params.get("friends__filter_0__equation_0"),
        Some(&Value::from("bob"))
    );
}

#[test]
fn illegal_pointer_is_rejected_before_writing() {
    let user = user();
    let name = user.property("name").unwrap();

    let mut shape = Shape::select();
    shape.items.push(ShapeItem::new(
        "name_len",
        Pointer::None,
        Some(ShapeValue::Expr(Expr::len(name).unwrap())),
    ));

    let err = Serializer::new().serialize_shape(&shape).unwrap_err();
    assert!(err.is_illegal_pointer());

    let mut nested = Shape::select();
    nested.items.push(ShapeItem::linked(
        "friends",
        Shape {
            context: ShapeContext::Select,
            items: vec![ShapeItem::append("friends", Literal::str("bob"))],
        },
    ));

    let err = Serializer::new().serialize_shape(&nested).unwrap_err();
    assert!(err.is_illegal_pointer());
}

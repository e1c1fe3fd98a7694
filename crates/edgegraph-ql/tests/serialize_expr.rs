use edgegraph_core::schema::{FieldTy, Model};
use edgegraph_core::stmt::{Expr, Literal, PrimitiveType, Value};
use edgegraph_ql::Serializer;

use pretty_assertions::assert_eq;

fn memo() -> Model {
    Model::builder("default", "Memo")
        .field("title", FieldTy::optional(PrimitiveType::Str))
        .field("content", PrimitiveType::Str)
        .field("tags", FieldTy::list(PrimitiveType::Str))
        .field("created_by", FieldTy::link("default::User"))
        .build()
        .unwrap()
}

fn user() -> Model {
    Model::builder("default", "User")
        .field("name", PrimitiveType::Str)
        .build()
        .unwrap()
}

#[test]
fn path_through_link() {
    let memo = memo();
    let user = user();
    let path = Expr::path([
        memo.property("created_by").unwrap(),
        user.property("name").unwrap(),
    ])
    .unwrap();

    let query = Serializer::new().serialize_expr(&path).unwrap();
    assert_eq!(query.text, ".created_by.name");
    assert!(query.params.is_empty());
}

#[test]
fn literals_in_the_same_context_are_numbered() {
    let memo = memo();
    let expr = Expr::and(
        Expr::eq(memo.property("content").unwrap(), Literal::str("a")).unwrap(),
        Expr::eq(memo.property("title").unwrap(), Literal::str("b")).unwrap(),
    );

    let query = Serializer::new().serialize_expr(&expr).unwrap();

    assert_eq!(
        query.text,
        ".content = <str>$equation_0 and .title = <str>$equation_1"
    );
    assert_eq!(query.params.get("equation_0"), Some(&Value::from("a")));
    assert_eq!(query.params.get("equation_1"), Some(&Value::from("b")));
}

#[test]
fn side_operands() {
    let memo = memo();
    let content = memo.property("content").unwrap();

    let concat = Expr::side(content, "++", Literal::str("!")).unwrap();
    assert_eq!(
        Serializer::new().serialize_expr(&concat).unwrap().text,
        ".content ++ <str>$equation_0"
    );

    let sum = Expr::side(
        Expr::len(content).unwrap(),
        "+",
        Literal::new(1i64, PrimitiveType::Int64),
    )
    .unwrap();
    assert_eq!(
        Serializer::new().serialize_expr(&sum).unwrap().text,
        "(std::len(.content)) + <int64>$equation_0"
    );
}

#[test]
fn coalesce_and_invoke() {
    let memo = memo();
    let title = memo.property("title").unwrap();

    let fallback = Expr::coalesce(title, Literal::str("untitled")).unwrap();
    assert_eq!(
        Serializer::new().serialize_expr(&fallback).unwrap().text,
        ".title ?? <str>$coalesce_0"
    );

    let found = Expr::contains(title, Literal::str("rust")).unwrap();
    assert_eq!(
        Serializer::new().serialize_expr(&found).unwrap().text,
        "std::contains(.title, <str>$invoke_0)"
    );

    let count = Expr::invoke(None, "count", [memo.property("tags").unwrap()]).unwrap();
    assert_eq!(Serializer::new().serialize_expr(&count).unwrap().text, "::count(.tags)");
}

#[test]
fn membership_binds_an_array() {
    let memo = memo();
    let expr = Expr::not_in_list(
        memo.property("content").unwrap(),
        Literal::new(vec!["a", "b"], PrimitiveType::Str),
    )
    .unwrap();

    let query = Serializer::new().serialize_expr(&expr).unwrap();

    assert_eq!(query.text, ".content not in <array<str>>$in_0");
    assert_eq!(
        query.params.get("in_0"),
        Some(&Value::from(vec!["a", "b"]))
    );
}

#[test]
fn like_patterns() {
    let memo = memo();
    let expr = Expr::or(
        Expr::ilike(memo.property("content").unwrap(), Literal::untyped("%rust%")).unwrap(),
        Expr::not_like(memo.property("title").unwrap(), Literal::str("Draft%")).unwrap(),
    );

    assert_eq!(
        Serializer::new().serialize_expr(&expr).unwrap().text,
        ".content ilike <str>$like_0 or .title not like <str>$like_1"
    );
}

#[test]
fn unary_and_set_operators() {
    let memo = memo();
    let created_by = memo.property("created_by").unwrap();
    let title = memo.property("title").unwrap();
    let content = memo.property("content").unwrap();

    let missing = Expr::not(Expr::exists(created_by));
    assert_eq!(
        Serializer::new().serialize_expr(&missing).unwrap().text,
        "not exists .created_by"
    );

    let distinct = Expr::distinct(Expr::scope(Expr::union(title, content)));
    assert_eq!(
        Serializer::new().serialize_expr(&distinct).unwrap().text,
        "distinct (.title union .content)"
    );
}

#[test]
fn bare_literal() {
    let expr = Expr::literal(true, PrimitiveType::Bool);
    let query = Serializer::new().serialize_expr(&expr).unwrap();

    assert_eq!(query.text, "<bool>$literal_0");
    assert_eq!(query.params.get("literal_0"), Some(&Value::Bool(true)));
}

#[test]
fn untyped_literals_are_not_serialized() {
    let memo = memo();
    let title = memo.property("title").unwrap();

    for expr in [
        Expr::not(Literal::untyped(3)),
        Expr::or(title, Literal::untyped("a")),
        Expr::exists(Expr::scope(Literal::untyped(true))),
    ] {
        let err = Serializer::new().serialize_expr(&expr).unwrap_err();
        assert!(err.is_missing_specification(), "{expr}");
    }
}

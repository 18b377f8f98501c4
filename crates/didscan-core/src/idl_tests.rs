use crate::{Colors, Mode, Primitive, ProcedureSignature, TypeExpr};

#[test]
fn mode_from_keyword() {
    assert_eq!(Mode::from_keyword("query"), Some(Mode::Query));
    assert_eq!(Mode::from_keyword("update"), Some(Mode::Update));
    assert_eq!(Mode::from_keyword("Query"), None);
    assert_eq!(Mode::from_keyword("composite_query"), None);
    assert_eq!(Mode::from_keyword(""), None);
}

#[test]
fn mode_display() {
    assert_eq!(Mode::Query.to_string(), "query");
    assert_eq!(Mode::Update.to_string(), "update");
}

#[test]
fn primitive_idl_names() {
    let cases = [
        (Primitive::Text, "text"),
        (Primitive::Bool, "bool"),
        (Primitive::Nat8, "nat8"),
        (Primitive::Nat16, "nat16"),
        (Primitive::Nat32, "nat32"),
        (Primitive::Nat64, "nat64"),
        (Primitive::Nat, "nat"),
        (Primitive::Int8, "int8"),
        (Primitive::Int16, "int16"),
        (Primitive::Int32, "int32"),
        (Primitive::Int64, "int64"),
        (Primitive::Int, "int"),
        (Primitive::Float32, "float32"),
        (Primitive::Float64, "float64"),
        (Primitive::Principal, "principal"),
        (Primitive::Empty, "empty"),
        (Primitive::Reserved, "reserved"),
    ];
    for (primitive, name) in cases {
        assert_eq!(primitive.idl_name(), name);
        assert_eq!(primitive.to_string(), name);
    }
}

#[test]
fn opaque_tokens_collects_nested_leaves() {
    let ty = TypeExpr::optional(TypeExpr::vector(TypeExpr::Opaque("MyRecord".into())));
    assert_eq!(ty.opaque_tokens(), vec!["MyRecord"]);

    let known = TypeExpr::vector(TypeExpr::ByteVector);
    assert!(known.opaque_tokens().is_empty());
}

#[test]
fn nested_unit_counts_as_opaque() {
    let ty = TypeExpr::vector(TypeExpr::optional(TypeExpr::Unit));
    assert_eq!(ty.opaque_tokens(), vec!["()"]);
    assert!(TypeExpr::Unit.opaque_tokens().is_empty());
}

#[test]
fn unit_detection() {
    assert!(TypeExpr::Unit.is_unit());
    assert!(!TypeExpr::Primitive(Primitive::Text).is_unit());
    assert!(!TypeExpr::optional(TypeExpr::Unit).is_unit());
}

#[test]
fn signature_serializes_with_tagged_types() {
    let sig = ProcedureSignature {
        mode: Mode::Update,
        exported_name: "store_blob".into(),
        parameters: vec![TypeExpr::ByteVector],
        return_type: TypeExpr::optional(TypeExpr::Primitive(Primitive::Nat64)),
    };
    let json = serde_json::to_string(&sig).unwrap();
    assert_eq!(
        json,
        r#"{"mode":"update","exported_name":"store_blob","parameters":[{"kind":"byte_vector"}],"return_type":{"kind":"optional","of":{"kind":"primitive","of":"nat64"}}}"#
    );
}

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::default(), Colors::OFF);
}

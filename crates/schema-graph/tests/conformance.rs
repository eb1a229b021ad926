//! Interface conformance and concrete-type dispatch.

use graphql_schema_graph::{
    BuildError, InputValue, ResolveTypeFn, ResolverFn, SchemaBuilder, TypeRef,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

trait Identifiable {
    fn id(&self) -> &str;
}

struct Account {
    id: String,
}

impl Identifiable for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

struct AuditLog;

impl Identifiable for AuditLog {
    fn id(&self) -> &str {
        "audit"
    }
}

fn null_resolver() -> ResolverFn {
    Arc::new(|_| Ok(serde_json::Value::Null))
}

fn dispatch_by_variant() -> ResolveTypeFn {
    Arc::new(|value| {
        if value.downcast_ref::<Account>().is_some() {
            Some("Account".to_owned())
        } else if value.downcast_ref::<AuditLog>().is_some() {
            Some("AuditLog".to_owned())
        } else {
            None
        }
    })
}

/// A builder with the `Node` interface and a conforming `Account` object, but
/// without root fields.
fn node_schema() -> SchemaBuilder {
    let mut builder = SchemaBuilder::new();

    let node = builder.interface::<dyn Identifiable>("Node", dispatch_by_variant()).unwrap();
    node.description("Anything that can be refetched by id.");
    node.field("id", TypeRef::required("ID"));

    let account = builder.object::<Account>("Account").unwrap();
    account.implements("Node");
    account.field(
        "id",
        TypeRef::required("ID"),
        Arc::new(|ctx| {
            let account = ctx.parent.downcast_ref::<Account>().ok_or("expected an Account")?;
            Ok(json!(account.id))
        }),
    );
    account.field("balance", TypeRef::required("Int"), null_resolver());

    builder
}

#[test]
fn conforming_objects_become_possible_types() {
    let mut builder = node_schema();
    builder
        .query()
        .unwrap()
        .field("node", TypeRef::named("Node"), null_resolver());

    let schema = builder.build().unwrap();
    let node = schema.type_by_name("Node").unwrap().as_interface().unwrap();
    let account = schema.type_by_name("Account").unwrap().as_object().unwrap();

    assert_eq!(
        node.possible_types().map(|object| object.name().to_owned()).collect::<Vec<_>>(),
        ["Account"]
    );
    assert!(node.has_implementor(account.id));
    assert_eq!(
        account.interfaces().map(|interface| interface.name().to_owned()).collect::<Vec<_>>(),
        ["Node"]
    );
}

#[test]
fn interfaces_pull_in_every_claimant() {
    let mut builder = node_schema();

    // AuditLog is never referenced by any field, but it claims Node.
    let audit = builder.object::<AuditLog>("AuditLog").unwrap();
    audit.implements("Node");
    audit.field("id", TypeRef::required("ID"), null_resolver());

    builder
        .query()
        .unwrap()
        .field("node", TypeRef::named("Node"), null_resolver());

    let schema = builder.build().unwrap();
    let node = schema.type_by_name("Node").unwrap().as_interface().unwrap();

    assert_eq!(
        node.possible_types().map(|object| object.name().to_owned()).collect::<Vec<_>>(),
        ["Account", "AuditLog"]
    );
}

#[test]
fn claimants_of_unreachable_interfaces_stay_out() {
    let mut builder = node_schema();
    builder
        .query()
        .unwrap()
        .field("greeting", TypeRef::required("String"), null_resolver());

    let schema = builder.build().unwrap();
    assert!(schema.type_by_name("Node").is_none());
    assert!(schema.type_by_name("Account").is_none());
}

#[test]
fn missing_interface_field_is_rejected() {
    struct Tombstone;

    let mut builder = node_schema();
    let tombstone = builder.object::<Tombstone>("Tombstone").unwrap();
    tombstone.implements("Node");
    tombstone.field("erasedAt", TypeRef::required("String"), null_resolver());
    builder
        .query()
        .unwrap()
        .field("node", TypeRef::named("Node"), null_resolver());

    let err = builder.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "object Tombstone does not satisfy interface Node: field 'id' is missing"
    );
}

#[test]
fn interface_field_types_must_match_exactly() {
    struct LooseAccount;

    let mut builder = node_schema();
    let loose = builder.object::<LooseAccount>("LooseAccount").unwrap();
    loose.implements("Node");
    // Nullable where the interface requires non-null.
    loose.field("id", TypeRef::named("ID"), null_resolver());
    builder
        .query()
        .unwrap()
        .field("node", TypeRef::named("Node"), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::InterfaceConformance { .. }));
    assert_eq!(
        err.to_string(),
        "object LooseAccount does not satisfy interface Node: field 'id' has type ID, expected ID!"
    );
}

#[test]
fn interface_field_arguments_must_match() {
    trait Searchable {}
    struct Document;
    impl Searchable for Document {}

    let mut builder = SchemaBuilder::new();
    let searchable = builder
        .interface::<dyn Searchable>("Searchable", Arc::new(|_| None))
        .unwrap();
    searchable
        .field("excerpt", TypeRef::required("String"))
        .argument(InputValue::new("length", TypeRef::required("Int")));

    let document = builder.object::<Document>("Document").unwrap();
    document.implements("Searchable");
    // Same name, wrong argument type.
    document
        .field("excerpt", TypeRef::required("String"), null_resolver())
        .argument(InputValue::new("length", TypeRef::named("Int")));

    builder
        .query()
        .unwrap()
        .field("results", TypeRef::named("Searchable").list(), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::InterfaceConformance { .. }));
    assert!(err.to_string().contains("does not take the same arguments"));
}

#[test]
fn argument_order_does_not_matter() {
    trait Pageable {}
    struct Feed;
    impl Pageable for Feed {}

    let mut builder = SchemaBuilder::new();
    builder
        .interface::<dyn Pageable>("Pageable", Arc::new(|_| None))
        .unwrap()
        .field("page", TypeRef::required("String"))
        .argument(InputValue::new("first", TypeRef::required("Int")))
        .argument(InputValue::new("after", TypeRef::named("String")));

    let feed = builder.object::<Feed>("Feed").unwrap();
    feed.implements("Pageable");
    feed.field("page", TypeRef::required("String"), null_resolver())
        .argument(InputValue::new("after", TypeRef::named("String")))
        .argument(InputValue::new("first", TypeRef::required("Int")));

    builder
        .query()
        .unwrap()
        .field("feed", TypeRef::named("Feed"), null_resolver());

    builder.build().unwrap();
}

#[test]
fn claiming_a_non_interface_is_rejected() {
    struct Impostor;

    let mut builder = node_schema();
    let impostor = builder.object::<Impostor>("Impostor").unwrap();
    impostor.implements("Account");
    impostor.field("id", TypeRef::required("ID"), null_resolver());
    builder
        .query()
        .unwrap()
        .field("impostor", TypeRef::named("Impostor"), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::NotAnInterface { .. }));
    assert!(err.to_string().contains("'Account', which is a object"));
}

#[test]
fn concrete_type_dispatch_goes_through_the_resolution_function() {
    let mut builder = node_schema();
    builder
        .query()
        .unwrap()
        .field("node", TypeRef::named("Node"), null_resolver());

    let schema = builder.build().unwrap();
    let node = schema.type_by_name("Node").unwrap().as_interface().unwrap();

    let value = Account { id: "acc:1".to_owned() };
    let resolved = node.resolve_concrete_type(&value).unwrap();
    assert_eq!(resolved.name(), "Account");

    // AuditLog claims nothing here, the dispatch function names a type that
    // does not implement the interface.
    assert!(node.resolve_concrete_type(&"not a node".to_owned()).is_none());
}

#[test]
fn union_dispatch_only_accepts_members() {
    struct Search;

    let mut builder = node_schema();
    builder
        .union::<Search>("Search", ["Account"], dispatch_by_variant())
        .unwrap();
    builder
        .query()
        .unwrap()
        .field("search", TypeRef::named("Search"), null_resolver());

    let schema = builder.build().unwrap();
    let search = schema.type_by_name("Search").unwrap().as_union().unwrap();

    let account = Account { id: "acc:2".to_owned() };
    assert_eq!(search.resolve_concrete_type(&account).unwrap().name(), "Account");
    // The dispatch function knows AuditLog, but it is not a member.
    assert!(search.resolve_concrete_type(&AuditLog).is_none());
}

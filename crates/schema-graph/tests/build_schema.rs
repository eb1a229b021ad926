//! End to end construction: registration, resolution, reachability and the
//! shape of the frozen schema.

use graphql_schema_graph::{
    BuildError, DirectiveLocation, InputValue, RegistrationError, ResolveTypeFn, ResolverFn, ScalarConversionError,
    SchemaBuilder, TypeKind, TypeRef, ID,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::{any::Any, sync::Arc};

struct Account {
    id: String,
    balance: i32,
}

struct Transaction;
struct SearchHit;
struct Filter;

#[derive(Clone, PartialEq, Eq, Hash)]
enum Status {
    Active,
    Closed,
}

fn null_resolver() -> ResolverFn {
    Arc::new(|_| Ok(serde_json::Value::Null))
}

fn no_dispatch() -> ResolveTypeFn {
    Arc::new(|_| None)
}

fn bank_schema() -> SchemaBuilder {
    let mut builder = SchemaBuilder::new();

    builder
        .enum_type("Status", [("ACTIVE", Status::Active), ("CLOSED", Status::Closed)])
        .unwrap()
        .description("Lifecycle of an account.")
        .value_description("CLOSED", "No longer usable.");

    let account = builder.object::<Account>("Account").unwrap();
    account.description("A customer account.");
    account.field(
        "id",
        TypeRef::required("ID"),
        Arc::new(|ctx| {
            let account = ctx.parent.downcast_ref::<Account>().ok_or("expected an Account")?;
            Ok(json!(account.id))
        }),
    );
    account.field(
        "balance",
        TypeRef::required("Int"),
        Arc::new(|ctx| {
            let account = ctx.parent.downcast_ref::<Account>().ok_or("expected an Account")?;
            Ok(json!(account.balance))
        }),
    );
    account.field("status", TypeRef::required("Status"), null_resolver());
    account.field(
        "transactions",
        TypeRef::required("Transaction").required_list(),
        null_resolver(),
    );

    let transaction = builder.object::<Transaction>("Transaction").unwrap();
    transaction.field("amount", TypeRef::required("Int"), null_resolver());
    // Cycle back to the owning account.
    transaction.field("account", TypeRef::required("Account"), null_resolver());

    builder
        .union::<SearchHit>("SearchHit", ["Account", "Transaction"], no_dispatch())
        .unwrap();

    builder
        .input_object::<Filter>("Filter")
        .unwrap()
        .field(InputValue::new("status", TypeRef::named("Status")).default_value(json!("ACTIVE")))
        .field(InputValue::new("limit", TypeRef::named("Int")));

    let query = builder.query().unwrap();
    query
        .field("account", TypeRef::named("Account"), null_resolver())
        .argument(InputValue::new("id", TypeRef::required("ID")));
    query
        .field("search", TypeRef::named("SearchHit").required_list(), null_resolver())
        .argument(InputValue::new("term", TypeRef::required("String")))
        .argument(InputValue::new("filter", TypeRef::named("Filter")));

    builder
}

#[test]
fn builds_the_reachable_graph() {
    let schema = bank_schema().build().unwrap();

    assert_eq!(schema.query_type().name(), "Query");
    assert!(schema.mutation_type().is_none());
    assert!(schema.subscription_type().is_none());

    for name in ["Account", "Transaction", "SearchHit", "Status", "Filter", "ID", "Int", "String"] {
        assert!(schema.type_by_name(name).is_some(), "{name} should be reachable");
    }

    let account = schema.type_by_name("Account").unwrap().as_object().unwrap();
    assert_eq!(
        account.fields().map(|field| field.name().to_owned()).collect::<Vec<_>>(),
        ["id", "balance", "status", "transactions"]
    );
    assert_eq!(account.description(), Some("A customer account."));
    assert_eq!(
        account.find_field_by_name("transactions").unwrap().ty().to_string(),
        "[Transaction!]!"
    );

    let search = schema.query_type().find_field_by_name("search").unwrap();
    assert_eq!(search.ty().to_string(), "[SearchHit]!");
    assert_eq!(
        search.arguments().map(|argument| argument.name().to_owned()).collect::<Vec<_>>(),
        ["term", "filter"]
    );

    let union = schema.type_by_name("SearchHit").unwrap().as_union().unwrap();
    assert_eq!(
        union.members().map(|member| member.name().to_owned()).collect::<Vec<_>>(),
        ["Account", "Transaction"]
    );
}

#[test]
fn cyclic_references_terminate() {
    let schema = bank_schema().build().unwrap();

    let transaction = schema.type_by_name("Transaction").unwrap().as_object().unwrap();
    let back = transaction.find_field_by_name("account").unwrap();
    assert_eq!(back.ty().to_string(), "Account!");
    assert!(back.ty().definition().is_object());
}

#[test]
fn self_referential_types_terminate() {
    struct Employee;

    let mut builder = SchemaBuilder::new();
    let employee = builder.object::<Employee>("Employee").unwrap();
    employee.field("manager", TypeRef::named("Employee"), null_resolver());
    employee.field(
        "reports",
        TypeRef::required("Employee").required_list(),
        null_resolver(),
    );
    builder
        .query()
        .unwrap()
        .field("me", TypeRef::named("Employee"), null_resolver());

    let schema = builder.build().unwrap();
    let employee = schema.type_by_name("Employee").unwrap().as_object().unwrap();
    assert_eq!(employee.find_field_by_name("manager").unwrap().ty().to_string(), "Employee");
}

#[test]
fn unreferenced_registrations_are_dropped() {
    struct Orphan;

    let mut builder = bank_schema();
    builder
        .object::<Orphan>("Orphan")
        .unwrap()
        .field("nothing", TypeRef::named("Int"), null_resolver());

    let schema = builder.build().unwrap();
    assert!(schema.type_by_name("Orphan").is_none());
    // Float is built in but nothing refers to it either.
    assert!(schema.type_by_name("Float").is_none());
}

#[test]
fn builtin_directives_are_always_included() {
    let schema = bank_schema().build().unwrap();

    for name in ["include", "skip", "deprecated"] {
        assert!(schema.directive_by_name(name).is_some(), "@{name} should exist");
    }

    let include = schema.directive_by_name("include").unwrap();
    let condition = include.arguments().find(|argument| argument.name() == "if").unwrap();
    assert_eq!(condition.ty().to_string(), "Boolean!");
    // Directive arguments count as reachable.
    assert!(schema.type_by_name("Boolean").is_some());

    let mut arguments = serde_json::Map::new();
    arguments.insert("if".to_owned(), json!(false));
    assert!(!(include.function())(&arguments).unwrap());
}

#[test]
fn empty_optional_roots_are_omitted() {
    let mut builder = bank_schema();
    builder.mutation().unwrap();

    let schema = builder.build().unwrap();
    assert!(schema.mutation_type().is_none());

    let mut builder = bank_schema();
    builder
        .mutation()
        .unwrap()
        .field("closeAccount", TypeRef::required("Boolean"), null_resolver());

    let schema = builder.build().unwrap();
    assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
}

#[test]
fn missing_or_empty_query_root_fails() {
    let builder = SchemaBuilder::new();
    assert!(matches!(builder.build(), Err(BuildError::MissingQueryRoot)));

    let mut builder = SchemaBuilder::new();
    builder.query().unwrap();
    assert!(matches!(builder.build(), Err(BuildError::EmptyQueryRoot)));
}

#[test]
fn unresolved_references_name_their_location() {
    let mut builder = SchemaBuilder::new();
    builder
        .query()
        .unwrap()
        .field("account", TypeRef::named("Akount"), null_resolver());

    let err = builder.build().unwrap_err();
    assert_eq!(err.to_string(), "Query.account references unknown type 'Akount'");
}

#[test]
fn re_registration_is_idempotent_per_host_type() {
    let mut builder = SchemaBuilder::new();
    builder
        .object::<Account>("Account")
        .unwrap()
        .field("id", TypeRef::required("ID"), null_resolver());
    // Same name, same host type: returns the existing entry untouched.
    builder.object::<Account>("Account").unwrap();
    builder
        .query()
        .unwrap()
        .field("account", TypeRef::named("Account"), null_resolver());
    let schema = builder.build().unwrap();
    let account = schema.type_by_name("Account").unwrap().as_object().unwrap();
    assert_eq!(account.fields().len(), 1);

    let mut builder = SchemaBuilder::new();
    builder
        .object::<Account>("Account")
        .unwrap()
        .field("id", TypeRef::required("ID"), null_resolver());

    // Same name, different host type.
    let err = builder.object::<Transaction>("Account").unwrap_err();
    assert!(matches!(err, RegistrationError::ConflictingHostType { .. }));

    // Same name, different kind.
    let err = builder.input_object::<Filter>("Account").unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::NameTaken {
            existing_kind: TypeKind::Object,
            ..
        }
    ));
}

#[test]
fn duplicate_host_types_fail_at_build() {
    let mut builder = bank_schema();
    builder
        .object::<Account>("Account2")
        .unwrap()
        .field("id", TypeRef::required("ID"), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::DuplicateHostType { .. }));
}

#[test]
fn enum_member_mapping_must_be_a_bijection() {
    let mut builder = SchemaBuilder::new();

    let err = builder
        .enum_type("Status", [("ACTIVE", Status::Active), ("OPEN", Status::Active)])
        .unwrap_err();
    assert!(matches!(err, RegistrationError::EnumValueNotUnique { .. }));

    let err = builder
        .enum_type("Status", [("ACTIVE", Status::Active), ("ACTIVE", Status::Closed)])
        .unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicateEnumMember { .. }));

    let err = builder
        .enum_type("Status", Vec::<(&str, Status)>::new())
        .unwrap_err();
    assert!(matches!(err, RegistrationError::EmptyEnum { .. }));
}

#[test]
fn enum_values_round_trip_between_names_and_host_values() {
    let schema = bank_schema().build().unwrap();
    let status = schema.type_by_name("Status").unwrap().as_enum().unwrap();

    assert_eq!(
        status.values().map(|value| value.name().to_owned()).collect::<Vec<_>>(),
        ["ACTIVE", "CLOSED"]
    );
    assert_eq!(status.values().nth(1).unwrap().description(), "No longer usable.");
    assert_eq!(status.value_name(&Status::Closed), Some("CLOSED"));
    assert!(status.value_name(&"CLOSED".to_owned()).is_none());

    let active = status.value_for_name("ACTIVE").unwrap();
    assert!(matches!(active.downcast_ref::<Status>(), Some(Status::Active)));
    assert!(status.value_for_name("SUSPENDED").is_none());
}

#[test]
fn union_members_must_be_objects() {
    struct Anything;

    let mut builder = SchemaBuilder::new();
    let err = builder
        .union::<Anything>("Anything", ["Int"], no_dispatch())
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::UnionMemberNotAnObject {
            kind: TypeKind::Scalar,
            ..
        }
    ));

    let err = builder
        .union::<Anything>("Anything", Vec::<String>::new(), no_dispatch())
        .unwrap_err();
    assert!(matches!(err, RegistrationError::EmptyUnion { .. }));

    // The member is only registered after the union: caught at build instead.
    let mut builder = SchemaBuilder::new();
    builder
        .union::<Anything>("Anything", ["Status"], no_dispatch())
        .unwrap();
    builder
        .enum_type("Status", [("ACTIVE", Status::Active)])
        .unwrap();
    builder
        .query()
        .unwrap()
        .field("anything", TypeRef::named("Anything"), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(
        err,
        BuildError::UnionMemberNotObject {
            kind: TypeKind::Enum,
            ..
        }
    ));
}

#[test]
fn arguments_must_be_input_types_and_fields_output_types() {
    let mut builder = bank_schema();
    builder
        .query()
        .unwrap()
        .field("broken", TypeRef::named("Int"), null_resolver())
        .argument(InputValue::new("account", TypeRef::named("Account")));

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::ExpectedInputType { .. }));
    assert!(err.to_string().contains("Query.broken"));

    let mut builder = bank_schema();
    builder
        .query()
        .unwrap()
        .field("filter", TypeRef::named("Filter"), null_resolver());

    let err = builder.build().unwrap_err();
    assert!(matches!(err, BuildError::ExpectedOutputType { .. }));
}

#[test]
fn input_object_fields_keep_their_defaults() {
    let schema = bank_schema().build().unwrap();
    let filter = schema.type_by_name("Filter").unwrap().as_input_object().unwrap();

    let status = filter.fields().next().unwrap();
    assert_eq!(status.name(), "status");
    assert_eq!(status.default_value(), Some(&json!("ACTIVE")));
    assert_eq!(filter.fields().nth(1).unwrap().default_value(), None);
}

#[test]
fn default_scalar_conversions_round_trip_through_json() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Money {
        cents: i64,
    }

    let mut builder = SchemaBuilder::new();
    builder.scalar::<Money>("Money").unwrap().description("An exact amount.");
    builder
        .query()
        .unwrap()
        .field("total", TypeRef::required("Money"), null_resolver());

    let schema = builder.build().unwrap();
    let money = schema.type_by_name("Money").unwrap().as_scalar().unwrap();

    assert_eq!(money.description(), Some("An exact amount."));
    assert_eq!(money.serialize(&Money { cents: 250 }).unwrap(), json!({ "cents": 250 }));

    let parsed = money.parse_value(json!({ "cents": 99 })).unwrap();
    assert_eq!(parsed.downcast_ref::<Money>(), Some(&Money { cents: 99 }));

    let parsed = money.parse_literal(r#"{ "cents": 1 }"#).unwrap();
    assert_eq!(parsed.downcast_ref::<Money>(), Some(&Money { cents: 1 }));
    assert!(money.parse_value(json!("not money")).is_err());
}

#[test]
fn custom_scalar_conversions_replace_the_defaults() {
    #[derive(Debug, PartialEq)]
    struct Upper(String);

    let mut builder = SchemaBuilder::new();
    builder
        .scalar_with::<Upper>(
            "Upper",
            Arc::new(|value| {
                let upper = value
                    .downcast_ref::<Upper>()
                    .ok_or_else(|| ScalarConversionError::new("expected an Upper"))?;
                Ok(json!(upper.0))
            }),
            Arc::new(|value: serde_json::Value| {
                let text = value
                    .as_str()
                    .ok_or_else(|| ScalarConversionError::new("expected a string"))?;
                Ok(Box::new(Upper(text.to_uppercase())) as Box<dyn Any + Send + Sync>)
            }),
        )
        .unwrap();
    builder
        .query()
        .unwrap()
        .field("shout", TypeRef::named("Upper"), null_resolver());

    let schema = builder.build().unwrap();
    let upper = schema.type_by_name("Upper").unwrap().as_scalar().unwrap();

    let parsed = upper.parse_value(json!("quiet")).unwrap();
    assert_eq!(parsed.downcast_ref::<Upper>(), Some(&Upper("QUIET".to_owned())));
    // The literal parser falls back to JSON + parse_value.
    let parsed = upper.parse_literal(r#""still quiet""#).unwrap();
    assert_eq!(parsed.downcast_ref::<Upper>(), Some(&Upper("STILL QUIET".to_owned())));
}

#[test]
fn id_is_distinct_from_string() {
    let schema = bank_schema().build().unwrap();

    let id = schema.type_by_name("ID").unwrap().as_scalar().unwrap();
    assert_eq!(id.serialize(&ID::from("acc:1")).unwrap(), json!("acc:1"));
    // A plain String is not an ID host value.
    assert!(id.serialize(&"acc:1".to_owned()).is_err());
}

#[test]
fn custom_directives_resolve_their_arguments() {
    let mut builder = bank_schema();
    builder
        .directive(
            "auth",
            [DirectiveLocation::Field],
            Arc::new(|arguments| Ok(arguments.contains_key("role"))),
        )
        .unwrap()
        .description("Restricts a field to a role.")
        .argument(InputValue::new("role", TypeRef::required("String")));

    let schema = builder.build().unwrap();
    let auth = schema.directive_by_name("auth").unwrap();

    assert_eq!(auth.locations(), [DirectiveLocation::Field]);
    assert_eq!(auth.arguments().next().unwrap().ty().to_string(), "String!");

    let mut arguments = serde_json::Map::new();
    arguments.insert("role".to_owned(), json!("admin"));
    assert!((auth.function())(&arguments).unwrap());
}

#[test]
fn directive_registrations_are_validated() {
    let mut builder = SchemaBuilder::new();

    let err = builder
        .directive("", [DirectiveLocation::Field], Arc::new(|_| Ok(true)))
        .unwrap_err();
    assert!(matches!(err, RegistrationError::UnnamedDirective));

    let err = builder
        .directive("auth", Vec::<DirectiveLocation>::new(), Arc::new(|_| Ok(true)))
        .unwrap_err();
    assert!(matches!(err, RegistrationError::DirectiveWithoutLocations { .. }));
}

//! A GraphQL schema type-graph builder.
//!
//! Callers register their host types (structs as objects, trait objects as
//! interfaces, plain Rust enums as enums, value types as scalars) on a
//! [`SchemaBuilder`], then call [`SchemaBuilder::build`] once. The builder
//! validates every registration, resolves the possibly cyclic graph of type
//! references and returns an immutable [`Schema`]: the query, mutation and
//! subscription roots plus every named type reachable from them, stored as
//! id-indexed arenas.
//!
//! The schema does not execute anything. Field resolvers, scalar
//! serialization functions and type-resolution functions are opaque
//! callables owned by a downstream execution engine; this crate only stores
//! and hands them back.
//!
//! ```
//! use graphql_schema_graph::{SchemaBuilder, TypeRef, ResolverContext};
//! use std::sync::Arc;
//!
//! struct Node {
//!     id: i32,
//! }
//!
//! let mut builder = SchemaBuilder::new();
//!
//! let node = builder.object::<Node>("Node").unwrap();
//! node.field(
//!     "id",
//!     TypeRef::required("Int"),
//!     Arc::new(|ctx: ResolverContext<'_>| {
//!         let node = ctx.parent.downcast_ref::<Node>().expect("parent must be a Node");
//!         Ok(node.id.into())
//!     }),
//! );
//!
//! builder
//!     .query()
//!     .unwrap()
//!     .field("node", TypeRef::named("Node"), Arc::new(|_| Ok(serde_json::Value::Null)));
//!
//! let schema = builder.build().unwrap();
//! assert!(schema.type_by_name("Node").is_some());
//! ```

mod builder;
mod callables;
mod directives;
mod scalars;
mod schema;

pub use builder::{
    BuildError, DirectiveTypeBuilder, EnumTypeBuilder, FieldBuilder, InputObjectTypeBuilder, InputValue,
    InterfaceTypeBuilder, Mutation, ObjectTypeBuilder, Query, RegistrationError, ScalarTypeBuilder, SchemaBuilder,
    SchemaLocation, Subscription, TypeKind, UnionTypeBuilder,
};
pub use callables::{BoxError, DirectiveFn, ParseLiteralFn, ParseValueFn, ResolveTypeFn, ResolverContext, ResolverFn, SerializeFn};
pub use directives::DirectiveLocation;
pub use scalars::ID;
pub use schema::{
    Definition, DirectiveId, DirectiveType, EnumId, EnumType, EnumValue, EnumValueId, EnumValues, FieldDefinition,
    FieldId, Fields, InputObjectId, InputObjectType, InputValueDefinition, InputValueId, InputValues, InterfaceId,
    InterfaceType, ObjectId, ObjectType, RootTypes, ScalarConversionError, ScalarId, ScalarType, Schema, StringId,
    Type, TypeDefinition, TypeRef, UnionId, UnionType, Wrapping,
};

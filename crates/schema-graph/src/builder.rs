//! The mutable registration surface: per-kind registries keyed by schema name,
//! populated through the typed `SchemaBuilder` methods, consumed by
//! [`SchemaBuilder::build`].
//!
//! Registration errors are reported synchronously by the offending call. The
//! registries only record declarations; names are looked up and the graph is
//! resolved when `build` runs.

mod error;
mod graph;
mod interner;

pub use error::{BuildError, RegistrationError, SchemaLocation, TypeKind};

use crate::{
    callables::{DirectiveFn, ParseLiteralFn, ParseValueFn, ResolveTypeFn, ResolverFn, SerializeFn},
    directives::{always_include, boolean_condition, DirectiveLocation},
    scalars::{default_parse_value, default_serialize, literal_via_parse_value, ID},
    schema::{EnumNameToValueFn, EnumValueIndexFn, Schema, TypeRef},
};
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    hash::Hash,
    sync::Arc,
};

/// Marker host type for the `Query` root object.
pub struct Query;
/// Marker host type for the `Mutation` root object.
pub struct Mutation;
/// Marker host type for the `Subscription` root object.
pub struct Subscription;

/// The identity of the host (Rust) type backing a registration.
#[derive(Clone, Copy)]
pub(crate) struct HostType {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
}

impl HostType {
    fn of<T: Any + ?Sized>() -> Self {
        HostType {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }
}

/// Collects type and directive registrations, then resolves them into an
/// immutable [`Schema`] in a single [`build`](Self::build) call.
///
/// Names are unique across all type kinds. Re-registering the same name with
/// the same host type and kind is idempotent and returns the existing entry;
/// any other collision is a [`RegistrationError`].
pub struct SchemaBuilder {
    pub(crate) scalars: IndexMap<String, ScalarTypeBuilder>,
    pub(crate) enums: IndexMap<String, EnumTypeBuilder>,
    pub(crate) objects: IndexMap<String, ObjectTypeBuilder>,
    pub(crate) interfaces: IndexMap<String, InterfaceTypeBuilder>,
    pub(crate) unions: IndexMap<String, UnionTypeBuilder>,
    pub(crate) input_objects: IndexMap<String, InputObjectTypeBuilder>,
    pub(crate) directives: IndexMap<String, DirectiveTypeBuilder>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    /// An empty builder, pre-populated with the standard GraphQL scalars
    /// (`Boolean`, `Int`, `Float`, `String`, `ID`) and the built-in
    /// `@include`, `@skip` and `@deprecated` directives.
    pub fn new() -> Self {
        let mut builder = SchemaBuilder {
            scalars: IndexMap::new(),
            enums: IndexMap::new(),
            objects: IndexMap::new(),
            interfaces: IndexMap::new(),
            unions: IndexMap::new(),
            input_objects: IndexMap::new(),
            directives: IndexMap::new(),
        };

        builder.insert_builtin_scalar::<bool>("Boolean", "The `Boolean` scalar type represents `true` or `false`.");
        builder.insert_builtin_scalar::<i32>(
            "Int",
            "The `Int` scalar type represents non-fractional signed whole numeric values.",
        );
        builder.insert_builtin_scalar::<f64>(
            "Float",
            "The `Float` scalar type represents signed double-precision fractional values.",
        );
        builder.insert_builtin_scalar::<String>(
            "String",
            "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
        );
        builder.insert_builtin_scalar::<ID>(
            "ID",
            "The `ID` scalar type represents a unique identifier, often used to refetch an object or as the key for a cache.",
        );

        builder.insert_builtin_directives();

        builder
    }

    fn insert_builtin_scalar<T>(&mut self, name: &str, description: &str)
    where
        T: Any + Send + Sync + Serialize + DeserializeOwned,
    {
        let parse_value = default_parse_value::<T>();
        self.scalars.insert(
            name.to_owned(),
            ScalarTypeBuilder {
                host: HostType::of::<T>(),
                description: Some(description.to_owned()),
                serialize: default_serialize::<T>(),
                parse_literal: literal_via_parse_value(parse_value.clone()),
                parse_value,
            },
        );
    }

    fn insert_builtin_directives(&mut self) {
        use DirectiveLocation::{EnumValue, Field, FieldDefinition, FragmentSpread, InlineFragment};

        let executable = vec![Field, FragmentSpread, InlineFragment];
        self.directives.insert(
            "include".to_owned(),
            DirectiveTypeBuilder {
                description: Some(
                    "Directs the executor to include this field or fragment only when the `if` argument is true."
                        .to_owned(),
                ),
                locations: executable.clone(),
                arguments: vec![InputValue::new("if", TypeRef::required("Boolean")).description("Included when true.")],
                function: boolean_condition("if", true),
            },
        );
        self.directives.insert(
            "skip".to_owned(),
            DirectiveTypeBuilder {
                description: Some(
                    "Directs the executor to skip this field or fragment when the `if` argument is true.".to_owned(),
                ),
                locations: executable,
                arguments: vec![InputValue::new("if", TypeRef::required("Boolean")).description("Skipped when true.")],
                function: boolean_condition("if", false),
            },
        );
        self.directives.insert(
            "deprecated".to_owned(),
            DirectiveTypeBuilder {
                description: Some("Marks an element of a GraphQL schema as no longer supported.".to_owned()),
                locations: vec![FieldDefinition, EnumValue],
                arguments: vec![InputValue::new("reason", TypeRef::named("String"))
                    .description("Explains why this element was deprecated.")],
                function: always_include(),
            },
        );
    }

    fn existing(&self, name: &str) -> Option<(TypeKind, HostType)> {
        if let Some(reg) = self.scalars.get(name) {
            return Some((TypeKind::Scalar, reg.host));
        }
        if let Some(reg) = self.enums.get(name) {
            return Some((TypeKind::Enum, reg.host));
        }
        if let Some(reg) = self.objects.get(name) {
            return Some((TypeKind::Object, reg.host));
        }
        if let Some(reg) = self.interfaces.get(name) {
            return Some((TypeKind::Interface, reg.host));
        }
        if let Some(reg) = self.unions.get(name) {
            return Some((TypeKind::Union, reg.host));
        }
        if let Some(reg) = self.input_objects.get(name) {
            return Some((TypeKind::InputObject, reg.host));
        }
        None
    }

    /// Ok(true) means the exact same registration already exists and the call
    /// is an idempotent no-op.
    fn check_registration<T: Any + ?Sized>(&self, name: &str, kind: TypeKind) -> Result<bool, RegistrationError> {
        match self.existing(name) {
            None => Ok(false),
            Some((existing_kind, host)) if existing_kind == kind => {
                if host.id == TypeId::of::<T>() {
                    Ok(true)
                } else {
                    Err(RegistrationError::ConflictingHostType {
                        name: name.to_owned(),
                        kind,
                        existing_host_type: host.name,
                    })
                }
            }
            Some((existing_kind, _)) => Err(RegistrationError::NameTaken {
                name: name.to_owned(),
                existing_kind,
            }),
        }
    }

    /// Register the host type `T` as the object type `name`.
    pub fn object<T: Any>(&mut self, name: &str) -> Result<&mut ObjectTypeBuilder, RegistrationError> {
        self.check_registration::<T>(name, TypeKind::Object)?;
        Ok(self.objects.entry(name.to_owned()).or_insert_with(|| ObjectTypeBuilder {
            host: HostType::of::<T>(),
            description: None,
            interfaces: Vec::new(),
            fields: IndexMap::new(),
        }))
    }

    /// Register the host type `T` as the interface type `name`. `T` is
    /// usually a trait object (`dyn Identifiable`); its `TypeId` is the
    /// interface's identity. `resolve_type` maps a host value to the name of
    /// the concrete object type it represents.
    pub fn interface<T: Any + ?Sized>(
        &mut self,
        name: &str,
        resolve_type: ResolveTypeFn,
    ) -> Result<&mut InterfaceTypeBuilder, RegistrationError> {
        self.check_registration::<T>(name, TypeKind::Interface)?;
        Ok(self
            .interfaces
            .entry(name.to_owned())
            .or_insert_with(|| InterfaceTypeBuilder {
                host: HostType::of::<T>(),
                description: None,
                fields: IndexMap::new(),
                resolve_type,
            }))
    }

    /// Register the host type `T` as a scalar with the default JSON
    /// conversions.
    ///
    /// The bounds rule out trait objects and borrowed data, not pointer-like
    /// hosts such as `Box<i32>`; the conversion functions define the
    /// scalar's real contract.
    pub fn scalar<T>(&mut self, name: &str) -> Result<&mut ScalarTypeBuilder, RegistrationError>
    where
        T: Any + Send + Sync + Serialize + DeserializeOwned,
    {
        self.check_registration::<T>(name, TypeKind::Scalar)?;
        Ok(self.scalars.entry(name.to_owned()).or_insert_with(|| {
            let parse_value = default_parse_value::<T>();
            ScalarTypeBuilder {
                host: HostType::of::<T>(),
                description: None,
                serialize: default_serialize::<T>(),
                parse_literal: literal_via_parse_value(parse_value.clone()),
                parse_value,
            }
        }))
    }

    /// Register the host type `T` as a scalar with custom conversions. The
    /// literal parser defaults to parsing the raw token as JSON and delegating
    /// to `parse_value`; override it with
    /// [`ScalarTypeBuilder::parse_literal_with`].
    pub fn scalar_with<T: Any>(
        &mut self,
        name: &str,
        serialize: SerializeFn,
        parse_value: ParseValueFn,
    ) -> Result<&mut ScalarTypeBuilder, RegistrationError> {
        self.check_registration::<T>(name, TypeKind::Scalar)?;
        Ok(self.scalars.entry(name.to_owned()).or_insert_with(|| ScalarTypeBuilder {
            host: HostType::of::<T>(),
            description: None,
            serialize,
            parse_literal: literal_via_parse_value(parse_value.clone()),
            parse_value,
        }))
    }

    /// Register the host type `T` as an enum. `values` maps each schema
    /// member name to the host value it stands for; the mapping must be a
    /// bijection.
    pub fn enum_type<T>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = (impl Into<String>, T)>,
    ) -> Result<&mut EnumTypeBuilder, RegistrationError>
    where
        T: Any + Clone + Eq + Hash + Send + Sync,
    {
        if self.check_registration::<T>(name, TypeKind::Enum)? {
            // Idempotent re-registration keeps the original member mapping.
            return Ok(&mut self.enums[name]);
        }

        let values: Vec<(String, T)> = values.into_iter().map(|(member, value)| (member.into(), value)).collect();
        if values.is_empty() {
            return Err(RegistrationError::EmptyEnum { name: name.to_owned() });
        }

        let mut by_name: HashMap<String, T> = HashMap::with_capacity(values.len());
        let mut by_value: HashMap<T, String> = HashMap::with_capacity(values.len());
        for (member, value) in &values {
            if by_name.insert(member.clone(), value.clone()).is_some() {
                return Err(RegistrationError::DuplicateEnumMember {
                    name: name.to_owned(),
                    member: member.clone(),
                });
            }
            if let Some(first) = by_value.insert(value.clone(), member.clone()) {
                return Err(RegistrationError::EnumValueNotUnique {
                    name: name.to_owned(),
                    first,
                    second: member.clone(),
                });
            }
        }

        let ordered: Vec<T> = values.iter().map(|(_, value)| value.clone()).collect();
        let value_index: EnumValueIndexFn = Arc::new(move |value: &(dyn Any + Send + Sync)| {
            let value = value.downcast_ref::<T>()?;
            ordered.iter().position(|candidate| candidate == value)
        });
        let name_to_value: EnumNameToValueFn = Arc::new(move |member: &str| {
            by_name
                .get(member)
                .map(|value| Box::new(value.clone()) as Box<dyn Any + Send + Sync>)
        });

        Ok(self.enums.entry(name.to_owned()).or_insert_with(|| EnumTypeBuilder {
            host: HostType::of::<T>(),
            description: None,
            members: values.into_iter().map(|(member, _)| member).collect(),
            member_descriptions: HashMap::new(),
            value_index,
            name_to_value,
        }))
    }

    /// Register the host type `T` as a union of the named object types.
    /// Members already registered under another kind are rejected here; names
    /// that are not registered yet are looked up during `build`.
    pub fn union<T: Any>(
        &mut self,
        name: &str,
        members: impl IntoIterator<Item = impl Into<String>>,
        resolve_type: ResolveTypeFn,
    ) -> Result<&mut UnionTypeBuilder, RegistrationError> {
        if self.check_registration::<T>(name, TypeKind::Union)? {
            return Ok(&mut self.unions[name]);
        }

        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(RegistrationError::EmptyUnion { name: name.to_owned() });
        }
        let mut seen = std::collections::HashSet::new();
        for member in &members {
            if !seen.insert(member.as_str()) {
                return Err(RegistrationError::DuplicateUnionMember {
                    name: name.to_owned(),
                    member: member.clone(),
                });
            }
            if let Some((kind, _)) = self.existing(member) {
                if kind != TypeKind::Object {
                    return Err(RegistrationError::UnionMemberNotAnObject {
                        name: name.to_owned(),
                        member: member.clone(),
                        kind,
                    });
                }
            }
        }

        Ok(self.unions.entry(name.to_owned()).or_insert_with(|| UnionTypeBuilder {
            host: HostType::of::<T>(),
            description: None,
            members,
            resolve_type,
        }))
    }

    /// Register the host type `T` as an input object type.
    pub fn input_object<T: Any>(&mut self, name: &str) -> Result<&mut InputObjectTypeBuilder, RegistrationError> {
        self.check_registration::<T>(name, TypeKind::InputObject)?;
        Ok(self
            .input_objects
            .entry(name.to_owned())
            .or_insert_with(|| InputObjectTypeBuilder {
                host: HostType::of::<T>(),
                description: None,
                fields: IndexMap::new(),
            }))
    }

    /// Register an executable directive. Directives live in their own
    /// namespace; re-registering a name replaces the previous declaration.
    pub fn directive(
        &mut self,
        name: &str,
        locations: impl IntoIterator<Item = DirectiveLocation>,
        function: DirectiveFn,
    ) -> Result<&mut DirectiveTypeBuilder, RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::UnnamedDirective);
        }
        let locations: Vec<DirectiveLocation> = locations.into_iter().collect();
        if locations.is_empty() {
            return Err(RegistrationError::DirectiveWithoutLocations { name: name.to_owned() });
        }

        self.directives.insert(
            name.to_owned(),
            DirectiveTypeBuilder {
                description: None,
                locations,
                arguments: Vec::new(),
                function,
            },
        );
        Ok(&mut self.directives[name])
    }

    /// The `Query` root object type.
    pub fn query(&mut self) -> Result<&mut ObjectTypeBuilder, RegistrationError> {
        self.object::<Query>("Query")
    }

    /// The `Mutation` root object type. Left without fields, it is omitted
    /// from the built schema.
    pub fn mutation(&mut self) -> Result<&mut ObjectTypeBuilder, RegistrationError> {
        self.object::<Mutation>("Mutation")
    }

    /// The `Subscription` root object type. Left without fields, it is
    /// omitted from the built schema.
    pub fn subscription(&mut self) -> Result<&mut ObjectTypeBuilder, RegistrationError> {
        self.object::<Subscription>("Subscription")
    }

    /// Resolve all registrations into an immutable [`Schema`].
    ///
    /// Consumes the builder, so a schema can only be built once. Only types
    /// reachable from the root types (and directive arguments) end up in the
    /// schema; the rest of the registrations are dropped.
    pub fn build(self) -> Result<Schema, BuildError> {
        graph::build(self)
    }
}

/// A scalar registration.
pub struct ScalarTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    pub(crate) serialize: SerializeFn,
    pub(crate) parse_value: ParseValueFn,
    pub(crate) parse_literal: ParseLiteralFn,
}

impl ScalarTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the JSON-fallback literal parser.
    pub fn parse_literal_with(&mut self, parse_literal: ParseLiteralFn) -> &mut Self {
        self.parse_literal = parse_literal;
        self
    }
}

impl std::fmt::Debug for ScalarTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarTypeBuilder")
            .field("host", &self.host.name)
            .field("description", &self.description)
            .finish()
    }
}

/// An object registration. Fields are declared explicitly; re-declaring a
/// field name replaces the previous declaration.
pub struct ObjectTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) fields: IndexMap<String, FieldBuilder>,
}

impl ObjectTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Claim that this object implements the named interface. Conformance is
    /// checked during `build`.
    pub fn implements(&mut self, interface: impl Into<String>) -> &mut Self {
        let interface = interface.into();
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
        self
    }

    /// Declare a field with its output type and resolver.
    pub fn field(&mut self, name: impl Into<String>, ty: TypeRef, resolver: ResolverFn) -> &mut FieldBuilder {
        insert_field(
            &mut self.fields,
            name.into(),
            FieldBuilder {
                ty,
                description: None,
                arguments: Vec::new(),
                resolver: Some(resolver),
            },
        )
    }
}

impl std::fmt::Debug for ObjectTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectTypeBuilder")
            .field("host", &self.host.name)
            .field("interfaces", &self.interfaces)
            .field("fields", &self.fields)
            .finish()
    }
}

/// An interface registration. Interface fields carry no resolver; the
/// implementing objects provide one.
pub struct InterfaceTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldBuilder>,
    pub(crate) resolve_type: ResolveTypeFn,
}

impl InterfaceTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(&mut self, name: impl Into<String>, ty: TypeRef) -> &mut FieldBuilder {
        insert_field(
            &mut self.fields,
            name.into(),
            FieldBuilder {
                ty,
                description: None,
                arguments: Vec::new(),
                resolver: None,
            },
        )
    }
}

impl std::fmt::Debug for InterfaceTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceTypeBuilder")
            .field("host", &self.host.name)
            .field("fields", &self.fields)
            .finish()
    }
}

fn insert_field(fields: &mut IndexMap<String, FieldBuilder>, name: String, field: FieldBuilder) -> &mut FieldBuilder {
    match fields.entry(name) {
        indexmap::map::Entry::Occupied(entry) => {
            let slot = entry.into_mut();
            *slot = field;
            slot
        }
        indexmap::map::Entry::Vacant(entry) => entry.insert(field),
    }
}

/// An enum registration. The member mapping is fixed by
/// [`SchemaBuilder::enum_type`]; only documentation can be added here.
pub struct EnumTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    /// Member names in declaration order.
    pub(crate) members: Vec<String>,
    pub(crate) member_descriptions: HashMap<String, String>,
    pub(crate) value_index: EnumValueIndexFn,
    pub(crate) name_to_value: EnumNameToValueFn,
}

impl EnumTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn value_description(&mut self, member: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.member_descriptions.insert(member.into(), description.into());
        self
    }
}

impl std::fmt::Debug for EnumTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumTypeBuilder")
            .field("host", &self.host.name)
            .field("members", &self.members)
            .finish()
    }
}

/// A union registration. The member list is fixed by
/// [`SchemaBuilder::union`].
pub struct UnionTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) resolve_type: ResolveTypeFn,
}

impl UnionTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}

impl std::fmt::Debug for UnionTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionTypeBuilder")
            .field("host", &self.host.name)
            .field("members", &self.members)
            .finish()
    }
}

/// An input object registration.
pub struct InputObjectTypeBuilder {
    pub(crate) host: HostType,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputValue>,
}

impl InputObjectTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Declare an input field. Re-declaring a name replaces the previous
    /// declaration.
    pub fn field(&mut self, field: InputValue) -> &mut Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

impl std::fmt::Debug for InputObjectTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectTypeBuilder")
            .field("host", &self.host.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A directive registration.
pub struct DirectiveTypeBuilder {
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) arguments: Vec<InputValue>,
    pub(crate) function: DirectiveFn,
}

impl DirectiveTypeBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(&mut self, argument: InputValue) -> &mut Self {
        self.arguments.push(argument);
        self
    }
}

impl std::fmt::Debug for DirectiveTypeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectiveTypeBuilder")
            .field("locations", &self.locations)
            .field("arguments", &self.arguments)
            .finish()
    }
}

/// A declared field on an object or interface.
pub struct FieldBuilder {
    pub(crate) ty: TypeRef,
    pub(crate) description: Option<String>,
    pub(crate) arguments: Vec<InputValue>,
    pub(crate) resolver: Option<ResolverFn>,
}

impl FieldBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(&mut self, argument: InputValue) -> &mut Self {
        self.arguments.push(argument);
        self
    }
}

impl std::fmt::Debug for FieldBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBuilder")
            .field("ty", &self.ty)
            .field("arguments", &self.arguments)
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

/// A field argument, directive argument or input object field declaration.
#[derive(Debug, Clone)]
pub struct InputValue {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) description: Option<String>,
    pub(crate) default_value: Option<serde_json::Value>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        InputValue {
            name: name.into(),
            ty,
            description: None,
            default_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Applied by the execution engine when the argument is omitted.
    #[must_use]
    pub fn default_value(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

//! Resolution of the registries into the frozen type graph.
//!
//! Types are resolved lazily by name, starting from the root operation types
//! and the registered directives. Resolution memoizes by name and allocates
//! the arena slot before recursing into the type's dependencies, so cyclic
//! references terminate: a cycle hits the memo entry of a record that is
//! still being filled in and simply reuses its id.

use super::{
    error::{BuildError, SchemaLocation, TypeKind},
    interner::Interner,
    EnumTypeBuilder, FieldBuilder, InputObjectTypeBuilder, InputValue, InterfaceTypeBuilder, ObjectTypeBuilder,
    ScalarTypeBuilder, SchemaBuilder, UnionTypeBuilder,
};
use crate::schema::{
    Definition, DirectiveTypeRecord, EnumId, EnumTypeRecord, EnumValueId, EnumValueRecord, FieldDefinitionRecord,
    FieldId, InputObjectId, InputObjectTypeRecord, InputValueDefinitionRecord, InputValueId, InputValues, InterfaceId,
    InterfaceTypeRecord, ObjectId, ObjectTypeRecord, RootTypes, ScalarId, ScalarTypeRecord, Schema, StringId,
    TypeRecord, TypeRef, UnionId, UnionTypeRecord,
};
use itertools::Itertools;
use std::{
    any::TypeId,
    collections::HashMap,
    ops::Range,
};

pub(super) fn build(builder: SchemaBuilder) -> Result<Schema, BuildError> {
    tracing::debug!(
        scalars = builder.scalars.len(),
        enums = builder.enums.len(),
        objects = builder.objects.len(),
        interfaces = builder.interfaces.len(),
        unions = builder.unions.len(),
        input_objects = builder.input_objects.len(),
        directives = builder.directives.len(),
        "building schema"
    );

    validate_host_types(&builder)?;

    let mut graph = GraphBuilder::new(&builder);
    let root_types = graph.resolve_roots()?;
    graph.resolve_directives()?;
    graph.validate_conformance()?;

    let schema = graph.finish(root_types);
    tracing::debug!(
        types = schema.definitions_by_name.len(),
        "schema resolved"
    );
    Ok(schema)
}

/// Every registration must be backed by a distinct host type, otherwise the
/// host-type-driven dispatch downstream would be ambiguous.
fn validate_host_types(builder: &SchemaBuilder) -> Result<(), BuildError> {
    let mut seen: HashMap<TypeId, &str> = HashMap::new();

    let entries = builder
        .scalars
        .iter()
        .map(|(name, reg)| (name, reg.host))
        .chain(builder.enums.iter().map(|(name, reg)| (name, reg.host)))
        .chain(builder.objects.iter().map(|(name, reg)| (name, reg.host)))
        .chain(builder.interfaces.iter().map(|(name, reg)| (name, reg.host)))
        .chain(builder.unions.iter().map(|(name, reg)| (name, reg.host)))
        .chain(builder.input_objects.iter().map(|(name, reg)| (name, reg.host)));

    for (name, host) in entries {
        if let Some(first) = seen.insert(host.id, name) {
            return Err(BuildError::DuplicateHostType {
                host_type: host.name,
                first: first.to_owned(),
                second: name.clone(),
            });
        }
    }

    Ok(())
}

struct GraphBuilder<'a> {
    registry: &'a SchemaBuilder,

    strings: Interner<String, StringId>,
    objects: Vec<ObjectTypeRecord>,
    interfaces: Vec<InterfaceTypeRecord>,
    unions: Vec<UnionTypeRecord>,
    enums: Vec<EnumTypeRecord>,
    scalars: Vec<ScalarTypeRecord>,
    input_objects: Vec<InputObjectTypeRecord>,
    fields: Vec<FieldDefinitionRecord>,
    input_values: Vec<InputValueDefinitionRecord>,
    enum_values: Vec<EnumValueRecord>,
    directives: Vec<DirectiveTypeRecord>,

    /// Memoized resolutions by schema name.
    resolved: HashMap<String, Definition>,
}

impl<'a> GraphBuilder<'a> {
    fn new(registry: &'a SchemaBuilder) -> Self {
        GraphBuilder {
            registry,
            strings: Interner::default(),
            objects: Vec::new(),
            interfaces: Vec::new(),
            unions: Vec::new(),
            enums: Vec::new(),
            scalars: Vec::new(),
            input_objects: Vec::new(),
            fields: Vec::new(),
            input_values: Vec::new(),
            enum_values: Vec::new(),
            directives: Vec::new(),
            resolved: HashMap::new(),
        }
    }

    fn resolve_roots(&mut self) -> Result<RootTypes, BuildError> {
        let registry = self.registry;

        let Some(query_reg) = registry.objects.get("Query") else {
            return Err(BuildError::MissingQueryRoot);
        };
        if query_reg.fields.is_empty() {
            return Err(BuildError::EmptyQueryRoot);
        }
        let definition = self.resolve_named("Query", SchemaLocation::Definition { name: "Query".to_owned() })?;
        let Some(query) = definition.as_object() else {
            return Err(BuildError::MissingQueryRoot);
        };

        let mutation = self.resolve_optional_root("Mutation")?;
        let subscription = self.resolve_optional_root("Subscription")?;

        Ok(RootTypes {
            query,
            mutation,
            subscription,
        })
    }

    /// Mutation and Subscription are part of the schema only when they were
    /// registered with at least one field.
    fn resolve_optional_root(&mut self, name: &str) -> Result<Option<ObjectId>, BuildError> {
        match self.registry.objects.get(name) {
            Some(reg) if !reg.fields.is_empty() => {
                let definition = self.resolve_named(name, SchemaLocation::Definition { name: name.to_owned() })?;
                Ok(definition.as_object())
            }
            _ => Ok(None),
        }
    }

    /// Directives are always part of the schema; their argument types count
    /// as reachable.
    fn resolve_directives(&mut self) -> Result<(), BuildError> {
        let registry = self.registry;
        for (name, reg) in &registry.directives {
            let arguments = self.resolve_input_values(&reg.arguments, |argument| SchemaLocation::Field {
                ty: format!("@{name}"),
                name: argument.to_owned(),
            })?;
            self.directives.push(DirectiveTypeRecord {
                name: self.strings.get_or_new(name.as_str()),
                description: reg.description.as_deref().map(|text| self.strings.get_or_new(text)),
                locations: reg.locations.clone(),
                arguments,
                function: reg.function.clone(),
            });
        }
        Ok(())
    }

    fn resolve_named(&mut self, name: &str, location: SchemaLocation) -> Result<Definition, BuildError> {
        if let Some(definition) = self.resolved.get(name) {
            return Ok(*definition);
        }

        let registry = self.registry;
        if let Some(reg) = registry.scalars.get(name) {
            return Ok(self.resolve_scalar(name, reg));
        }
        if let Some(reg) = registry.enums.get(name) {
            return Ok(self.resolve_enum(name, reg));
        }
        if let Some(reg) = registry.objects.get(name) {
            return self.resolve_object(name, reg);
        }
        if let Some(reg) = registry.interfaces.get(name) {
            return self.resolve_interface(name, reg);
        }
        if let Some(reg) = registry.unions.get(name) {
            return self.resolve_union(name, reg);
        }
        if let Some(reg) = registry.input_objects.get(name) {
            return self.resolve_input_object(name, reg);
        }

        Err(BuildError::UnresolvedType {
            location,
            referenced: name.to_owned(),
        })
    }

    fn resolve_scalar(&mut self, name: &str, reg: &ScalarTypeBuilder) -> Definition {
        let id = ScalarId::from(self.scalars.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.scalars.push(ScalarTypeRecord {
            name: name_id,
            description,
            serialize: reg.serialize.clone(),
            parse_value: reg.parse_value.clone(),
            parse_literal: reg.parse_literal.clone(),
        });

        let definition = Definition::Scalar(id);
        self.resolved.insert(name.to_owned(), definition);
        definition
    }

    fn resolve_enum(&mut self, name: &str, reg: &EnumTypeBuilder) -> Definition {
        let start = EnumValueId::from(self.enum_values.len());
        for member in &reg.members {
            let member_name = self.strings.get_or_new(member.as_str());
            let description = reg.member_descriptions.get(member).map(String::as_str).unwrap_or("");
            let description = self.strings.get_or_new(description);
            self.enum_values.push(EnumValueRecord {
                name: member_name,
                description,
            });
        }

        let id = EnumId::from(self.enums.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.enums.push(EnumTypeRecord {
            name: name_id,
            description,
            values: start..EnumValueId::from(self.enum_values.len()),
            value_index: reg.value_index.clone(),
            name_to_value: reg.name_to_value.clone(),
        });

        let definition = Definition::Enum(id);
        self.resolved.insert(name.to_owned(), definition);
        definition
    }

    fn resolve_object(&mut self, name: &str, reg: &'a ObjectTypeBuilder) -> Result<Definition, BuildError> {
        // Allocate and memoize before recursing, so cyclic field types
        // terminate on the memo entry.
        let id = ObjectId::from(self.objects.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.objects.push(ObjectTypeRecord {
            name: name_id,
            description,
            fields: FieldId::from(0)..FieldId::from(0),
            interfaces: Vec::new(),
        });
        let definition = Definition::Object(id);
        self.resolved.insert(name.to_owned(), definition);

        let fields = self.resolve_fields(name, &reg.fields)?;
        self.objects[usize::from(id)].fields = fields;

        for claimed in &reg.interfaces {
            let resolved = self.resolve_named(claimed, SchemaLocation::Definition { name: name.to_owned() })?;
            let Some(interface_id) = resolved.as_interface() else {
                return Err(BuildError::NotAnInterface {
                    object: name.to_owned(),
                    claimed: claimed.clone(),
                    kind: kind_of(resolved),
                });
            };
            self.objects[usize::from(id)].interfaces.push(interface_id);
            self.interfaces[usize::from(interface_id)].possible_types.push(id);
        }

        Ok(definition)
    }

    fn resolve_interface(&mut self, name: &str, reg: &'a InterfaceTypeBuilder) -> Result<Definition, BuildError> {
        let id = InterfaceId::from(self.interfaces.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.interfaces.push(InterfaceTypeRecord {
            name: name_id,
            description,
            fields: FieldId::from(0)..FieldId::from(0),
            possible_types: Vec::new(),
            resolve_type: reg.resolve_type.clone(),
        });
        let definition = Definition::Interface(id);
        self.resolved.insert(name.to_owned(), definition);

        let fields = self.resolve_fields(name, &reg.fields)?;
        self.interfaces[usize::from(id)].fields = fields;

        // An interface pulls in every object that claims it, so that
        // possible_types is complete and conformance is checked even for
        // objects no field refers to directly.
        let registry = self.registry;
        for (object_name, object_reg) in &registry.objects {
            if object_reg.interfaces.iter().any(|claimed| claimed == name) {
                self.resolve_named(object_name, SchemaLocation::Definition { name: name.to_owned() })?;
            }
        }

        Ok(definition)
    }

    fn resolve_union(&mut self, name: &str, reg: &'a UnionTypeBuilder) -> Result<Definition, BuildError> {
        let id = UnionId::from(self.unions.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.unions.push(UnionTypeRecord {
            name: name_id,
            description,
            members: Vec::new(),
            resolve_type: reg.resolve_type.clone(),
        });
        let definition = Definition::Union(id);
        self.resolved.insert(name.to_owned(), definition);

        let mut members = Vec::with_capacity(reg.members.len());
        for member in &reg.members {
            let resolved = self.resolve_named(member, SchemaLocation::Definition { name: name.to_owned() })?;
            let Some(object_id) = resolved.as_object() else {
                return Err(BuildError::UnionMemberNotObject {
                    union: name.to_owned(),
                    member: member.clone(),
                    kind: kind_of(resolved),
                });
            };
            members.push(object_id);
        }
        self.unions[usize::from(id)].members = members;

        Ok(definition)
    }

    fn resolve_input_object(&mut self, name: &str, reg: &'a InputObjectTypeBuilder) -> Result<Definition, BuildError> {
        let id = InputObjectId::from(self.input_objects.len());
        let name_id = self.strings.get_or_new(name);
        let description = reg.description.as_deref().map(|text| self.strings.get_or_new(text));
        self.input_objects.push(InputObjectTypeRecord {
            name: name_id,
            description,
            fields: InputValueId::from(0)..InputValueId::from(0),
        });
        let definition = Definition::InputObject(id);
        self.resolved.insert(name.to_owned(), definition);

        let fields: Vec<InputValue> = reg.fields.values().cloned().collect();
        let fields = self.resolve_input_values(&fields, |field| SchemaLocation::Field {
            ty: name.to_owned(),
            name: field.to_owned(),
        })?;
        self.input_objects[usize::from(id)].fields = fields;

        Ok(definition)
    }

    /// Resolves the declared fields of an object or interface and appends
    /// them as one contiguous run. Dependencies are resolved into a scratch
    /// buffer first, because recursion may append other types' fields in the
    /// meantime.
    fn resolve_fields(
        &mut self,
        parent: &str,
        fields: &'a indexmap::IndexMap<String, FieldBuilder>,
    ) -> Result<Range<FieldId>, BuildError> {
        let mut records = Vec::with_capacity(fields.len());
        for (field_name, field) in fields {
            let location = SchemaLocation::Field {
                ty: parent.to_owned(),
                name: field_name.clone(),
            };

            let ty = self.resolve_type_ref(&field.ty, &location)?;
            if !ty.definition.is_output() {
                return Err(BuildError::ExpectedOutputType {
                    location,
                    referenced: field.ty.name().to_owned(),
                });
            }

            let arguments = self.resolve_input_values(&field.arguments, |argument| SchemaLocation::Field {
                ty: format!("{parent}.{field_name}"),
                name: argument.to_owned(),
            })?;

            records.push(FieldDefinitionRecord {
                name: self.strings.get_or_new(field_name.as_str()),
                description: field.description.as_deref().map(|text| self.strings.get_or_new(text)),
                ty,
                arguments,
                resolver: field.resolver.clone(),
            });
        }

        let start = FieldId::from(self.fields.len());
        self.fields.extend(records);
        Ok(start..FieldId::from(self.fields.len()))
    }

    /// Field arguments, directive arguments and input object fields all
    /// resolve the same way: the referenced type must be an input kind, and
    /// the records form one contiguous run.
    fn resolve_input_values(
        &mut self,
        values: &[InputValue],
        location_of: impl Fn(&str) -> SchemaLocation,
    ) -> Result<InputValues, BuildError> {
        let mut resolved = Vec::with_capacity(values.len());
        for value in values {
            let location = location_of(&value.name);
            let ty = self.resolve_type_ref(&value.ty, &location)?;
            if !ty.definition.is_input() {
                return Err(BuildError::ExpectedInputType {
                    location,
                    referenced: value.ty.name().to_owned(),
                    kind: kind_of(ty.definition),
                });
            }
            resolved.push((value, ty));
        }

        let start = InputValueId::from(self.input_values.len());
        for (value, ty) in resolved {
            self.input_values.push(InputValueDefinitionRecord {
                name: self.strings.get_or_new(value.name.as_str()),
                description: value.description.as_deref().map(|text| self.strings.get_or_new(text)),
                ty,
                default_value: value.default_value.clone(),
            });
        }
        Ok(start..InputValueId::from(self.input_values.len()))
    }

    fn resolve_type_ref(&mut self, ty: &TypeRef, location: &SchemaLocation) -> Result<TypeRecord, BuildError> {
        let definition = self.resolve_named(ty.name(), location.clone())?;
        Ok(TypeRecord {
            definition,
            wrapping: ty.wrapping.clone(),
        })
    }

    /// Strict conformance: every interface field must exist on the object
    /// with the identical resolved type and the identical argument shape.
    fn validate_conformance(&self) -> Result<(), BuildError> {
        for object in &self.objects {
            for interface_id in &object.interfaces {
                let interface = &self.interfaces[usize::from(*interface_id)];
                for expected in self.field_slice(&interface.fields) {
                    let conformance_error = |reason: String| BuildError::InterfaceConformance {
                        object: self.strings[object.name].clone(),
                        interface: self.strings[interface.name].clone(),
                        field: self.strings[expected.name].clone(),
                        reason,
                    };

                    let Some(actual) = self
                        .field_slice(&object.fields)
                        .iter()
                        .find(|field| field.name == expected.name)
                    else {
                        return Err(conformance_error("is missing".to_owned()));
                    };

                    if actual.ty != expected.ty {
                        return Err(conformance_error(format!(
                            "has type {}, expected {}",
                            self.render_type(&actual.ty),
                            self.render_type(&expected.ty),
                        )));
                    }

                    if !self.same_argument_shape(&actual.arguments, &expected.arguments) {
                        return Err(conformance_error(
                            "does not take the same arguments as the interface declares".to_owned(),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    fn same_argument_shape(&self, actual: &InputValues, expected: &InputValues) -> bool {
        let actual = self.input_value_slice(actual);
        let expected = self.input_value_slice(expected);
        if actual.len() != expected.len() {
            return false;
        }

        // Declaration order does not matter, compare sorted by name.
        let by_name = |value: &&InputValueDefinitionRecord| self.strings[value.name].as_str();
        actual
            .iter()
            .sorted_by_key(by_name)
            .zip(expected.iter().sorted_by_key(by_name))
            .all(|(actual, expected)| actual.name == expected.name && actual.ty == expected.ty)
    }

    fn field_slice(&self, range: &Range<FieldId>) -> &[FieldDefinitionRecord] {
        &self.fields[usize::from(range.start)..usize::from(range.end)]
    }

    fn input_value_slice(&self, range: &InputValues) -> &[InputValueDefinitionRecord] {
        &self.input_values[usize::from(range.start)..usize::from(range.end)]
    }

    fn render_type(&self, ty: &TypeRecord) -> String {
        let name = match ty.definition {
            Definition::Scalar(id) => self.scalars[usize::from(id)].name,
            Definition::Object(id) => self.objects[usize::from(id)].name,
            Definition::Interface(id) => self.interfaces[usize::from(id)].name,
            Definition::Union(id) => self.unions[usize::from(id)].name,
            Definition::Enum(id) => self.enums[usize::from(id)].name,
            Definition::InputObject(id) => self.input_objects[usize::from(id)].name,
        };
        TypeRef {
            name: self.strings[name].clone(),
            wrapping: ty.wrapping.clone(),
        }
        .to_string()
    }

    fn finish(self, root_types: RootTypes) -> Schema {
        let GraphBuilder {
            registry: _,
            strings,
            objects,
            mut interfaces,
            unions,
            enums,
            scalars,
            input_objects,
            fields,
            input_values,
            enum_values,
            directives,
            resolved,
        } = self;

        for interface in &mut interfaces {
            interface.possible_types.sort_unstable();
        }

        Schema {
            root_types,
            objects,
            interfaces,
            unions,
            enums,
            scalars,
            input_objects,
            fields,
            input_values,
            enum_values,
            directives,
            strings: strings.into(),
            definitions_by_name: resolved,
        }
    }
}

fn kind_of(definition: Definition) -> TypeKind {
    match definition {
        Definition::Scalar(_) => TypeKind::Scalar,
        Definition::Object(_) => TypeKind::Object,
        Definition::Interface(_) => TypeKind::Interface,
        Definition::Union(_) => TypeKind::Union,
        Definition::Enum(_) => TypeKind::Enum,
        Definition::InputObject(_) => TypeKind::InputObject,
    }
}

//! Walker types pairing an arena id with a reference to the [`Schema`].
//!
//! They deref to their records, so raw ids stay accessible, and add the
//! accessors that chase ids through the graph.

use super::*;
use crate::callables::{DirectiveFn, ResolverFn};
use std::any::Any;

macro_rules! walkers {
    ($($walk:ident ( $id:ident ) -> $walker:ident [ $record:ident ],)*) => {
        $(
            #[derive(Clone, Copy)]
            pub struct $walker<'a> {
                pub(crate) schema: &'a Schema,
                pub id: $id,
            }

            impl<'a> $walker<'a> {
                /// Prefer using Deref unless you need the `'a` lifetime.
                #[allow(clippy::should_implement_trait)]
                pub fn as_ref(&self) -> &'a $record {
                    &self.schema[self.id]
                }

                pub fn name(&self) -> &'a str {
                    self.schema[self.as_ref().name].as_str()
                }
            }

            impl std::ops::Deref for $walker<'_> {
                type Target = $record;

                fn deref(&self) -> &Self::Target {
                    self.as_ref()
                }
            }

            impl Schema {
                pub(crate) fn $walk(&self, id: $id) -> $walker<'_> {
                    $walker { schema: self, id }
                }
            }
        )*
    }
}

walkers! {
    walk_object(ObjectId) -> ObjectType[ObjectTypeRecord],
    walk_interface(InterfaceId) -> InterfaceType[InterfaceTypeRecord],
    walk_union(UnionId) -> UnionType[UnionTypeRecord],
    walk_enum(EnumId) -> EnumType[EnumTypeRecord],
    walk_scalar(ScalarId) -> ScalarType[ScalarTypeRecord],
    walk_input_object(InputObjectId) -> InputObjectType[InputObjectTypeRecord],
    walk_field(FieldId) -> FieldDefinition[FieldDefinitionRecord],
    walk_input_value(InputValueId) -> InputValueDefinition[InputValueDefinitionRecord],
    walk_enum_value(EnumValueId) -> EnumValue[EnumValueRecord],
    walk_directive(DirectiveId) -> DirectiveType[DirectiveTypeRecord],
}

impl Schema {
    pub(crate) fn walk_definition(&self, definition: Definition) -> TypeDefinition<'_> {
        match definition {
            Definition::Scalar(id) => TypeDefinition::Scalar(self.walk_scalar(id)),
            Definition::Object(id) => TypeDefinition::Object(self.walk_object(id)),
            Definition::Interface(id) => TypeDefinition::Interface(self.walk_interface(id)),
            Definition::Union(id) => TypeDefinition::Union(self.walk_union(id)),
            Definition::Enum(id) => TypeDefinition::Enum(self.walk_enum(id)),
            Definition::InputObject(id) => TypeDefinition::InputObject(self.walk_input_object(id)),
        }
    }

    fn walk_fields(&self, range: Fields) -> impl ExactSizeIterator<Item = FieldDefinition<'_>> {
        (usize::from(range.start)..usize::from(range.end)).map(move |idx| self.walk_field(FieldId::from(idx)))
    }

    fn walk_input_values(&self, range: InputValues) -> impl ExactSizeIterator<Item = InputValueDefinition<'_>> {
        (usize::from(range.start)..usize::from(range.end)).map(move |idx| self.walk_input_value(InputValueId::from(idx)))
    }
}

fn description<'a>(schema: &'a Schema, id: Option<StringId>) -> Option<&'a str> {
    id.map(|id| schema[id].as_str())
}

impl<'a> ObjectType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn fields(self) -> impl ExactSizeIterator<Item = FieldDefinition<'a>> {
        self.schema.walk_fields(self.as_ref().fields.clone())
    }

    pub fn find_field_by_name(&self, name: &str) -> Option<FieldDefinition<'a>> {
        self.fields().find(|field| field.name() == name)
    }

    pub fn interfaces(self) -> impl Iterator<Item = InterfaceType<'a>> {
        let schema = self.schema;
        self.as_ref().interfaces.iter().map(move |id| schema.walk_interface(*id))
    }
}

impl std::fmt::Debug for ObjectType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name())
            .field("description", &self.description())
            .field("fields", &self.fields().map(|field| field.name()).collect::<Vec<_>>())
            .field(
                "interfaces",
                &self.interfaces().map(|interface| interface.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> InterfaceType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn fields(self) -> impl ExactSizeIterator<Item = FieldDefinition<'a>> {
        self.schema.walk_fields(self.as_ref().fields.clone())
    }

    pub fn find_field_by_name(&self, name: &str) -> Option<FieldDefinition<'a>> {
        self.fields().find(|field| field.name() == name)
    }

    pub fn has_implementor(&self, id: ObjectId) -> bool {
        self.as_ref().possible_types.binary_search(&id).is_ok()
    }

    pub fn possible_types(self) -> impl ExactSizeIterator<Item = ObjectType<'a>> {
        let schema = self.schema;
        self.as_ref().possible_types.iter().map(move |id| schema.walk_object(*id))
    }

    /// Dispatch a host value to the concrete object type it represents.
    /// `None` when the resolution function declines or names a non-implementor.
    pub fn resolve_concrete_type(&self, value: &(dyn Any + Send + Sync)) -> Option<ObjectType<'a>> {
        let name = (self.as_ref().resolve_type)(value)?;
        let object = self.schema.type_by_name(&name)?.as_object()?;
        self.has_implementor(object.id).then_some(object)
    }
}

impl std::fmt::Debug for InterfaceType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.name())
            .field("fields", &self.fields().map(|field| field.name()).collect::<Vec<_>>())
            .field(
                "possible_types",
                &self.possible_types().map(|object| object.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> UnionType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn members(self) -> impl ExactSizeIterator<Item = ObjectType<'a>> {
        let schema = self.schema;
        self.as_ref().members.iter().map(move |id| schema.walk_object(*id))
    }

    pub fn has_member(&self, id: ObjectId) -> bool {
        self.as_ref().members.contains(&id)
    }

    /// Dispatch a host value to the concrete member object type.
    pub fn resolve_concrete_type(&self, value: &(dyn Any + Send + Sync)) -> Option<ObjectType<'a>> {
        let name = (self.as_ref().resolve_type)(value)?;
        let object = self.schema.type_by_name(&name)?.as_object()?;
        self.has_member(object.id).then_some(object)
    }
}

impl std::fmt::Debug for UnionType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name())
            .field("members", &self.members().map(|object| object.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> EnumType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn values(self) -> impl ExactSizeIterator<Item = EnumValue<'a>> {
        let schema = self.schema;
        let range = self.as_ref().values.clone();
        (usize::from(range.start)..usize::from(range.end)).map(move |idx| schema.walk_enum_value(EnumValueId::from(idx)))
    }

    /// Symbolic name for a host value, if the value belongs to this enum.
    pub fn value_name(&self, value: &(dyn Any + Send + Sync)) -> Option<&'a str> {
        let idx = (self.as_ref().value_index)(value)?;
        let range = &self.as_ref().values;
        let id = EnumValueId::from(usize::from(range.start) + idx);
        (usize::from(id) < usize::from(range.end)).then(|| self.schema[self.schema[id].name].as_str())
    }

    /// Host value for a symbolic name.
    pub fn value_for_name(&self, name: &str) -> Option<Box<dyn Any + Send + Sync>> {
        (self.as_ref().name_to_value)(name)
    }
}

impl std::fmt::Debug for EnumType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.name())
            .field("values", &self.values().map(|value| value.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> EnumValue<'a> {
    /// The empty string when no description was registered.
    pub fn description(&self) -> &'a str {
        self.schema[self.as_ref().description].as_str()
    }
}

impl<'a> ScalarType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn serialize(&self, value: &(dyn Any + Send + Sync)) -> Result<serde_json::Value, ScalarConversionError> {
        (self.as_ref().serialize)(value)
    }

    pub fn parse_value(&self, value: serde_json::Value) -> Result<Box<dyn Any + Send + Sync>, ScalarConversionError> {
        (self.as_ref().parse_value)(value)
    }

    pub fn parse_literal(&self, raw: &str) -> Result<Box<dyn Any + Send + Sync>, ScalarConversionError> {
        (self.as_ref().parse_literal)(raw)
    }
}

impl std::fmt::Debug for ScalarType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType").field("name", &self.name()).finish()
    }
}

impl<'a> InputObjectType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn fields(self) -> impl ExactSizeIterator<Item = InputValueDefinition<'a>> {
        self.schema.walk_input_values(self.as_ref().fields.clone())
    }
}

impl std::fmt::Debug for InputObjectType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.name())
            .field("fields", &self.fields().map(|field| field.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> FieldDefinition<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn ty(&self) -> Type<'a> {
        Type {
            schema: self.schema,
            record: &self.as_ref().ty,
        }
    }

    pub fn arguments(self) -> impl ExactSizeIterator<Item = InputValueDefinition<'a>> {
        self.schema.walk_input_values(self.as_ref().arguments.clone())
    }

    pub fn argument_by_name(&self, name: &str) -> Option<InputValueDefinition<'a>> {
        self.arguments().find(|argument| argument.name() == name)
    }

    /// `None` on interface fields; always present on object fields.
    pub fn resolver(&self) -> Option<&'a ResolverFn> {
        self.as_ref().resolver.as_ref()
    }
}

impl std::fmt::Debug for FieldDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name())
            .field("ty", &self.ty())
            .field(
                "arguments",
                &self.arguments().map(|argument| argument.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> InputValueDefinition<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn ty(&self) -> Type<'a> {
        Type {
            schema: self.schema,
            record: &self.as_ref().ty,
        }
    }

    pub fn default_value(&self) -> Option<&'a serde_json::Value> {
        self.as_ref().default_value.as_ref()
    }
}

impl<'a> DirectiveType<'a> {
    pub fn description(&self) -> Option<&'a str> {
        description(self.schema, self.as_ref().description)
    }

    pub fn locations(&self) -> &'a [DirectiveLocation] {
        &self.as_ref().locations
    }

    pub fn arguments(self) -> impl ExactSizeIterator<Item = InputValueDefinition<'a>> {
        self.schema.walk_input_values(self.as_ref().arguments.clone())
    }

    pub fn function(&self) -> &'a DirectiveFn {
        &self.as_ref().function
    }
}

/// Any named type in the schema.
#[derive(Clone, Copy)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarType<'a>),
    Object(ObjectType<'a>),
    Interface(InterfaceType<'a>),
    Union(UnionType<'a>),
    Enum(EnumType<'a>),
    InputObject(InputObjectType<'a>),
}

impl<'a> TypeDefinition<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            TypeDefinition::Scalar(walker) => walker.name(),
            TypeDefinition::Object(walker) => walker.name(),
            TypeDefinition::Interface(walker) => walker.name(),
            TypeDefinition::Union(walker) => walker.name(),
            TypeDefinition::Enum(walker) => walker.name(),
            TypeDefinition::InputObject(walker) => walker.name(),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeDefinition::Object(_))
    }

    pub fn as_object(&self) -> Option<ObjectType<'a>> {
        match self {
            TypeDefinition::Object(walker) => Some(*walker),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<InterfaceType<'a>> {
        match self {
            TypeDefinition::Interface(walker) => Some(*walker),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<UnionType<'a>> {
        match self {
            TypeDefinition::Union(walker) => Some(*walker),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumType<'a>> {
        match self {
            TypeDefinition::Enum(walker) => Some(*walker),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<ScalarType<'a>> {
        match self {
            TypeDefinition::Scalar(walker) => Some(*walker),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<InputObjectType<'a>> {
        match self {
            TypeDefinition::InputObject(walker) => Some(*walker),
            _ => None,
        }
    }
}

impl std::fmt::Debug for TypeDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDefinition::Scalar(walker) => walker.fmt(f),
            TypeDefinition::Object(walker) => walker.fmt(f),
            TypeDefinition::Interface(walker) => walker.fmt(f),
            TypeDefinition::Union(walker) => walker.fmt(f),
            TypeDefinition::Enum(walker) => walker.fmt(f),
            TypeDefinition::InputObject(walker) => walker.fmt(f),
        }
    }
}

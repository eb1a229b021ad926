//! The immutable, resolved type graph.
//!
//! All named types live in per-kind arenas on [`Schema`] and reference each
//! other by id, which is what makes cyclic graphs representable without
//! interior mutability. Walker types (`ObjectType<'a>` and friends, see
//! [`walkers`]) pair an id with a schema reference and expose the convenient
//! accessors.

mod ids;
mod type_ref;
mod walkers;

pub use ids::*;
pub use type_ref::{Definition, Type, TypeRecord, TypeRef, Wrapping};
pub use walkers::*;

pub use crate::callables::ScalarConversionError;

use crate::{
    callables::{DirectiveFn, ParseLiteralFn, ParseValueFn, ResolveTypeFn, ResolverFn, SerializeFn},
    directives::DirectiveLocation,
};
use std::{any::Any, collections::HashMap, ops::Range};

pub(crate) type EnumValueIndexFn = std::sync::Arc<dyn Fn(&(dyn Any + Send + Sync)) -> Option<usize> + Send + Sync>;
pub(crate) type EnumNameToValueFn =
    std::sync::Arc<dyn Fn(&str) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// A contiguous range in [`Schema::fields`].
pub type Fields = Range<FieldId>;
/// A contiguous range in [`Schema::input_values`].
pub type InputValues = Range<InputValueId>;
/// A contiguous range in [`Schema::enum_values`].
pub type EnumValues = Range<EnumValueId>;

/// The frozen output of [`SchemaBuilder::build`](crate::SchemaBuilder::build).
///
/// Contains the root operation types and the transitive closure of every
/// named type reachable from them. Registrations that were never referenced
/// from a root are not part of the schema. Immutable and safe for
/// unsynchronized concurrent reads.
pub struct Schema {
    pub(crate) root_types: RootTypes,

    pub(crate) objects: Vec<ObjectTypeRecord>,
    pub(crate) interfaces: Vec<InterfaceTypeRecord>,
    pub(crate) unions: Vec<UnionTypeRecord>,
    pub(crate) enums: Vec<EnumTypeRecord>,
    pub(crate) scalars: Vec<ScalarTypeRecord>,
    pub(crate) input_objects: Vec<InputObjectTypeRecord>,

    pub(crate) fields: Vec<FieldDefinitionRecord>,
    pub(crate) input_values: Vec<InputValueDefinitionRecord>,
    pub(crate) enum_values: Vec<EnumValueRecord>,
    pub(crate) directives: Vec<DirectiveTypeRecord>,

    /// All strings in the schema, deduplicated.
    pub(crate) strings: Vec<String>,

    /// Name lookup for every reachable named type.
    pub(crate) definitions_by_name: HashMap<String, Definition>,
}

/// References to the root operation types. Query is mandatory, the other two
/// are optional by construction.
#[derive(Debug, Clone, Copy)]
pub struct RootTypes {
    pub query: ObjectId,
    pub mutation: Option<ObjectId>,
    pub subscription: Option<ObjectId>,
}

impl Schema {
    pub fn query_type(&self) -> ObjectType<'_> {
        self.walk_object(self.root_types.query)
    }

    pub fn mutation_type(&self) -> Option<ObjectType<'_>> {
        self.root_types.mutation.map(|id| self.walk_object(id))
    }

    pub fn subscription_type(&self) -> Option<ObjectType<'_>> {
        self.root_types.subscription.map(|id| self.walk_object(id))
    }

    /// Look up any reachable named type.
    pub fn type_by_name(&self, name: &str) -> Option<TypeDefinition<'_>> {
        self.definitions_by_name
            .get(name)
            .map(|definition| self.walk_definition(*definition))
    }

    /// Every named type in the schema, scalars first, in resolution order
    /// within each kind.
    pub fn iter_type_definitions(&self) -> impl Iterator<Item = TypeDefinition<'_>> {
        let scalars = (0..self.scalars.len()).map(|idx| TypeDefinition::Scalar(self.walk_scalar(ScalarId::from(idx))));
        let enums = (0..self.enums.len()).map(|idx| TypeDefinition::Enum(self.walk_enum(EnumId::from(idx))));
        let objects = (0..self.objects.len()).map(|idx| TypeDefinition::Object(self.walk_object(ObjectId::from(idx))));
        let interfaces =
            (0..self.interfaces.len()).map(|idx| TypeDefinition::Interface(self.walk_interface(InterfaceId::from(idx))));
        let unions = (0..self.unions.len()).map(|idx| TypeDefinition::Union(self.walk_union(UnionId::from(idx))));
        let input_objects = (0..self.input_objects.len())
            .map(|idx| TypeDefinition::InputObject(self.walk_input_object(InputObjectId::from(idx))));

        scalars
            .chain(enums)
            .chain(objects)
            .chain(interfaces)
            .chain(unions)
            .chain(input_objects)
    }

    pub fn directive_by_name(&self, name: &str) -> Option<DirectiveType<'_>> {
        (0..self.directives.len())
            .map(|idx| self.walk_directive(DirectiveId::from(idx)))
            .find(|directive| directive.name() == name)
    }

    pub fn iter_directives(&self) -> impl ExactSizeIterator<Item = DirectiveType<'_>> {
        (0..self.directives.len()).map(|idx| self.walk_directive(DirectiveId::from(idx)))
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("query", &self.query_type().name())
            .field("mutation", &self.mutation_type().map(|object| object.name().to_owned()))
            .field(
                "subscription",
                &self.subscription_type().map(|object| object.name().to_owned()),
            )
            .field(
                "types",
                &self.iter_type_definitions().map(|ty| ty.name().to_owned()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

pub struct ObjectTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub fields: Fields,
    /// Resolved interfaces this object implements.
    pub interfaces: Vec<InterfaceId>,
}

pub struct InterfaceTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub fields: Fields,
    /// Sorted, so `has_implementor` can binary search.
    pub possible_types: Vec<ObjectId>,
    pub(crate) resolve_type: ResolveTypeFn,
}

pub struct UnionTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    /// In declaration order.
    pub members: Vec<ObjectId>,
    pub(crate) resolve_type: ResolveTypeFn,
}

pub struct EnumTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub values: EnumValues,
    pub(crate) value_index: EnumValueIndexFn,
    pub(crate) name_to_value: EnumNameToValueFn,
}

pub struct EnumValueRecord {
    pub name: StringId,
    /// Always present; an absent description is the empty string.
    pub description: StringId,
}

pub struct ScalarTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub(crate) serialize: SerializeFn,
    pub(crate) parse_value: ParseValueFn,
    pub(crate) parse_literal: ParseLiteralFn,
}

pub struct InputObjectTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub fields: InputValues,
}

pub struct FieldDefinitionRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub ty: TypeRecord,
    pub arguments: InputValues,
    /// Interface fields carry no resolver; the implementing objects do.
    pub(crate) resolver: Option<ResolverFn>,
}

/// An argument of an output field or directive, or an input object field.
pub struct InputValueDefinitionRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub ty: TypeRecord,
    pub default_value: Option<serde_json::Value>,
}

pub struct DirectiveTypeRecord {
    pub name: StringId,
    pub description: Option<StringId>,
    pub locations: Vec<DirectiveLocation>,
    pub arguments: InputValues,
    pub(crate) function: DirectiveFn,
}

impl std::ops::Index<Fields> for Schema {
    type Output = [FieldDefinitionRecord];

    fn index(&self, index: Fields) -> &Self::Output {
        &self.fields[usize::from(index.start)..usize::from(index.end)]
    }
}

impl std::ops::Index<InputValues> for Schema {
    type Output = [InputValueDefinitionRecord];

    fn index(&self, index: InputValues) -> &Self::Output {
        &self.input_values[usize::from(index.start)..usize::from(index.end)]
    }
}

impl std::ops::Index<EnumValues> for Schema {
    type Output = [EnumValueRecord];

    fn index(&self, index: EnumValues) -> &Self::Output {
        &self.enum_values[usize::from(index.start)..usize::from(index.end)]
    }
}

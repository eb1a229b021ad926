use super::*;

macro_rules! id_newtypes {
    ($($storage:ident [ $name:ident ] -> $out:ident,)*) => {
        $(
            #[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
            pub struct $name(usize);

            impl From<$name> for usize {
                fn from(value: $name) -> usize {
                    value.0
                }
            }

            impl From<usize> for $name {
                fn from(value: usize) -> $name {
                    $name(value)
                }
            }

            impl std::ops::Index<$name> for Schema {
                type Output = $out;

                fn index(&self, index: $name) -> &$out {
                    &self.$storage[index.0]
                }
            }

            impl std::ops::IndexMut<$name> for Schema {
                fn index_mut(&mut self, index: $name) -> &mut $out {
                    &mut self.$storage[index.0]
                }
            }
        )*
    }
}

id_newtypes! {
    objects[ObjectId] -> ObjectTypeRecord,
    interfaces[InterfaceId] -> InterfaceTypeRecord,
    unions[UnionId] -> UnionTypeRecord,
    enums[EnumId] -> EnumTypeRecord,
    scalars[ScalarId] -> ScalarTypeRecord,
    input_objects[InputObjectId] -> InputObjectTypeRecord,
    fields[FieldId] -> FieldDefinitionRecord,
    input_values[InputValueId] -> InputValueDefinitionRecord,
    enum_values[EnumValueId] -> EnumValueRecord,
    directives[DirectiveId] -> DirectiveTypeRecord,
    strings[StringId] -> String,
}

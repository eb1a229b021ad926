use super::{
    EnumId, InputObjectId, InterfaceId, ObjectId, ScalarId, Schema, TypeDefinition, UnionId,
};

/// List/non-null wrapping applied around a named type, innermost first.
///
/// `[Int!]!` is `inner_is_required: true` with one `RequiredList` wrapper.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Wrapping {
    pub(crate) inner_is_required: bool,
    /// Innermost list wrapper first.
    pub(crate) list_wrappings: Vec<ListWrapping>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ListWrapping {
    RequiredList,
    NullableList,
}

impl Wrapping {
    pub fn is_required(&self) -> bool {
        match self.list_wrappings.last() {
            Some(ListWrapping::RequiredList) => true,
            Some(ListWrapping::NullableList) => false,
            None => self.inner_is_required,
        }
    }

    pub fn is_list(&self) -> bool {
        !self.list_wrappings.is_empty()
    }
}

/// An unresolved reference to a named type, as declared on a field builder.
///
/// The name is looked up during `build`; referencing a name that never gets
/// registered is a fatal construction error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub(crate) name: String,
    pub(crate) wrapping: Wrapping,
}

impl TypeRef {
    /// A nullable reference to the named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            wrapping: Wrapping::default(),
        }
    }

    /// A non-null reference to the named type.
    pub fn required(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            wrapping: Wrapping {
                inner_is_required: true,
                list_wrappings: Vec::new(),
            },
        }
    }

    /// Wrap the current reference in a nullable list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.wrapping.list_wrappings.push(ListWrapping::NullableList);
        self
    }

    /// Wrap the current reference in a non-null list.
    #[must_use]
    pub fn required_list(mut self) -> Self {
        self.wrapping.list_wrappings.push(ListWrapping::RequiredList);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(f, &self.name, &self.wrapping)
    }
}

/// A resolved reference to a named type: which arena it lives in, and its id
/// there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Definition {
    Scalar(ScalarId),
    Object(ObjectId),
    Interface(InterfaceId),
    Union(UnionId),
    Enum(EnumId),
    InputObject(InputObjectId),
}

impl Definition {
    pub fn is_object(&self) -> bool {
        matches!(self, Definition::Object(_))
    }

    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Definition::Object(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<InterfaceId> {
        match self {
            Definition::Interface(id) => Some(*id),
            _ => None,
        }
    }

    /// Can the definition be used as a field output type?
    pub(crate) fn is_output(&self) -> bool {
        !matches!(self, Definition::InputObject(_))
    }

    /// Can the definition be used as an argument or input field type?
    pub(crate) fn is_input(&self) -> bool {
        matches!(self, Definition::Scalar(_) | Definition::Enum(_) | Definition::InputObject(_))
    }
}

/// A fully resolved type annotation: a definition plus its wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRecord {
    pub definition: Definition,
    pub wrapping: Wrapping,
}

/// Walker over a [`TypeRecord`].
#[derive(Clone, Copy)]
pub struct Type<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) record: &'a TypeRecord,
}

impl<'a> Type<'a> {
    pub fn definition(self) -> TypeDefinition<'a> {
        self.schema.walk_definition(self.record.definition)
    }

    pub fn wrapping(self) -> &'a Wrapping {
        &self.record.wrapping
    }
}

impl std::fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render(f, self.definition().name(), &self.record.wrapping)
    }
}

impl std::fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

fn render(f: &mut std::fmt::Formatter<'_>, name: &str, wrapping: &Wrapping) -> std::fmt::Result {
    for _ in &wrapping.list_wrappings {
        f.write_str("[")?;
    }

    f.write_str(name)?;

    if wrapping.inner_is_required {
        f.write_str("!")?;
    }

    for list_wrapping in &wrapping.list_wrappings {
        f.write_str("]")?;
        if let ListWrapping::RequiredList = list_wrapping {
            f.write_str("!")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wrappings() {
        assert_eq!(TypeRef::named("Int").to_string(), "Int");
        assert_eq!(TypeRef::required("Int").to_string(), "Int!");
        assert_eq!(TypeRef::required("Int").list().to_string(), "[Int!]");
        assert_eq!(TypeRef::required("Int").required_list().to_string(), "[Int!]!");
        assert_eq!(TypeRef::named("Int").list().required_list().to_string(), "[[Int]]!");
    }

    #[test]
    fn required_looks_at_outermost_wrapper() {
        assert!(TypeRef::required("Int").wrapping.is_required());
        assert!(!TypeRef::required("Int").list().wrapping.is_required());
        assert!(TypeRef::named("Int").required_list().wrapping.is_required());
    }
}

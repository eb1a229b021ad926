/// Which registry a name or host type belongs to. Used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TypeKind {
    #[strum(serialize = "scalar")]
    Scalar,
    #[strum(serialize = "enum")]
    Enum,
    #[strum(serialize = "object")]
    Object,
    #[strum(serialize = "interface")]
    Interface,
    #[strum(serialize = "union")]
    Union,
    #[strum(serialize = "input object")]
    InputObject,
}

/// Where in the schema an error was detected.
#[derive(Debug, Clone)]
pub enum SchemaLocation {
    Definition { name: String },
    Field { ty: String, name: String },
}

impl std::fmt::Display for SchemaLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaLocation::Definition { name } => f.write_str(name),
            SchemaLocation::Field { ty, name } => write!(f, "{ty}.{name}"),
        }
    }
}

/// A configuration error raised synchronously by the offending registration
/// call. Always a programmer mistake, never an environmental condition.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("'{name}' is already registered as a {kind} with host type {existing_host_type}")]
    ConflictingHostType {
        name: String,
        kind: TypeKind,
        existing_host_type: &'static str,
    },
    #[error("the name '{name}' is already taken by a {existing_kind}, names are unique across all type kinds")]
    NameTaken { name: String, existing_kind: TypeKind },
    #[error("enum {name} must have at least one member")]
    EmptyEnum { name: String },
    #[error("enum {name}: duplicate member name '{member}'")]
    DuplicateEnumMember { name: String, member: String },
    #[error("enum {name}: members '{first}' and '{second}' map to the same host value, the mapping must be a bijection")]
    EnumValueNotUnique { name: String, first: String, second: String },
    #[error("union {name} must have at least one member")]
    EmptyUnion { name: String },
    #[error("union {name}: duplicate member '{member}'")]
    DuplicateUnionMember { name: String, member: String },
    #[error("union {name}: '{member}' is registered as a {kind}, union members must be objects")]
    UnionMemberNotAnObject {
        name: String,
        member: String,
        kind: TypeKind,
    },
    #[error("directives must be named")]
    UnnamedDirective,
    #[error("directive @{name} must declare at least one location")]
    DirectiveWithoutLocations { name: String },
}

/// A fatal construction error. `build` returns no partial schema.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("'{first}' and '{second}' are both registered with host type {host_type}")]
    DuplicateHostType {
        host_type: &'static str,
        first: String,
        second: String,
    },
    #[error("{location} references unknown type '{referenced}'")]
    UnresolvedType {
        location: SchemaLocation,
        referenced: String,
    },
    #[error("{location} must be an output type, but '{referenced}' is an input object")]
    ExpectedOutputType {
        location: SchemaLocation,
        referenced: String,
    },
    #[error("{location}: '{referenced}' is a {kind}, arguments and input fields must be input types")]
    ExpectedInputType {
        location: SchemaLocation,
        referenced: String,
        kind: TypeKind,
    },
    #[error("object {object} claims to implement '{claimed}', which is a {kind}, not an interface")]
    NotAnInterface {
        object: String,
        claimed: String,
        kind: TypeKind,
    },
    #[error("object {object} does not satisfy interface {interface}: field '{field}' {reason}")]
    InterfaceConformance {
        object: String,
        interface: String,
        field: String,
        reason: String,
    },
    #[error("union {union}: member '{member}' resolved as a {kind}, union members must be objects")]
    UnionMemberNotObject {
        union: String,
        member: String,
        kind: TypeKind,
    },
    #[error("no Query root type was registered")]
    MissingQueryRoot,
    #[error("the Query root type has no fields")]
    EmptyQueryRoot,
}

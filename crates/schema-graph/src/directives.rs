//! Directive locations and the built-in executable directives.

use crate::callables::{BoxError, DirectiveFn};
use std::sync::Arc;

/// Syntactic positions a directive may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

/// `@include(if:)` and `@skip(if:)` read their mandatory boolean argument.
pub(crate) fn boolean_condition(argument: &'static str, include_when: bool) -> DirectiveFn {
    Arc::new(move |arguments: &serde_json::Map<String, serde_json::Value>| {
        let condition = arguments
            .get(argument)
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| BoxError::from(format!("missing boolean argument '{argument}'")))?;
        Ok(condition == include_when)
    })
}

/// `@deprecated` never hides anything at execution time.
pub(crate) fn always_include() -> DirectiveFn {
    Arc::new(|_: &serde_json::Map<String, serde_json::Value>| Ok(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_locations_render_like_graphql() {
        assert_eq!(DirectiveLocation::Field.to_string(), "FIELD");
        assert_eq!(DirectiveLocation::FragmentSpread.to_string(), "FRAGMENT_SPREAD");
        assert_eq!(DirectiveLocation::InputFieldDefinition.to_string(), "INPUT_FIELD_DEFINITION");
    }

    #[test]
    fn include_and_skip_read_their_condition() {
        let include = boolean_condition("if", true);
        let skip = boolean_condition("if", false);
        let mut arguments = serde_json::Map::new();
        arguments.insert("if".to_owned(), serde_json::Value::Bool(true));

        assert!(include(&arguments).unwrap());
        assert!(!skip(&arguments).unwrap());
        assert!(include(&serde_json::Map::new()).is_err());
    }
}

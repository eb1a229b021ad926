//! Built-in scalars and the default serialize/parse behavior.
//!
//! Default conversions round-trip through JSON, the wire encoding: serialize
//! is `serde_json::to_value`, parse-value is `serde_json::from_value`, and
//! literal parsing falls back to parsing the raw token as JSON and feeding it
//! to the parse-value function. Custom functions supplied at registration
//! replace any of the three.

use crate::callables::{ParseLiteralFn, ParseValueFn, ScalarConversionError, SerializeFn};
use serde::{de::DeserializeOwned, Serialize};
use std::{any::Any, sync::Arc};

/// The built-in `ID` scalar. A newtype so it has a host type identity
/// distinct from `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ID(pub String);

impl From<String> for ID {
    fn from(value: String) -> Self {
        ID(value)
    }
}

impl From<&str> for ID {
    fn from(value: &str) -> Self {
        ID(value.to_owned())
    }
}

impl std::fmt::Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn default_serialize<T>() -> SerializeFn
where
    T: Any + Send + Sync + Serialize,
{
    Arc::new(|value: &(dyn Any + Send + Sync)| {
        let value = value.downcast_ref::<T>().ok_or_else(|| {
            ScalarConversionError::new(format!("expected a host value of type {}", std::any::type_name::<T>()))
        })?;
        serde_json::to_value(value).map_err(|err| ScalarConversionError::new(err.to_string()))
    })
}

pub(crate) fn default_parse_value<T>() -> ParseValueFn
where
    T: Any + Send + Sync + DeserializeOwned,
{
    Arc::new(|value: serde_json::Value| {
        serde_json::from_value::<T>(value)
            .map(|parsed| Box::new(parsed) as Box<dyn Any + Send + Sync>)
            .map_err(|err| ScalarConversionError::new(err.to_string()))
    })
}

/// Literal fallback: the raw token is parsed as JSON, then handed to the
/// scalar's parse-value function.
pub(crate) fn literal_via_parse_value(parse_value: ParseValueFn) -> ParseLiteralFn {
    Arc::new(move |raw: &str| {
        let value = serde_json::from_str(raw)
            .map_err(|err| ScalarConversionError::new(format!("invalid literal {raw}: {err}")))?;
        parse_value(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_serialize_rejects_foreign_host_values() {
        let serialize = default_serialize::<i32>();
        assert_eq!(serialize(&7i32).unwrap(), serde_json::json!(7));
        assert!(serialize(&"seven".to_owned()).is_err());
    }

    #[test]
    fn literal_fallback_round_trips_through_json() {
        let parse_literal = literal_via_parse_value(default_parse_value::<bool>());
        let parsed = parse_literal("true").unwrap();
        assert_eq!(parsed.downcast_ref::<bool>(), Some(&true));
        assert!(parse_literal("nope").is_err());
    }

    #[test]
    fn id_serializes_as_a_bare_string() {
        assert_eq!(serde_json::to_value(ID::from("node:1")).unwrap(), serde_json::json!("node:1"));
    }
}

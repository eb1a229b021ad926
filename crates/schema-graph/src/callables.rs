//! Opaque callables supplied at registration time and handed back, untouched,
//! to the execution engine. The invocation contracts are owned by the engine;
//! this crate only validates that the functions exist and stores them in the
//! frozen schema.

use std::{any::Any, sync::Arc};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a field resolver receives from the execution engine.
pub struct ResolverContext<'a> {
    /// The parent host value the field is being resolved on.
    pub parent: &'a (dyn Any + Send + Sync),
    /// Coerced field arguments.
    pub arguments: &'a serde_json::Map<String, serde_json::Value>,
    /// Engine-owned execution state, opaque to the schema.
    pub context: &'a (dyn Any + Send + Sync),
}

impl<'a> ResolverContext<'a> {
    pub fn new(
        parent: &'a (dyn Any + Send + Sync),
        arguments: &'a serde_json::Map<String, serde_json::Value>,
        context: &'a (dyn Any + Send + Sync),
    ) -> Self {
        ResolverContext {
            parent,
            arguments,
            context,
        }
    }
}

/// Produces a field's wire value at query time.
pub type ResolverFn = Arc<dyn Fn(ResolverContext<'_>) -> Result<serde_json::Value, BoxError> + Send + Sync>;

/// Maps a host value to the name of the concrete object type it represents.
/// Used by the engine to dispatch interface and union selections.
pub type ResolveTypeFn = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> Option<String> + Send + Sync>;

/// Executable directive function. The engine calls it with the directive's
/// coerced arguments; `false` means the annotated element is skipped.
pub type DirectiveFn = Arc<dyn Fn(&serde_json::Map<String, serde_json::Value>) -> Result<bool, BoxError> + Send + Sync>;

/// Host value to wire value.
pub type SerializeFn =
    Arc<dyn Fn(&(dyn Any + Send + Sync)) -> Result<serde_json::Value, ScalarConversionError> + Send + Sync>;

/// Wire value to host value.
pub type ParseValueFn =
    Arc<dyn Fn(serde_json::Value) -> Result<Box<dyn Any + Send + Sync>, ScalarConversionError> + Send + Sync>;

/// Raw literal token (as produced by the external query parser) to host value.
pub type ParseLiteralFn =
    Arc<dyn Fn(&str) -> Result<Box<dyn Any + Send + Sync>, ScalarConversionError> + Send + Sync>;

/// A bad wire value or literal at request time. Recoverable: scoped to one
/// field or argument value, reported by the execution engine without aborting
/// sibling fields.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ScalarConversionError {
    message: String,
}

impl ScalarConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        ScalarConversionError {
            message: message.into(),
        }
    }
}

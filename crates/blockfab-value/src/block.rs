use thiserror::Error;

use crate::prelude_internal::*;

/// A block type rejected a raw value. Raised by the content system's own
/// coercion routines and propagated unmodified by every builder.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("`{block}` rejected value: {reason}")]
pub struct ValidationError {
    pub block: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(block: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            reason: reason.into(),
        }
    }
}

/// The narrow interface to one block type of the content system.
///
/// Builders treat the type system as an opaque capability: `clean` validates
/// and coerces a raw specification, `to_native` converts an already-built
/// value into the type's native representation (used when a stream value is
/// realized), and `default_value` is the type's declared default.
pub trait BlockType: std::fmt::Debug + Send + Sync {
    fn clean(&self, raw: &Spec) -> Result<Value, ValidationError>;

    fn default_value(&self) -> Spec;

    fn to_native(&self, value: Value) -> Result<Value, ValidationError> {
        Ok(value)
    }
}

/// A single-line text block. Cleans any scalar to its string form.
#[derive(Debug, Clone)]
pub struct CharBlock {
    default: String,
}

impl CharBlock {
    pub fn new() -> Self {
        Self::with_default("")
    }

    pub fn with_default(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
        }
    }
}

impl Default for CharBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for CharBlock {
    fn clean(&self, raw: &Spec) -> Result<Value, ValidationError> {
        match raw {
            Spec::Scalar(Scalar::Str(s)) => Ok(Value::from(s.clone())),
            Spec::Scalar(scalar) => Ok(Value::from(scalar.to_string())),
            Spec::Null => Err(ValidationError::new("char", "this block requires a value")),
            other => Err(ValidationError::new(
                "char",
                format!("expected a scalar, got {}", other.kind()),
            )),
        }
    }

    fn default_value(&self) -> Spec {
        Spec::from(self.default.clone())
    }
}

/// An integer block. Cleans integers and integer-shaped strings.
#[derive(Debug, Clone)]
pub struct IntegerBlock {
    default: i64,
}

impl IntegerBlock {
    pub fn new() -> Self {
        Self::with_default(0)
    }

    pub fn with_default(default: i64) -> Self {
        Self { default }
    }
}

impl Default for IntegerBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockType for IntegerBlock {
    fn clean(&self, raw: &Spec) -> Result<Value, ValidationError> {
        match raw {
            Spec::Scalar(Scalar::Int(n)) => Ok(Value::from(*n)),
            Spec::Scalar(Scalar::Str(s)) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| ValidationError::new("integer", format!("`{}` is not an integer", s))),
            Spec::Null => Err(ValidationError::new(
                "integer",
                "this block requires a value",
            )),
            other => Err(ValidationError::new(
                "integer",
                format!("expected an integer, got {}", other.kind()),
            )),
        }
    }

    fn default_value(&self) -> Spec {
        Spec::from(self.default)
    }
}

/// Declares a composite child type (struct, list, chooser) in a stream
/// definition. Composite values are assembled by their builders, not cleaned
/// from raw input, so `clean` always rejects; stored values pass through
/// unchanged.
#[derive(Debug, Clone)]
pub struct RawBlock {
    name: &'static str,
}

impl RawBlock {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl BlockType for RawBlock {
    fn clean(&self, _raw: &Spec) -> Result<Value, ValidationError> {
        Err(ValidationError::new(
            self.name,
            "composite blocks are assembled by their builder, not cleaned directly",
        ))
    }

    fn default_value(&self) -> Spec {
        Spec::Null
    }
}

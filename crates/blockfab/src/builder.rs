use crate::prelude_internal::*;

/// The capability one registry slot exposes: build a value from a caller
/// specification, or resolve the slot's own default when nothing was
/// supplied. Every builder is stateless across invocations; registries hold
/// them behind `Arc<dyn Builder>` and are never mutated at build time.
pub trait Builder: std::fmt::Debug + Send + Sync {
    /// Build from an explicit specification. Each builder interprets the
    /// shapes natural to it (map as keyword arguments, seq as ordered items,
    /// scalar as the single value argument) and rejects the rest.
    fn build(&self, spec: &Spec) -> Result<Value, BuildError>;

    /// Build with no supplied value, falling back to the builder's own
    /// default-resolution rule.
    fn build_default(&self) -> Result<Value, BuildError>;
}

/// Convert a supplied specification into a value verbatim, with no builder
/// involved. Used for struct fields that declare a static default: whatever
/// the caller wrote is taken as the literal field value.
pub fn literal_value(spec: &Spec) -> Result<Value, BuildError> {
    match spec {
        Spec::Scalar(scalar) => Ok(Value::Scalar(scalar.clone())),
        Spec::Ref(id) => Ok(Value::Ref(*id)),
        Spec::Seq(items) => Ok(Value::List(
            items.iter().map(literal_value).collect::<Result<_, _>>()?,
        )),
        Spec::Map(fields) => Ok(Value::Struct(
            fields
                .iter()
                .map(|(name, spec)| Ok((name.clone(), literal_value(spec)?)))
                .collect::<Result<_, BuildError>>()?,
        )),
        Spec::Null | Spec::Stream(_) => Err(BuildError::UnexpectedShape {
            builder: "literal",
            got: spec.kind(),
        }),
    }
}

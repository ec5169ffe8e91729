use crate::keypath::PARAM_VALUE;
use crate::prelude_internal::*;

/// Builds a single scalar block by delegating to the block type's own
/// coercion routine. Rejections propagate unmodified.
#[derive(Debug, Clone)]
pub struct LeafBuilder {
    block: Arc<dyn BlockType>,
}

impl LeafBuilder {
    pub fn new(block: impl BlockType + 'static) -> Self {
        Self {
            block: Arc::new(block),
        }
    }
}

impl Builder for LeafBuilder {
    fn build(&self, spec: &Spec) -> Result<Value, BuildError> {
        // The flat key parser addresses a leaf's value through the `value`
        // sub-parameter, so a single-key {value: ...} map is the keyword
        // spelling of the leaf's one positional argument.
        let raw = match spec {
            Spec::Map(params) if params.len() == 1 => {
                params.get(&PARAM_VALUE).unwrap_or(spec)
            }
            _ => spec,
        };
        Ok(self.block.clean(raw)?)
    }

    fn build_default(&self) -> Result<Value, BuildError> {
        Ok(self.block.clean(&self.block.default_value())?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::value::{CharBlock, IntegerBlock};

    #[test]
    fn test_valid_value_passes_through() {
        let builder = LeafBuilder::new(CharBlock::new());
        assert_eq!(builder.build(&Spec::from("A")).unwrap(), Value::from("A"));
    }

    #[test]
    fn test_keyword_value_form_unwraps() {
        let builder = LeafBuilder::new(IntegerBlock::new());
        let spec = Spec::map([("value", 5)]);
        assert_eq!(builder.build(&spec).unwrap(), Value::from(5));
    }

    #[test]
    fn test_other_keyword_maps_are_rejected() {
        let builder = LeafBuilder::new(CharBlock::new());
        let spec = Spec::map([("title", "x")]);
        assert!(builder.build(&spec).is_err());
    }

    #[test]
    fn test_default_is_cleaned() {
        let builder = LeafBuilder::new(IntegerBlock::with_default(100));
        assert_eq!(builder.build_default().unwrap(), Value::from(100));
    }

    #[test]
    fn test_rejection_propagates() {
        let builder = LeafBuilder::new(IntegerBlock::new());
        let err = builder.build(&Spec::from("not a number")).unwrap_err();
        assert!(matches!(err, BuildError::Validation(_)));
    }
}

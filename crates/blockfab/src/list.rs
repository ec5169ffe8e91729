use crate::keypath;
use crate::prelude_internal::*;

/// Composes an ordered list by invoking one child builder per item.
///
/// Items arrive either as an ordered sequence (already in output order) or
/// as a legacy flat namespace (`"<i>"`, `"<i>__<field>"`) sorted by position.
/// A failure on any item aborts the whole build; no prefix is returned.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    item: Arc<dyn Builder>,
}

impl ListBuilder {
    pub fn new(item: impl Builder + 'static) -> Self {
        Self {
            item: Arc::new(item),
        }
    }

    pub fn from_arc(item: Arc<dyn Builder>) -> Self {
        Self { item }
    }

    /// Build from items already in order. Each item shape-dispatches through
    /// the child builder: a map is its keyword form, a nested sequence its
    /// own items, a scalar its single value argument.
    pub fn build_items(&self, items: &[Spec]) -> Result<Value, BuildError> {
        let built = items
            .iter()
            .map(|spec| self.item.build(spec))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::List(built))
    }

    fn build_flat(&self, params: &Map<TagName, Spec>) -> Result<Value, BuildError> {
        let built = keypath::decode_list(params)
            .into_iter()
            .map(|item_params| self.item.build(&Spec::Map(item_params)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::List(built))
    }
}

impl Builder for ListBuilder {
    fn build(&self, spec: &Spec) -> Result<Value, BuildError> {
        match spec {
            Spec::Seq(items) => self.build_items(items),
            Spec::Map(params) => self.build_flat(params),
            _ => Err(BuildError::UnexpectedShape {
                builder: "list",
                got: spec.kind(),
            }),
        }
    }

    fn build_default(&self) -> Result<Value, BuildError> {
        Ok(Value::List(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::leaf::LeafBuilder;
    use crate::value::{CharBlock, IntegerBlock};

    fn char_list() -> ListBuilder {
        ListBuilder::new(LeafBuilder::new(CharBlock::new()))
    }

    #[test]
    fn test_items_preserve_input_order() {
        let value = char_list()
            .build(&Spec::seq(["A", "B", "C"]))
            .unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from("A"), Value::from("B"), Value::from("C")])
        );
    }

    #[test]
    fn test_flat_keys_sort_by_position() {
        let spec = Spec::map([("2", "C"), ("0", "A"), ("1", "B")]);
        let value = char_list().build(&spec).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::from("A"), Value::from("B"), Value::from("C")])
        );
    }

    #[test]
    fn test_failure_aborts_the_whole_build() {
        let list = ListBuilder::new(LeafBuilder::new(IntegerBlock::new()));
        let err = list.build(&Spec::seq([Spec::from(1), Spec::from("x")])).unwrap_err();
        assert!(matches!(err, BuildError::Validation(_)));
    }

    #[test]
    fn test_default_is_an_empty_list() {
        assert_eq!(char_list().build_default().unwrap(), Value::List(Vec::new()));
    }

    #[test]
    fn test_scalar_specification_is_rejected() {
        assert!(char_list().build(&Spec::from("A")).is_err());
    }
}

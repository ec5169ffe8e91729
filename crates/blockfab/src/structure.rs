use crate::prelude_internal::*;

/// One declared slot of a struct schema: either a static default literal or
/// a delegated child builder.
#[derive(Debug, Clone)]
pub enum Slot {
    Value(Value),
    Builder(Arc<dyn Builder>),
}

/// Composes a fixed-schema struct. The schema declares every field once, in
/// order, and is never mutated after construction.
///
/// Per declared field: an explicit null override omits the field entirely;
/// a supplied value goes through the registered builder (or is taken as the
/// literal field value when the slot is a static default); nothing supplied
/// resolves the slot's default. Caller keys matching no declared field are
/// ignored, so over-specified shared fixtures build cleanly.
#[derive(Debug, Clone, Default)]
pub struct StructBuilder {
    schema: Map<TagName, Slot>,
}

impl StructBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, field: impl Into<TagName>, value: impl Into<Value>) -> Self {
        self.schema.insert(field.into(), Slot::Value(value.into()));
        self
    }

    pub fn with_builder(mut self, field: impl Into<TagName>, builder: impl Builder + 'static) -> Self {
        self.schema
            .insert(field.into(), Slot::Builder(Arc::new(builder)));
        self
    }

    /// Build with keyword overrides.
    pub fn build_with(&self, overrides: &Map<TagName, Spec>) -> Result<Value, BuildError> {
        let mut fields = Map::default();
        for (name, slot) in self.schema.iter() {
            match overrides.get(name) {
                // Explicit opt-out: the field is omitted from the output.
                Some(Spec::Null) => continue,
                Some(spec) => {
                    let value = match slot {
                        Slot::Builder(builder) => builder.build(spec)?,
                        Slot::Value(_) => literal_value(spec)?,
                    };
                    fields.insert(name.clone(), value);
                }
                None => {
                    let value = match slot {
                        Slot::Builder(builder) => builder.build_default()?,
                        Slot::Value(default) => default.clone(),
                    };
                    fields.insert(name.clone(), value);
                }
            }
        }
        Ok(Value::Struct(fields))
    }
}

impl Builder for StructBuilder {
    fn build(&self, spec: &Spec) -> Result<Value, BuildError> {
        match spec {
            Spec::Map(overrides) => self.build_with(overrides),
            _ => Err(BuildError::UnexpectedShape {
                builder: "struct",
                got: spec.kind(),
            }),
        }
    }

    fn build_default(&self) -> Result<Value, BuildError> {
        self.build_with(&Map::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chooser::ChooserBuilder;
    use crate::leaf::LeafBuilder;
    use crate::value::{CharBlock, IntegerBlock, MemoryStore};

    fn item_builder() -> StructBuilder {
        StructBuilder::new()
            .with_builder("label", LeafBuilder::new(CharBlock::with_default("my-label")))
            .with_builder("value", LeafBuilder::new(IntegerBlock::with_default(100)))
    }

    #[test]
    fn test_every_declared_field_gets_a_value() {
        let value = item_builder().build_default().unwrap();
        assert_eq!(
            value,
            Value::record([("label", Value::from("my-label")), ("value", Value::from(100))])
        );
    }

    #[test]
    fn test_supplied_fields_override_defaults_in_schema_order() {
        let value = item_builder()
            .build(&Spec::map([("value", 123)]))
            .unwrap();
        assert_eq!(
            value,
            Value::record([("label", Value::from("my-label")), ("value", Value::from(123))])
        );
    }

    #[test]
    fn test_null_omits_the_field_without_building_it() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let builder = StructBuilder::new()
            .with_builder("title", LeafBuilder::new(CharBlock::new()))
            .with_builder(
                "image",
                ChooserBuilder::new(
                    std::sync::Arc::clone(&store) as Arc<dyn RecordStore>,
                    RecordSpec::new("image", "An image"),
                ),
            );
        let value = builder
            .build(&Spec::map([("title", Spec::from("T")), ("image", Spec::Null)]))
            .unwrap();
        assert_eq!(value, Value::record([("title", "T")]));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_unknown_override_keys_are_ignored() {
        let value = item_builder()
            .build(&Spec::map([("label", Spec::from("x")), ("unrelated", Spec::from(1))]))
            .unwrap();
        assert_eq!(
            value,
            Value::record([("label", Value::from("x")), ("value", Value::from(100))])
        );
    }

    #[test]
    fn test_static_default_slot_takes_literal_overrides() {
        let builder = StructBuilder::new().with_default("count", 1);
        let value = builder.build(&Spec::map([("count", 5)])).unwrap();
        assert_eq!(value, Value::record([("count", Value::from(5))]));
    }

    #[test]
    fn test_nested_builder_receives_keyword_form() {
        let builder = StructBuilder::new().with_builder("item", item_builder());
        let value = builder
            .build(&Spec::map([("item", Spec::map([("label", "inner")]))]))
            .unwrap();
        assert_eq!(
            value,
            Value::record([(
                "item",
                Value::record([("label", Value::from("inner")), ("value", Value::from(100))])
            )])
        );
    }
}

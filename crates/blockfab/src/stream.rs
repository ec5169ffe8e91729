use crate::keypath;
use crate::prelude_internal::*;

/// How assembly treats an entry whose tag has no registered factory.
///
/// The legacy flat namespace is lenient and drops the entry, so shared
/// fixtures can carry keys for blocks a given schema does not register. The
/// structured form is strict: a structural mismatch there is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnknownTag {
    Drop,
    Fail,
}

/// Composes an ordered stream of heterogeneous tagged blocks.
///
/// Both input encodings normalize to one ordered (tag, spec) sequence and
/// run through a single assembly pass; the built entries are then realized
/// against the content system's own stream definition, which is a separate
/// namespace from this composer's factory registry.
#[derive(Debug, Clone)]
pub struct StreamBuilder {
    factories: Map<TagName, Arc<dyn Builder>>,
    def: StreamDef,
}

impl StreamBuilder {
    pub fn new(def: StreamDef) -> Self {
        Self {
            factories: Map::default(),
            def,
        }
    }

    pub fn with_factory(mut self, tag: impl Into<TagName>, builder: impl Builder + 'static) -> Self {
        self.factories.insert(tag.into(), Arc::new(builder));
        self
    }

    /// Build from the structured form: entries already in order, unknown
    /// tags fail.
    pub fn build_entries(&self, entries: &[(TagName, Spec)]) -> Result<Value, BuildError> {
        self.assemble(
            entries.iter().map(|(tag, spec)| (tag.clone(), spec.clone())),
            UnknownTag::Fail,
        )
    }

    /// Build from the legacy flat namespace: keys decode to positioned
    /// entries, unknown tags drop.
    pub fn build_flat(&self, params: &Map<TagName, Spec>) -> Result<Value, BuildError> {
        self.assemble(keypath::decode_stream(params), UnknownTag::Drop)
    }

    fn assemble(
        &self,
        entries: impl IntoIterator<Item = (TagName, Spec)>,
        unknown: UnknownTag,
    ) -> Result<Value, BuildError> {
        let mut built = Vec::new();
        for (tag, spec) in entries {
            let Some(factory) = self.factories.get(&tag) else {
                match unknown {
                    UnknownTag::Drop => {
                        tracing::debug!(tag = tag.as_str(), "dropping entry with unregistered tag");
                        continue;
                    }
                    UnknownTag::Fail => return Err(BuildError::UnknownBlock(tag)),
                }
            };
            built.push((tag, factory.build(&spec)?));
        }
        Ok(Value::Stream(self.def.instantiate(built)?))
    }
}

impl Builder for StreamBuilder {
    fn build(&self, spec: &Spec) -> Result<Value, BuildError> {
        match spec {
            Spec::Stream(entries) => self.build_entries(entries),
            Spec::Map(params) => self.build_flat(params),
            _ => Err(BuildError::UnexpectedShape {
                builder: "stream",
                got: spec.kind(),
            }),
        }
    }

    fn build_default(&self) -> Result<Value, BuildError> {
        Ok(Value::Stream(self.def.instantiate(Vec::new())?))
    }
}

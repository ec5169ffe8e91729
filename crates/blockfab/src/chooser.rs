use crate::keypath::PARAM_VALUE;
use crate::prelude_internal::*;

/// Builds a value referencing an externally persisted record.
///
/// With no supplied value the builder creates one record through the
/// persistence collaborator and returns its identifier; with a supplied
/// value it expects a pre-built reference and returns that identifier.
/// Records created before a later failure are not rolled back.
#[derive(Debug, Clone)]
pub struct ChooserBuilder {
    store: Arc<dyn RecordStore>,
    resource: RecordSpec,
}

impl ChooserBuilder {
    pub fn new(store: Arc<dyn RecordStore>, resource: RecordSpec) -> Self {
        Self { store, resource }
    }
}

impl Builder for ChooserBuilder {
    fn build(&self, spec: &Spec) -> Result<Value, BuildError> {
        match spec {
            Spec::Ref(id) => Ok(Value::Ref(*id)),
            // Keyword spelling of the single reference argument.
            Spec::Map(params) if params.len() == 1 => match params.get(&PARAM_VALUE) {
                Some(inner) => self.build(inner),
                None => Err(BuildError::UnexpectedShape {
                    builder: "chooser",
                    got: spec.kind(),
                }),
            },
            // An empty keyword form supplies nothing; fall back to creating
            // the default upstream record.
            Spec::Map(params) if params.is_empty() => self.build_default(),
            _ => Err(BuildError::UnexpectedShape {
                builder: "chooser",
                got: spec.kind(),
            }),
        }
    }

    fn build_default(&self) -> Result<Value, BuildError> {
        let id = self.store.create(&self.resource)?;
        Ok(Value::Ref(id))
    }
}

use std::sync::Arc;

use thiserror::Error;

use crate::prelude_internal::*;

/// The content system's declared child-type registry for one stream field.
///
/// This is a different namespace from any builder registry: a builder decides
/// *how* an entry is constructed, the definition decides which tags the
/// content system accepts and how their values convert to native form.
#[derive(Debug, Clone, Default)]
pub struct StreamDef {
    child_types: Map<TagName, Arc<dyn BlockType>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    #[error("stream definition declares no child block `{0}`")]
    UndeclaredChild(TagName),
    #[error(transparent)]
    Coerce(#[from] ValidationError),
}

impl StreamDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, tag: impl Into<TagName>, block: impl BlockType + 'static) -> Self {
        self.child_types.insert(tag.into(), Arc::new(block));
        self
    }

    pub fn child(&self, tag: &TagName) -> Option<&Arc<dyn BlockType>> {
        self.child_types.get(tag)
    }

    /// Realize built entries into the concrete stream value. Every tag must
    /// be declared here and every value passes through that child type's
    /// native conversion.
    pub fn instantiate(
        &self,
        entries: Vec<(TagName, Value)>,
    ) -> Result<StreamValue, StreamError> {
        let mut realized = Vec::with_capacity(entries.len());
        for (tag, value) in entries {
            let child = self
                .child(&tag)
                .ok_or_else(|| StreamError::UndeclaredChild(tag.clone()))?;
            let value = child.to_native(value)?;
            realized.push(StreamEntry { tag, value });
        }
        Ok(StreamValue(realized))
    }
}

/// One realized stream entry: the type tag and the native value.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEntry {
    pub tag: TagName,
    pub value: Value,
}

/// An ordered, type-tagged sequence as the content system stores it.
#[derive(Debug, Clone, PartialEq, Plural)]
pub struct StreamValue(Vec<StreamEntry>);

impl StreamValue {
    pub fn entries(&self) -> &[StreamEntry] {
        &self.0
    }

    /// (tag, value) view for assertions.
    pub fn tagged(&self) -> Vec<(&str, &Value)> {
        self.0
            .iter()
            .map(|entry| (entry.tag.as_str(), &entry.value))
            .collect()
    }
}

//! Data-model for blockfab: the specifications callers write and the typed
//! values builders produce.

/// Insertion-ordered map used for schemas, registries and built structs.
pub mod map;

/// String key type shared by struct field names and stream type tags.
pub mod tag;

/// The caller-facing specification type.
pub mod spec;

/// Built values and their kinds.
pub mod value;

/// The content system's stream definition and realized stream values.
pub mod stream;

/// Narrow interface to the content system's block types.
pub mod block;

/// Narrow interface to the record persistence collaborator.
pub mod store;

pub use block::{BlockType, CharBlock, IntegerBlock, RawBlock, ValidationError};
pub use map::Map;
pub use spec::{Scalar, Spec, SpecKind};
pub use store::{MemoryStore, RecordId, RecordSpec, RecordStore, StoreError};
pub use stream::{StreamDef, StreamEntry, StreamError, StreamValue};
pub use tag::TagName;
pub use value::{Value, ValueKind};

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::block::{BlockType, ValidationError};
    pub use crate::map::Map;
    pub use crate::spec::{Scalar, Spec, SpecKind};
    pub use crate::store::{RecordId, RecordSpec, RecordStore, StoreError};
    pub use crate::stream::{StreamDef, StreamEntry, StreamError, StreamValue};
    pub use crate::tag::TagName;
    pub use crate::value::{Value, ValueKind};
    pub use thisisplural::Plural;
}

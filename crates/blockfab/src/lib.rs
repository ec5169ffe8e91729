//! Declarative test-data builders for CMS block trees.
//!
//! Test code supplies one flat or nested specification; the builders decode
//! it into an ordered tree of child-builder invocations, fill in declared
//! defaults for omitted slots, and assemble the typed value bottom-up.

/// The builder capability trait and literal-value conversion.
pub mod builder;

/// Build-time errors.
pub mod error;

/// Parser for the legacy flat key namespace (`<index>__<tag>__<param>`).
pub mod keypath;

/// Builder for a single scalar block.
pub mod leaf;

/// Builder for a block referencing an externally persisted record.
pub mod chooser;

/// Composer for ordered lists of homogeneous items.
pub mod list;

/// Composer for fixed-schema structs of named fields.
pub mod structure;

/// Composer for ordered streams of heterogeneous tagged blocks.
pub mod stream;

pub use blockfab_value as value;

pub use builder::Builder;
pub use chooser::ChooserBuilder;
pub use error::BuildError;
pub use leaf::LeafBuilder;
pub use list::ListBuilder;
pub use stream::StreamBuilder;
pub use structure::{Slot, StructBuilder};

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::builder::{Builder, literal_value};
    pub use crate::error::BuildError;
    pub use blockfab_value::{
        BlockType, Map, RecordId, RecordSpec, RecordStore, Scalar, Spec, SpecKind, StoreError,
        StreamDef, StreamEntry, StreamError, StreamValue, TagName, ValidationError, Value,
        ValueKind,
    };
    pub use std::sync::Arc;
}

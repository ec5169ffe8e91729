use thiserror::Error;

use blockfab_value::{SpecKind, StoreError, StreamError, TagName, ValidationError};

/// Any failure during a build pass. A build either returns a complete value
/// or one of these; partial trees are never returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// A type tag or field name has no registered child builder. Raised for
    /// structured stream input; legacy flat input drops the entry instead.
    #[error("no builder registered for block `{0}`")]
    UnknownBlock(TagName),
    /// A builder was handed a specification shape it cannot interpret.
    #[error("{builder} builder cannot build from a {got} specification")]
    UnexpectedShape {
        builder: &'static str,
        got: SpecKind,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Stream(#[from] StreamError),
}

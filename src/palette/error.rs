use thiserror::Error;

/// Errors raised by palette generation and the palette store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Requested color count was negative.
    #[error("invalid color count {count}: must be zero or greater")]
    InvalidArgument { count: i64 },
    /// Requested color count does not fit in memory.
    #[error("cannot allocate {count} colors")]
    TooLarge { count: i64 },
    /// Delete referenced a position past the end of the store.
    #[error("palette index {index} out of range (store holds {len})")]
    OutOfRange { index: usize, len: usize },
}

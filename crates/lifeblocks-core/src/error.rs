use thiserror::Error;

/// Errors raised at the boundary where frame inputs are constructed.
/// The per-pixel pipeline itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("grid dimensions {width}x{height} must be positive and even")]
    InvalidGridDimensions { width: u32, height: u32 },

    #[error("grid of {cells} cells exceeds cell buffer capacity {capacity}")]
    GridExceedsCapacity { cells: usize, capacity: usize },

    #[error("cell index {index} out of range (capacity {capacity})")]
    CellIndexOutOfRange { index: usize, capacity: usize },

    #[error("invalid lifecycle value {0} (expected 0..=7)")]
    InvalidLifecycleValue(u8),

    #[error("cell buffer byte size mismatch: expected at most {expected}, got {actual}")]
    CellBufferSize { expected: usize, actual: usize },

    #[error("palette is missing the {0} material")]
    MissingMaterial(&'static str),
}

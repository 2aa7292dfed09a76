use lifeblocks_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DriverError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("viewport {width}x{height} must be non-empty")]
    InvalidViewport { width: u32, height: u32 },

    #[error("cell source produced {actual} cells for a {width}x{height} grid")]
    CellCountMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

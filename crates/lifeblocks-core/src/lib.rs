pub mod cells;
pub mod constants;
pub mod error;
pub mod material;
pub mod math;
pub mod settings;
pub mod types;

pub use cells::CellBuffer;
pub use error::CoreError;
pub use material::{MaterialDef, MaterialRole, MaterialTable, Palette, PbrMaterial};
pub use settings::{DriverSettings, RenderSettings};
pub use types::{GridDimensions, LifecycleValue};

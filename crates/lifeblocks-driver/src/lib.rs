pub mod clock;
pub mod controls;
pub mod error;
pub mod scheduler;
pub mod source;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controls::Command;
pub use error::DriverError;
pub use scheduler::{Driver, FrameReport};
pub use source::CellSource;

pub mod camera;
pub mod context;
pub mod integrator;
pub mod layout;
pub mod lighting;
pub mod march;
pub mod normal;
pub mod renderer;
pub mod resolver;
pub mod scene;
pub mod sdf;
pub mod shading;

pub use context::FrameContext;
pub use renderer::{FrameBuffer, Renderer};

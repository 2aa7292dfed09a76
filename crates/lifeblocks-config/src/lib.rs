pub mod defaults;
pub mod loader;
pub mod validator;

pub use defaults::{
    default_driver_settings, default_palette, default_render_settings, driver_settings_from_str,
    palette_from_str, render_settings_from_str,
};
pub use loader::LoadError;
pub use validator::ValidationError;

use lifeblocks_core::material::{MaterialDef, MaterialTable};
use lifeblocks_core::settings::{DriverSettings, RenderSettings};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse palette RON: {0}")]
    PaletteParseError(String),
    #[error("Failed to parse render settings RON: {0}")]
    RenderSettingsParseError(String),
    #[error("Failed to parse driver settings RON: {0}")]
    DriverSettingsParseError(String),
}

/// Parse a palette RON string (a list of material definitions) into a MaterialTable.
pub fn load_palette_from_str(ron_str: &str) -> Result<MaterialTable, LoadError> {
    let options = ron::Options::default();
    let materials: Vec<MaterialDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::PaletteParseError(e.to_string()))?;
    log::debug!("Parsed palette with {} materials", materials.len());
    Ok(MaterialTable { materials })
}

/// Parse render settings. Omitted fields keep their defaults.
pub fn load_render_settings_from_str(ron_str: &str) -> Result<RenderSettings, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::RenderSettingsParseError(e.to_string()))
}

/// Parse driver settings. Omitted fields keep their defaults.
pub fn load_driver_settings_from_str(ron_str: &str) -> Result<DriverSettings, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::DriverSettingsParseError(e.to_string()))
}

//! Built-in palette and settings, embedded from `data/`.

use lifeblocks_core::material::{MaterialTable, Palette};
use lifeblocks_core::settings::{DriverSettings, RenderSettings};

use crate::loader::{
    load_driver_settings_from_str, load_palette_from_str, load_render_settings_from_str,
};
use crate::validator::{validate_driver_settings, validate_materials, validate_render_settings};

pub const PALETTE_RON: &str = include_str!("../../../data/palette.ron");
pub const RENDER_SETTINGS_RON: &str = include_str!("../../../data/render.ron");
pub const DRIVER_SETTINGS_RON: &str = include_str!("../../../data/driver.ron");

/// Load, validate and convert a palette. Validation problems are logged and
/// the built-in canonical materials are used instead.
pub fn palette_from_str(ron_str: &str) -> Palette {
    match load_palette_from_str(ron_str) {
        Ok(table) => palette_from_table(&table),
        Err(e) => {
            log::warn!("{e}; using built-in materials");
            Palette::default()
        }
    }
}

fn palette_from_table(table: &MaterialTable) -> Palette {
    if let Err(errors) = validate_materials(table) {
        for e in &errors {
            log::warn!("Palette validation: {e}");
        }
        return Palette::default();
    }
    match Palette::from_table(table) {
        Ok(palette) => {
            log::info!("Loaded palette with {} materials", table.len());
            palette
        }
        Err(e) => {
            log::warn!("{e}; using built-in materials");
            Palette::default()
        }
    }
}

/// The embedded default palette.
pub fn default_palette() -> Palette {
    palette_from_str(PALETTE_RON)
}

/// Load and validate render settings, falling back to defaults.
pub fn render_settings_from_str(ron_str: &str) -> RenderSettings {
    let settings = match load_render_settings_from_str(ron_str) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}; using default render settings");
            return RenderSettings::default();
        }
    };
    match validate_render_settings(&settings) {
        Ok(()) => settings,
        Err(errors) => {
            for e in &errors {
                log::warn!("Render settings validation: {e}");
            }
            RenderSettings::default()
        }
    }
}

/// Load and validate driver settings, falling back to defaults.
pub fn driver_settings_from_str(ron_str: &str) -> DriverSettings {
    let settings = match load_driver_settings_from_str(ron_str) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}; using default driver settings");
            return DriverSettings::default();
        }
    };
    match validate_driver_settings(&settings) {
        Ok(()) => settings,
        Err(errors) => {
            for e in &errors {
                log::warn!("Driver settings validation: {e}");
            }
            DriverSettings::default()
        }
    }
}

pub fn default_render_settings() -> RenderSettings {
    render_settings_from_str(RENDER_SETTINGS_RON)
}

pub fn default_driver_settings() -> DriverSettings {
    driver_settings_from_str(DRIVER_SETTINGS_RON)
}

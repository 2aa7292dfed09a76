use std::collections::HashSet;

use lifeblocks_core::constants::CELL_CAPACITY;
use lifeblocks_core::material::{MaterialRole, MaterialTable};
use lifeblocks_core::settings::{DriverSettings, RenderSettings};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate material role {0:?}")]
    DuplicateRole(MaterialRole),
    #[error("No material defined for role {0:?}")]
    MissingRole(MaterialRole),
    #[error("Material '{name}' {field} {value} is outside [0, 1]")]
    OutOfUnitRange {
        name: String,
        field: &'static str,
        value: f32,
    },
    #[error("Material '{name}' emission {value} is negative")]
    NegativeEmission { name: String, value: f32 },
    #[error("Render setting {field} must be positive, got {value}")]
    NonPositiveRenderSetting { field: &'static str, value: f64 },
    #[error("Driver setting {field} must be positive, got {value}")]
    NonPositiveDriverSetting { field: &'static str, value: f64 },
    #[error("Grid dimension bounds {floor}..={ceil} must be even and contain {value}")]
    GridDimensionBounds { floor: u32, ceil: u32, value: u32 },
    #[error("Grid dimension step {0} must be even")]
    OddGridDimensionStep(u32),
    #[error("Grid dimension ceiling {ceil} needs {cells} cells, more than the capacity {capacity}")]
    GridCeilingExceedsCapacity {
        ceil: u32,
        cells: usize,
        capacity: usize,
    },
}

fn check_unit(errors: &mut Vec<ValidationError>, name: &str, field: &'static str, value: f32) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::OutOfUnitRange {
            name: name.to_string(),
            field,
            value,
        });
    }
}

/// Validate a palette: one material per role, scalars and color channels in
/// [0, 1], emission non-negative.
pub fn validate_materials(table: &MaterialTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for mat in &table.materials {
        if !seen.insert(mat.role) {
            errors.push(ValidationError::DuplicateRole(mat.role));
        }
    }
    for role in MaterialRole::ALL {
        if !seen.contains(&role) {
            errors.push(ValidationError::MissingRole(role));
        }
    }

    for mat in &table.materials {
        let (r, g, b) = mat.color;
        check_unit(&mut errors, &mat.name, "color.r", r);
        check_unit(&mut errors, &mat.name, "color.g", g);
        check_unit(&mut errors, &mat.name, "color.b", b);
        check_unit(&mut errors, &mat.name, "metallic", mat.metallic);
        check_unit(&mut errors, &mat.name, "roughness", mat.roughness);
        check_unit(&mut errors, &mat.name, "reflectance", mat.reflectance);
        check_unit(
            &mut errors,
            &mat.name,
            "ambient_occlusion",
            mat.ambient_occlusion,
        );
        if mat.emission < 0.0 || mat.emission.is_nan() {
            errors.push(ValidationError::NegativeEmission {
                name: mat.name.clone(),
                value: mat.emission,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate render settings. Zero bounces is allowed (primary hit only).
pub fn validate_render_settings(settings: &RenderSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let positive = [
        ("max_steps", settings.max_steps as f64),
        ("march_accuracy", settings.march_accuracy as f64),
        ("max_distance_scale", settings.max_distance_scale as f64),
        ("shadow_bias", settings.shadow_bias as f64),
        ("reflection_bias", settings.reflection_bias as f64),
        ("gamma", settings.gamma as f64),
    ];
    for (field, value) in positive {
        if !(value > 0.0) {
            errors.push(ValidationError::NonPositiveRenderSetting { field, value });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate driver settings.
pub fn validate_driver_settings(settings: &DriverSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let positive = [
        ("tick_interval_ms", settings.tick_interval_ms),
        ("dead_reset_delay_ms", settings.dead_reset_delay_ms),
        ("grid_dimension_step", settings.grid_dimension_step as f64),
    ];
    for (field, value) in positive {
        if !(value > 0.0) {
            errors.push(ValidationError::NonPositiveDriverSetting { field, value });
        }
    }

    let floor = settings.min_grid_dimension_floor;
    let ceil = settings.min_grid_dimension_ceil;
    let value = settings.min_grid_dimension;
    let all_even = floor % 2 == 0 && ceil % 2 == 0 && value % 2 == 0;
    if floor == 0 || !all_even || !(floor..=ceil).contains(&value) {
        errors.push(ValidationError::GridDimensionBounds { floor, ceil, value });
    }
    // Grid dimensions must stay even.
    if settings.grid_dimension_step % 2 != 0 {
        errors.push(ValidationError::OddGridDimensionStep(
            settings.grid_dimension_step,
        ));
    }
    let cells = ceil as usize * ceil as usize;
    if cells > CELL_CAPACITY {
        errors.push(ValidationError::GridCeilingExceedsCapacity {
            ceil,
            cells,
            capacity: CELL_CAPACITY,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

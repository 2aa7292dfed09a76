use lifeblocks_core::constants::{GUTTER_RATIO, ROUNDING_RATIO, VIEW_SCALE};
use lifeblocks_core::types::GridDimensions;

/// Block sizing derived from the grid dimensions and viewport aspect.
///
/// Along the shorter grid axis, `n` block half-extents and `n + 1` gutters
/// add up to the view scale. Portrait viewports shrink everything by the aspect ratio so the
/// narrow axis still fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Half the side length of a block.
    pub block_size: f32,
    /// Gap between neighbouring blocks.
    pub gutter: f32,
    /// Corner and edge rounding radius.
    pub rounding: f32,
}

impl GridLayout {
    pub fn new(grid: GridDimensions, aspect_ratio: f32) -> Self {
        let min_dimension = grid.min_dimension() as f32;
        let nom = VIEW_SCALE * aspect_ratio.min(1.0);
        let denom = (min_dimension + 1.0) + GUTTER_RATIO * min_dimension;
        let block_size = nom * GUTTER_RATIO / denom;
        Self {
            block_size,
            gutter: nom / denom,
            rounding: block_size * ROUNDING_RATIO,
        }
    }

    /// Distance between neighbouring block centers.
    pub fn spacing(&self) -> f32 {
        2.0 * self.block_size + self.gutter
    }

    /// Neighbourhood margin used when classifying flat faces.
    pub fn face_margin(&self) -> f32 {
        2.0 * self.block_size + self.gutter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32) -> GridDimensions {
        GridDimensions::new(w, h).expect("valid grid")
    }

    #[test]
    fn test_blocks_and_gutters_fill_view_scale() {
        let layout = GridLayout::new(grid(16, 8), 2.0);
        // 8 half-extents plus 9 gutters fill the view scale.
        let span = 8.0 * layout.block_size + 9.0 * layout.gutter;
        assert!((span - VIEW_SCALE).abs() < 1e-3, "span {span}");
    }

    #[test]
    fn test_block_to_gutter_ratio() {
        let layout = GridLayout::new(grid(8, 8), 1.0);
        assert!((layout.block_size / layout.gutter - GUTTER_RATIO).abs() < 1e-5);
        assert!((layout.rounding - 0.5 * layout.block_size).abs() < 1e-6);
        assert_eq!(layout.spacing(), 2.0 * layout.block_size + layout.gutter);
    }

    #[test]
    fn test_portrait_shrinks_blocks() {
        let square = GridLayout::new(grid(8, 8), 1.0);
        let portrait = GridLayout::new(grid(8, 16), 0.5);
        assert!((portrait.block_size - 0.5 * square.block_size).abs() < 1e-5);
        // Wide viewports do not grow blocks past the square layout.
        let wide = GridLayout::new(grid(16, 8), 2.0);
        assert_eq!(wide, square);
    }

    #[test]
    fn test_minimal_grid_is_single_block_sized() {
        let layout = GridLayout::new(grid(2, 2), 1.0);
        assert!(layout.block_size > 0.0);
        assert!(layout.block_size.is_finite());
    }
}

use lifeblocks_core::constants::{LIFECYCLE_ALIVE, LIFECYCLE_DEAD, LIFECYCLE_GROWING};
use lifeblocks_core::types::GridDimensions;
use lifeblocks_driver::CellSource;

/// How a bench source decides which cells should be alive each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Nothing ever lives.
    Empty,
    /// Alternating cells, inverted every generation.
    Checkerboard,
    /// Diagonal bands drifting one cell per generation.
    Stripes,
    /// Roughly a third of the cells, reshuffled every generation.
    Scatter,
}

impl Pattern {
    pub fn is_alive(self, x: u32, y: u32, generation: u32) -> bool {
        match self {
            Self::Empty => false,
            Self::Checkerboard => (x + y + generation) % 2 == 0,
            Self::Stripes => (x + y + generation) % 6 < 2,
            Self::Scatter => {
                let hash = (x.wrapping_mul(31337) ^ y.wrapping_mul(7919))
                    .wrapping_add(generation.wrapping_mul(104_729));
                hash % 3 == 0
            }
        }
    }
}

/// Deterministic stand-in for the automaton. Every cell follows the
/// pattern, passing through the growing and dying transitions on the way.
#[derive(Debug, Clone)]
pub struct PatternSource {
    pattern: Pattern,
    grid: GridDimensions,
    generation: u32,
    cells: Vec<u8>,
}

impl PatternSource {
    pub fn new(pattern: Pattern, grid: GridDimensions) -> Self {
        let mut source = Self {
            pattern,
            grid,
            generation: 0,
            cells: Vec::new(),
        };
        source.reset();
        source
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn target(&self, index: usize) -> bool {
        let width = self.grid.width() as usize;
        self.pattern
            .is_alive((index % width) as u32, (index / width) as u32, self.generation)
    }
}

impl CellSource for PatternSource {
    fn dimensions(&self) -> GridDimensions {
        self.grid
    }

    fn tick(&mut self) {
        for cell in &mut self.cells {
            *cell = match *cell {
                LIFECYCLE_DEAD | LIFECYCLE_ALIVE => *cell,
                LIFECYCLE_GROWING => LIFECYCLE_ALIVE,
                _ => LIFECYCLE_DEAD,
            };
        }
    }

    fn tock(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        let mut changed = false;
        for i in 0..self.cells.len() {
            let alive = self.target(i);
            let next = match (self.cells[i], alive) {
                (LIFECYCLE_DEAD, true) => LIFECYCLE_GROWING,
                (LIFECYCLE_ALIVE, false) => LIFECYCLE_ALIVE - 1,
                (other, _) => other,
            };
            changed |= next != self.cells[i];
            self.cells[i] = next;
        }
        changed
    }

    fn is_dead(&self) -> bool {
        self.cells.iter().all(|&c| c == LIFECYCLE_DEAD)
    }

    fn reset(&mut self) {
        self.generation = 0;
        self.cells = (0..self.grid.cell_count())
            .map(|i| if self.target(i) { LIFECYCLE_ALIVE } else { LIFECYCLE_DEAD })
            .collect();
    }

    fn resize(&mut self, grid: GridDimensions) {
        self.grid = grid;
        self.reset();
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// Configuration for a single benchmark scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub name: &'static str,
    pub pattern: Pattern,
    /// Cells along the shorter viewport axis.
    pub min_grid_dimension: u32,
    pub width: u32,
    pub height: u32,
    /// Simulated milliseconds between frames.
    pub frame_interval_ms: f64,
}

/// Return the standard suite of benchmark scenes, from an empty board to the
/// densest grid the cell buffer holds at 16:9.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "empty-8",
            pattern: Pattern::Empty,
            min_grid_dimension: 8,
            width: 320,
            height: 180,
            frame_interval_ms: 250.0,
        },
        SceneConfig {
            name: "checker-8",
            pattern: Pattern::Checkerboard,
            min_grid_dimension: 8,
            width: 320,
            height: 180,
            frame_interval_ms: 250.0,
        },
        SceneConfig {
            name: "stripes-16",
            pattern: Pattern::Stripes,
            min_grid_dimension: 16,
            width: 320,
            height: 180,
            frame_interval_ms: 250.0,
        },
        SceneConfig {
            name: "scatter-32",
            pattern: Pattern::Scatter,
            min_grid_dimension: 32,
            width: 640,
            height: 360,
            frame_interval_ms: 250.0,
        },
        SceneConfig {
            name: "scatter-64",
            pattern: Pattern::Scatter,
            min_grid_dimension: 64,
            width: 640,
            height: 360,
            frame_interval_ms: 250.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridDimensions {
        GridDimensions::new(8, 4).expect("valid grid")
    }

    #[test]
    fn test_checkerboard_starts_settled() {
        let source = PatternSource::new(Pattern::Checkerboard, grid());
        assert_eq!(source.cells().len(), 32);
        assert_eq!(source.cells()[0], LIFECYCLE_ALIVE);
        assert_eq!(source.cells()[1], LIFECYCLE_DEAD);
        assert!(!source.is_dead());
    }

    #[test]
    fn test_transitions_pass_through_growing_and_dying() {
        let mut source = PatternSource::new(Pattern::Checkerboard, grid());
        assert!(source.tock());
        assert_eq!(source.cells()[0], LIFECYCLE_ALIVE - 1);
        assert_eq!(source.cells()[1], LIFECYCLE_GROWING);
        source.tick();
        assert_eq!(source.cells()[0], LIFECYCLE_DEAD);
        assert_eq!(source.cells()[1], LIFECYCLE_ALIVE);
    }

    #[test]
    fn test_empty_pattern_is_dead_and_idle() {
        let mut source = PatternSource::new(Pattern::Empty, grid());
        assert!(source.is_dead());
        assert!(!source.tock());
        source.tick();
        assert!(source.is_dead());
    }

    #[test]
    fn test_resize_reseeds() {
        let mut source = PatternSource::new(Pattern::Stripes, grid());
        source.tock();
        let bigger = GridDimensions::new(16, 8).expect("valid grid");
        source.resize(bigger);
        assert_eq!(source.dimensions(), bigger);
        assert_eq!(source.cells().len(), 128);
        assert_eq!(source.generation(), 0);
    }

    #[test]
    fn test_standard_scenes_fit_the_cell_buffer() {
        for scene in standard_scenes() {
            let aspect = scene.width as f32 / scene.height as f32;
            assert!(
                GridDimensions::for_viewport(scene.min_grid_dimension, aspect).is_ok(),
                "scene {} does not fit",
                scene.name
            );
        }
    }
}

use glam::IVec2;

use crate::constants::{CELL_CAPACITY, LIFECYCLE_ALIVE, LIFECYCLE_DEAD, LIFECYCLE_GROWING};
use crate::error::CoreError;

/// Number of cells across and down the automaton grid.
///
/// Both dimensions are positive and even, and their product fits the fixed
/// cell buffer capacity. Block lattice coordinates are centered so that
/// `x` spans `[-(width-2)/2, width/2]` and `y` spans `[-(height-2)/2, height/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    width: u32,
    height: u32,
}

impl GridDimensions {
    /// Validate and build grid dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(CoreError::InvalidGridDimensions { width, height });
        }
        let cells = width as usize * height as usize;
        if cells > CELL_CAPACITY {
            return Err(CoreError::GridExceedsCapacity {
                cells,
                capacity: CELL_CAPACITY,
            });
        }
        Ok(Self { width, height })
    }

    /// Size a grid to a viewport so the shorter axis holds `min_dimension` cells.
    ///
    /// The longer axis is scaled by the aspect ratio, rounded, and forced even.
    pub fn for_viewport(min_dimension: u32, aspect_ratio: f32) -> Result<Self, CoreError> {
        let mut width = min_dimension;
        let mut height = min_dimension;
        if aspect_ratio > 1.0 {
            width = (min_dimension as f32 * aspect_ratio).round() as u32;
            width -= width % 2;
        } else if aspect_ratio < 1.0 && aspect_ratio > 0.0 {
            height = (min_dimension as f32 / aspect_ratio).round() as u32;
            height -= height % 2;
        }
        Self::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The shorter of the two dimensions.
    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Lowest lattice coordinate a block can occupy.
    pub fn lattice_min(&self) -> IVec2 {
        -(self.as_ivec2() - 2) / 2
    }

    /// Highest lattice coordinate a block can occupy.
    pub fn lattice_max(&self) -> IVec2 {
        self.as_ivec2() / 2
    }

    /// Clamp a lattice coordinate so edge blocks do not tile past the grid.
    pub fn clamp_lattice(&self, id: IVec2) -> IVec2 {
        id.clamp(self.lattice_min(), self.lattice_max())
    }

    /// Map a (clamped) lattice coordinate onto the row-major cell index.
    ///
    /// Lattice `y` grows upward on screen while rows grow downward.
    pub fn cell_index(&self, id: IVec2) -> usize {
        let dims = self.as_ivec2();
        let x = (dims.x - 2) / 2 + id.x;
        let y = dims.y / 2 - id.y;
        (x + dims.x * y) as usize
    }

    fn as_ivec2(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }
}

/// Decoded cell lifecycle state.
///
/// The packed format stores a raw value in 0..=7: 0 dead, 7 alive, 1 growing,
/// and 2..=6 the dying transition counted down toward dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleValue {
    #[default]
    Dead,
    /// Transitioning from dead to alive. Growth has a single encoding
    /// (raw 1), so there is no step to carry.
    Growing,
    /// Transitioning from alive to dead. `step` is 1 right after the
    /// transition starts (raw 6) up to 5 just before death (raw 2).
    ///
    /// Shading treats every step alike; the step exists so each of the five
    /// dying encodings survives a decode and re-encode.
    Dying { step: u8 },
    Alive,
}

impl LifecycleValue {
    /// Decode a raw value. Only the low 3 bits carry meaning.
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0b111 {
            LIFECYCLE_DEAD => Self::Dead,
            LIFECYCLE_ALIVE => Self::Alive,
            LIFECYCLE_GROWING => Self::Growing,
            dying => Self::Dying {
                step: LIFECYCLE_ALIVE - dying,
            },
        }
    }

    /// Decode a raw value, rejecting anything above 7.
    pub fn try_from_raw(raw: u8) -> Result<Self, CoreError> {
        if raw > LIFECYCLE_ALIVE {
            return Err(CoreError::InvalidLifecycleValue(raw));
        }
        Ok(Self::from_raw(raw))
    }

    /// Encode back into the raw 0..=7 representation.
    pub fn raw(self) -> u8 {
        match self {
            Self::Dead => LIFECYCLE_DEAD,
            Self::Alive => LIFECYCLE_ALIVE,
            Self::Growing => LIFECYCLE_GROWING,
            Self::Dying { step } => LIFECYCLE_ALIVE - step.clamp(1, 5),
        }
    }

    /// Whether the cell is in a growing or dying transition.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Growing | Self::Dying { .. })
    }
}

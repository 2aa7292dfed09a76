//! Fixed-capacity packed cell lifecycle buffer.
//!
//! Layout (matches the uniform block the automaton uploads):
//!   group = index / 16        one `[u32; 4]` per group, 1024 groups
//!   lane  = (index % 16) / 4  one u32 per lane
//!   shift = (index % 4) * 8   one byte per cell, low 3 bits meaningful
//!
//! This is the little-endian view of a row-major `[u8]` of raw lifecycle
//! values, so `from_bytes` accepts the automaton's cell vector directly.

use crate::constants::{CELLS_PER_GROUP, CELLS_PER_LANE, CELL_BITS, CELL_CAPACITY, CELL_GROUPS};
use crate::error::CoreError;
use crate::math::extract_bits;
use crate::types::LifecycleValue;

/// One 16-cell group: four 32-bit lanes of four 8-bit cells.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CellGroup(pub [u32; 4]);

/// Word, lane and bit offset of a cell inside the packed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSlot {
    pub group: usize,
    pub lane: usize,
    pub shift: u32,
}

impl CellSlot {
    pub fn of(index: usize) -> Self {
        Self {
            group: index / CELLS_PER_GROUP,
            lane: (index % CELLS_PER_GROUP) / CELLS_PER_LANE,
            shift: (index % CELLS_PER_LANE) as u32 * CELL_BITS,
        }
    }
}

/// Read-only-per-frame packed lifecycle buffer produced by the automaton.
#[derive(Clone, PartialEq, Eq)]
pub struct CellBuffer {
    groups: Box<[CellGroup]>,
}

impl std::fmt::Debug for CellBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let live = (0..CELL_CAPACITY).filter(|&i| self.raw(i) != 0).count();
        f.debug_struct("CellBuffer")
            .field("capacity", &CELL_CAPACITY)
            .field("non_dead", &live)
            .finish()
    }
}

impl Default for CellBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuffer {
    /// An all-dead buffer at full capacity.
    pub fn new() -> Self {
        Self {
            groups: vec![CellGroup::default(); CELL_GROUPS].into_boxed_slice(),
        }
    }

    /// Build a buffer from row-major raw lifecycle bytes (one byte per cell).
    /// Shorter inputs leave the remaining cells dead.
    pub fn from_bytes(cells: &[u8]) -> Result<Self, CoreError> {
        let mut buffer = Self::new();
        buffer.copy_from_bytes(cells)?;
        Ok(buffer)
    }

    /// Overwrite the buffer from row-major raw lifecycle bytes.
    /// Cells past the end of `cells` are cleared.
    pub fn copy_from_bytes(&mut self, cells: &[u8]) -> Result<(), CoreError> {
        if cells.len() > CELL_CAPACITY {
            return Err(CoreError::CellBufferSize {
                expected: CELL_CAPACITY,
                actual: cells.len(),
            });
        }
        self.clear();
        for (i, &raw) in cells.iter().enumerate() {
            // Lane byte order is little-endian regardless of host.
            let slot = CellSlot::of(i);
            let lane = &mut self.groups[slot.group].0[slot.lane];
            *lane &= !(0xFF << slot.shift);
            *lane |= (raw as u32) << slot.shift;
        }
        Ok(())
    }

    /// Raw 8-bit value stored for a cell. Panics if `index >= CELL_CAPACITY`.
    pub fn raw(&self, index: usize) -> u8 {
        let slot = CellSlot::of(index);
        extract_bits(self.groups[slot.group].0[slot.lane], slot.shift, CELL_BITS) as u8
    }

    /// Decoded lifecycle value for a cell. Panics if `index >= CELL_CAPACITY`.
    pub fn get(&self, index: usize) -> LifecycleValue {
        LifecycleValue::from_raw(self.raw(index))
    }

    /// Encode a lifecycle value into a cell.
    pub fn set(&mut self, index: usize, value: LifecycleValue) -> Result<(), CoreError> {
        if index >= CELL_CAPACITY {
            return Err(CoreError::CellIndexOutOfRange {
                index,
                capacity: CELL_CAPACITY,
            });
        }
        let slot = CellSlot::of(index);
        let lane = &mut self.groups[slot.group].0[slot.lane];
        *lane &= !(0xFF << slot.shift);
        *lane |= (value.raw() as u32) << slot.shift;
        Ok(())
    }

    /// Mark every cell dead.
    pub fn clear(&mut self) {
        self.groups.fill(CellGroup::default());
    }

    /// The packed groups, e.g. for uploading as a uniform block.
    pub fn groups(&self) -> &[CellGroup] {
        &self.groups
    }

    /// The packed groups as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.groups)
    }
}

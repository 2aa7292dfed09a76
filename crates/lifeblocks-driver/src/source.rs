use lifeblocks_core::types::GridDimensions;

/// The automaton the driver animates.
///
/// Generations advance in two half-steps. `tick` settles in-flight
/// transitions (growing cells become alive, dying cells become dead); `tock`
/// decides which cells start growing or dying next and reports whether the
/// universe is still changing.
pub trait CellSource {
    fn dimensions(&self) -> GridDimensions;

    fn tick(&mut self);

    fn tock(&mut self) -> bool;

    /// Whether every cell is dead.
    fn is_dead(&self) -> bool;

    /// Reseed in place.
    fn reset(&mut self);

    /// Rebuild for new grid dimensions. The old state is discarded.
    fn resize(&mut self, grid: GridDimensions);

    /// Row-major raw lifecycle values, one byte per cell.
    fn cells(&self) -> &[u8];
}

//! Single-threaded frame loop: advance the automaton, refresh the snapshot,
//! then run one render pass over it.

use std::ops::ControlFlow;

use lifeblocks_core::cells::CellBuffer;
use lifeblocks_core::settings::DriverSettings;
use lifeblocks_core::types::GridDimensions;
use lifeblocks_render::{FrameBuffer, FrameContext, Renderer};

use crate::clock::Clock;
use crate::controls::Command;
use crate::error::DriverError;
use crate::source::CellSource;
use crate::state::{DriverState, HalfStep};

/// What happened while preparing a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub time_ms: f64,
    pub blend: f32,
    pub color_phase: f32,
    pub half_step: Option<HalfStep>,
    /// Result of this frame's tock, if one ran.
    pub changed: Option<bool>,
    /// The universe was reseeded after staying dead too long.
    pub reset: bool,
}

pub struct Driver<S: CellSource, C: Clock> {
    source: S,
    clock: C,
    settings: DriverSettings,
    state: DriverState,
    grid: GridDimensions,
    cells: CellBuffer,
    renderer: Renderer,
    frame: FrameBuffer,
}

impl<S: CellSource, C: Clock> Driver<S, C> {
    /// Size the grid for the viewport, resizing `source` if needed, and load
    /// its first generation.
    pub fn new(
        mut source: S,
        clock: C,
        renderer: Renderer,
        settings: DriverSettings,
        width: u32,
        height: u32,
    ) -> Result<Self, DriverError> {
        if width == 0 || height == 0 {
            return Err(DriverError::InvalidViewport { width, height });
        }
        let state = DriverState::new(&settings, clock.now_ms(), (width, height));
        let grid = GridDimensions::for_viewport(state.min_grid_dimension, state.aspect_ratio())?;
        if source.dimensions() != grid {
            source.resize(grid);
        }
        let mut driver = Self {
            source,
            clock,
            settings,
            state,
            grid,
            cells: CellBuffer::new(),
            renderer,
            frame: FrameBuffer::new(width, height),
        };
        driver.refresh_cells()?;
        log::info!(
            "Driver started: {}x{} viewport, {}x{} grid",
            width,
            height,
            grid.width(),
            grid.height()
        );
        Ok(driver)
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    pub fn cells(&self) -> &CellBuffer {
        &self.cells
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// React to one input command.
    pub fn handle(&mut self, command: Command) -> Result<(), DriverError> {
        match command {
            Command::TogglePause => {
                self.state.paused = !self.state.paused;
                log::info!("Simulation {}", if self.state.paused { "paused" } else { "resumed" });
            }
            Command::Reset => {
                self.source.reset();
                self.state.reset_parity();
                self.state.dead_since_ms = None;
                self.refresh_cells()?;
                log::info!("Universe reset");
            }
            Command::GrowGrid | Command::ShrinkGrid => {
                let grow = command == Command::GrowGrid;
                if let Some(next) = self.state.next_grid_dimension(grow, &self.settings) {
                    self.resize_grid(next, self.state.viewport)?;
                }
            }
            Command::ChangeColor => self.state.color_change_pending = true,
            Command::ToggleRainbow => self.state.toggle_rainbow(),
            Command::PointerMoved(pointer) => self.state.pointer = pointer,
            Command::Resized { width, height } => {
                if width == 0 || height == 0 {
                    return Err(DriverError::InvalidViewport { width, height });
                }
                self.resize_grid(self.state.min_grid_dimension, (width, height))?;
            }
        }
        Ok(())
    }

    /// Rebuild the grid for a new minimum dimension or viewport. Nothing
    /// changes unless the new grid fits the cell buffer.
    fn resize_grid(
        &mut self,
        min_grid_dimension: u32,
        viewport: (u32, u32),
    ) -> Result<(), DriverError> {
        let aspect = viewport.0 as f32 / viewport.1 as f32;
        let grid = GridDimensions::for_viewport(min_grid_dimension, aspect)?;
        self.state.min_grid_dimension = min_grid_dimension;
        if self.state.viewport != viewport {
            self.state.viewport = viewport;
            self.frame.resize(viewport.0, viewport.1);
        }
        self.source.resize(grid);
        self.grid = grid;
        self.state.reset_parity();
        self.refresh_cells()?;
        log::info!("Grid resized to {}x{}", grid.width(), grid.height());
        Ok(())
    }

    /// Copy the source's current generation into the packed buffer.
    fn refresh_cells(&mut self) -> Result<(), DriverError> {
        let raw = self.source.cells();
        if raw.len() != self.grid.cell_count() {
            return Err(DriverError::CellCountMismatch {
                width: self.grid.width(),
                height: self.grid.height(),
                actual: raw.len(),
            });
        }
        self.cells.copy_from_bytes(raw)?;
        Ok(())
    }

    /// Advance time, the automaton and the color cycle, and refresh the
    /// snapshot. Does not render.
    pub fn step(&mut self) -> Result<FrameReport, DriverError> {
        self.state.now_ms = self.clock.now_ms();

        let half_step = self.state.due_half_step(&self.settings);
        let mut changed = None;
        match half_step {
            Some(HalfStep::Tick) => self.source.tick(),
            Some(HalfStep::Tock) => changed = Some(self.source.tock()),
            None => {}
        }
        if half_step.is_some() {
            self.state.record_half_step();
        }

        self.state.advance_color(&self.settings);

        let mut reset = false;
        if changed == Some(false) {
            let is_dead = self.source.is_dead();
            if self.state.observe_idle_tock(is_dead, &self.settings) {
                self.source.reset();
                reset = true;
                log::info!("Universe stayed dead; reseeding");
            }
        }

        self.refresh_cells()?;
        self.state.frames += 1;

        Ok(FrameReport {
            frame: self.state.frames,
            time_ms: self.state.elapsed_ms(),
            blend: self.state.blend(&self.settings),
            color_phase: self.state.color_phase,
            half_step,
            changed,
            reset,
        })
    }

    /// The read-only inputs for a render pass.
    pub fn frame_context(&self) -> FrameContext<'_> {
        snapshot(&self.state, &self.settings, self.grid, &self.cells)
    }

    /// Step, then render the refreshed snapshot.
    pub fn render_frame(&mut self) -> Result<FrameReport, DriverError> {
        let report = self.step()?;
        let Driver {
            state,
            settings,
            grid,
            cells,
            renderer,
            frame,
            ..
        } = self;
        let ctx = snapshot(state, settings, *grid, cells);
        renderer.render(&ctx, frame);
        Ok(report)
    }

    /// Render frames until `on_frame` breaks. Returns the number of frames
    /// rendered.
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<u64, DriverError>
    where
        F: FnMut(&FrameReport, &FrameBuffer) -> ControlFlow<()>,
    {
        let mut rendered = 0;
        loop {
            let report = self.render_frame()?;
            rendered += 1;
            if on_frame(&report, &self.frame).is_break() {
                return Ok(rendered);
            }
        }
    }
}

fn snapshot<'a>(
    state: &DriverState,
    settings: &DriverSettings,
    grid: GridDimensions,
    cells: &'a CellBuffer,
) -> FrameContext<'a> {
    FrameContext {
        resolution: state.resolution(),
        time_ms: state.elapsed_ms() as f32,
        pointer: state.pointer,
        grid,
        blend: state.blend(settings),
        color_phase: state.color_phase,
        cells,
    }
}

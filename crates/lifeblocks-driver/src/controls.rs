use glam::Vec2;

/// Input the driver reacts to between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    /// Reseed the universe.
    Reset,
    /// More cells along the shorter axis.
    GrowGrid,
    ShrinkGrid,
    /// Advance the color phase once on the next frame.
    ChangeColor,
    /// Advance the color phase every frame.
    ToggleRainbow,
    /// Pointer in normalized [-1, 1] coordinates, y up.
    PointerMoved(Vec2),
    Resized { width: u32, height: u32 },
}

impl Command {
    /// Keyboard binding, by key name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(Self::TogglePause),
            "Enter" => Some(Self::Reset),
            "+" | "=" => Some(Self::GrowGrid),
            "-" => Some(Self::ShrinkGrid),
            "c" => Some(Self::ChangeColor),
            "r" => Some(Self::ToggleRainbow),
            _ => None,
        }
    }

    /// Convert a pixel position (row 0 at the top) to a pointer command.
    pub fn pointer_at(x: f32, y: f32, width: f32, height: f32) -> Self {
        let ndc = Vec2::new(2.0 * x / width - 1.0, 1.0 - 2.0 * y / height);
        Self::PointerMoved(ndc)
    }
}

use crate::foundation::error::{JourneyError, JourneyResult};

/// Default journey canvas width in pixels.
pub const WIDTH: u32 = 5484;
/// Default journey canvas height in pixels.
pub const HEIGHT: u32 = 6855;

/// Output canvas dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas size used for journey outputs.
    pub const JOURNEY: Canvas = Canvas {
        width: WIDTH,
        height: HEIGHT,
    };

    /// Build a canvas, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> JourneyResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(self) -> JourneyResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(JourneyError::validation(format!(
                "canvas dimensions must be > 0 (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Length in bytes of an RGBA8 buffer covering the canvas.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::JOURNEY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

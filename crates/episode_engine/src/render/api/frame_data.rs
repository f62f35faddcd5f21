//! Per-frame rendering data

use serde::{Deserialize, Serialize};

/// RGBA color the color buffer is cleared to at the start of every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red channel in [0, 1]
    pub r: f32,
    /// Green channel in [0, 1]
    pub g: f32,
    /// Blue channel in [0, 1]
    pub b: f32,
    /// Alpha channel in [0, 1]
    pub a: f32,
}

impl ClearColor {
    /// The blue the window is cleared to when nothing else is configured
    pub const DEFAULT: Self = Self::new(0.2, 0.3, 0.7, 1.0);

    /// Create a clear color from its channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether every channel lies in [0, 1]
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! Colors indexed by escape time.
//!
//! The gradient runs from white for points that escape on the first
//! iteration down to black for points that never escape.  It depends
//! only on the iteration cap, so it is built once per renderer.

use config::ConfigError;
use image::{Pixel, Rgba};

/// One color per possible escape time.  Entry `k` is the color of a
/// point that escaped after `k + 1` iterations; the last entry is the
/// color of points that never escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgba<u8>>,
}

const WHITE: f64 = 0xFF_FFFF as f64;

// Straight-line interpolation of `x` from one range onto another.
fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

fn unpack(value: u32) -> Rgba<u8> {
    Rgba::from_channels((value >> 16) as u8, (value >> 8) as u8, value as u8, 0xFF)
}

impl Palette {
    /// Builds the gradient for an iteration cap of `iterations`.
    pub fn new(iterations: u32) -> Result<Palette, ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        // With one entry the only index is the "never escaped" one.
        if iterations == 1 {
            return Ok(Palette {
                colors: vec![unpack(0)],
            });
        }
        let last = f64::from(iterations - 1);
        let colors = (0..iterations)
            .map(|i| unpack(map_range(f64::from(i), 0.0, last, WHITE, 0.0).round() as u32))
            .collect();
        debug!("Built a palette of {} colors", iterations);
        Ok(Palette { colors })
    }

    /// The color for an escape time in `[1, len()]`.
    #[inline]
    pub fn color(&self, iterations: u32) -> Rgba<u8> {
        debug_assert!(iterations >= 1, "escape times start at 1");
        self.colors[iterations as usize - 1]
    }

    /// The number of colors, which equals the iteration cap.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a palette built by `new`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in index order.
    pub fn colors(&self) -> &[Rgba<u8>] {
        &self.colors
    }
}

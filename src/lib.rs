#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! An escape-time fractal colors each point of the complex plane by
//! how many times a recurrence can be applied to it before the result
//! runs off toward infinity.  Points that never run away (within some
//! iteration cap) belong to the set and are drawn black; the quicker
//! a point escapes, the lighter it is drawn.
//!
//! The library is built around a single pure operation: given a
//! `Viewport` (pan offset and zoom scale), produce a freshly filled
//! `PixelBuffer`.  The image is cut into horizontal bands and each
//! band is computed on its own thread, so the picture comes back
//! identical no matter how many workers are used.  A `Navigator`
//! turns mouse input into viewport changes between frames, and the
//! `output` module writes finished frames to disk.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
#[cfg(test)]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
#[cfg(test)]
extern crate tempfile;

pub mod bands;
pub mod config;
pub mod fractal;
pub mod mandelbrot;
pub mod navigate;
pub mod output;
pub mod palette;
pub mod planes;
pub mod renderer;
pub mod viewport;

pub use config::{ConfigError, FractalConfig};
pub use fractal::FractalKind;
pub use navigate::{InputState, Navigator};
pub use palette::Palette;
pub use renderer::{PixelBuffer, Renderer};
pub use viewport::{Viewport, ViewportError};

//! The immutable description of what a renderer produces: how big the
//! image is, how many workers share it, how deep the escape-time
//! iteration goes, and which fractal is drawn.

use fractal::FractalKind;

/// Everything that can be wrong with a requested configuration.  All
/// of these are caught before any rendering begins.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The fractal name does not match any known fractal.
    #[fail(display = "Unknown fractal choice: {}", _0)]
    UnknownFractal(String),
    /// Width or height was zero.
    #[fail(display = "Resolution must be at least 1x1")]
    ZeroResolution,
    /// An iteration cap of zero leaves nothing to index the palette with.
    #[fail(display = "Iteration cap must be at least 1")]
    ZeroIterations,
    /// At least one worker is needed to fill the image.
    #[fail(display = "Worker count must be at least 1")]
    ZeroWorkers,
    /// Each worker must own at least one row of the image.
    #[fail(
        display = "Worker count {} exceeds the image height of {} rows",
        workers, height
    )]
    TooManyWorkers {
        /// Requested worker count
        workers: usize,
        /// Image height in rows
        height: usize,
    },
}

/// A validated render configuration.  Once built it cannot be
/// changed; a new resolution or iteration cap means a new config (and
/// a new renderer, with a new palette).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FractalConfig {
    kind: FractalKind,
    width: usize,
    height: usize,
    workers: usize,
    iterations: u32,
}

impl FractalConfig {
    /// Looks up the fractal by name and checks every numeric field.
    /// The worker count must lie in `[1, height]`.
    pub fn new(
        fractal: &str,
        width: usize,
        height: usize,
        workers: usize,
        iterations: u32,
    ) -> Result<FractalConfig, ConfigError> {
        let kind = FractalKind::from_name(fractal)
            .ok_or_else(|| ConfigError::UnknownFractal(fractal.to_string()))?;
        FractalConfig::with_kind(kind, width, height, workers, iterations)
    }

    /// As `new`, for callers that already hold a `FractalKind`.
    pub fn with_kind(
        kind: FractalKind,
        width: usize,
        height: usize,
        workers: usize,
        iterations: u32,
    ) -> Result<FractalConfig, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if workers > height {
            return Err(ConfigError::TooManyWorkers { workers, height });
        }
        Ok(FractalConfig {
            kind,
            width,
            height,
            workers,
            iterations,
        })
    }

    /// Which fractal is drawn.
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of bands, and so of threads, per render.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The iteration cap, which is also the palette length.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

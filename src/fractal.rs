//! The set of fractals the renderer knows how to draw.  Each variant
//! brings its own native region of the complex plane and its own
//! escape-time function; adding a fractal means adding a variant.

use mandelbrot;
use num::Complex;
use planes::ComplexPlane;

/// A fractal that can be evaluated point by point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FractalKind {
    /// The Mandelbrot set, z -> z² + c starting from z = 0.
    Mandelbrot,
}

const ALL: &[FractalKind] = &[FractalKind::Mandelbrot];

impl FractalKind {
    /// Finds a fractal by its command-line name.  Unknown names yield
    /// nothing; it is up to the caller to complain.
    pub fn from_name(name: &str) -> Option<FractalKind> {
        ALL.iter().cloned().find(|kind| kind.name() == name)
    }

    /// The names accepted by `from_name`.
    pub fn names() -> Vec<&'static str> {
        ALL.iter().map(|kind| kind.name()).collect()
    }

    /// The command-line name of this fractal.
    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "mandelbrot",
        }
    }

    /// The region of the complex plane shown at scale 1, offset 0.
    pub fn native_plane(self) -> ComplexPlane {
        match self {
            FractalKind::Mandelbrot => mandelbrot::native_plane(),
        }
    }

    /// The escape time of `point`, in `[1, limit]`.
    #[inline]
    pub fn escape_time(self, point: Complex<f64>, limit: u32) -> u32 {
        match self {
            FractalKind::Mandelbrot => mandelbrot::escape_time(point, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in FractalKind::names() {
            assert_eq!(FractalKind::from_name(name).map(|k| k.name()), Some(name));
        }
    }

    #[test]
    fn unknown_names_are_absent() {
        assert_eq!(FractalKind::from_name(""), None);
        assert_eq!(FractalKind::from_name("Mandelbrot"), None);
        assert_eq!(FractalKind::from_name("buddhabrot"), None);
    }
}

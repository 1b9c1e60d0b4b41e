//! Contains the PlaneMapper struct, which describes a relationship
//! between the screen, a rectangle of pixels with its origin at the
//! top left, and a rectangle on the complex plane defined by its
//! left-lower and right-upper corners.
//!
//! Screen rows grow downward while the imaginary axis grows upward,
//! so the top row of the screen is the upper edge of the complex
//! rectangle.
use num::Complex;

/// Describes the width and height of the screen, which is assumed to
/// start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Maps screen coordinates (fractional pixels, as produced by the
/// viewport) onto the complex plane and back.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneMapper {
    /// The size of the screen.
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // The complex distance covered by one pixel, horizontally and
    // vertically.  The vertical one is negative: moving down the
    // screen moves down the imaginary axis.
    pixel_size: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the screen size and the two corners of the
    /// complex rectangle that should fill it.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, String> {
        if rightupper.re <= leftlower.re {
            return Err(
                "The left lower corner is not to the left of the right upper corner.".to_string(),
            );
        }

        if rightupper.im <= leftlower.im {
            return Err(
                "The left lower corner is not lower than the right upper corner".to_string(),
            );
        }

        if width == 0 || height == 0 {
            return Err("The screen has no pixels".to_string());
        }

        let pixel_size = (
            (rightupper.re - leftlower.re) / (width as f64),
            (leftlower.im - rightupper.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            pixel_size,
        })
    }

    /// Given a location on the screen, return the complex number
    /// found there.
    #[inline]
    pub fn screen_to_point(&self, x: f64, y: f64) -> Complex<f64> {
        Complex::new(
            x * self.pixel_size.0 + self.complex_plane.0.re,
            y * self.pixel_size.1 + self.complex_plane.1.im,
        )
    }

    /// Given a complex number, return the location on the screen
    /// where it is drawn.  The result may lie off the screen.
    pub fn point_to_screen(&self, point: Complex<f64>) -> (f64, f64) {
        (
            (point.re - self.complex_plane.0.re) / self.pixel_size.0,
            (point.im - self.complex_plane.1.im) / self.pixel_size.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(4, 4, Complex::new(1.0, -1.0), Complex::new(-1.0, 1.0));
        assert!(pm.is_err());
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
        assert_eq!(pm.unwrap().integral_plane, IntegralPlane(4, 4));
    }

    #[test]
    fn top_left_is_left_upper_corner() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(pm.screen_to_point(0.0, 0.0), Complex::new(-2.0, 2.0));
        assert_eq!(pm.screen_to_point(2.0, 2.0), Complex::new(0.0, 0.0));
        assert_eq!(pm.screen_to_point(4.0, 4.0), Complex::new(2.0, -2.0));
        assert_eq!(pm.screen_to_point(1.0, 3.0), Complex::new(-1.0, -1.0));
    }

    #[test]
    fn native_mandelbrot_grid() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0)).unwrap();
        assert_eq!(pm.screen_to_point(0.0, 0.0), Complex::new(-2.5, 1.0));
        assert_eq!(pm.screen_to_point(3.0, 3.0), Complex::new(0.125, -0.5));
    }

    #[test]
    fn point_to_screen_undoes_screen_to_point() {
        let pm =
            PlaneMapper::new(640, 480, Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0)).unwrap();
        for &(x, y) in &[(0.0, 0.0), (320.0, 240.0), (639.0, 479.0), (12.5, 400.25)] {
            let (sx, sy) = pm.point_to_screen(pm.screen_to_point(x, y));
            assert!((sx - x).abs() < 1e-9 && (sy - y).abs() < 1e-9);
        }
    }
}

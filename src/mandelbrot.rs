//! The Mandelbrot escape-time function.
//!
//! Iterate z -> z² + c from z = 0 and count how many steps it takes
//! for |z| to pass 2, at which point the orbit is known to run off to
//! infinity.  Points that are still bounded at the cap are treated as
//! members of the set.

use num::Complex;
use planes::ComplexPlane;

const D4: f64 = 1.0 / 4.0;
const D16: f64 = D4 / 4.0;

/// The rectangle the whole set fits in: real -2.5 to 1.0, imaginary
/// -1.0 to 1.0.
pub fn native_plane() -> ComplexPlane {
    ComplexPlane(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0))
}

/// True if `point` lies inside the main cardioid or the period-2 bulb.
/// Both are wholly inside the set, so no orbit that starts there will
/// ever escape, and iterating them is wasted work.  A false result
/// says nothing; plenty of interior points are outside both shapes.
#[inline]
pub fn known_inside(point: Complex<f64>) -> bool {
    let y2 = point.im * point.im;
    let q = (point.re - D4) * (point.re - D4) + y2;
    let cardioid = q * (q + (point.re - D4)) <= D4 * y2;
    let bulb = (point.re + 1.0) * (point.re + 1.0) + y2 <= D16;
    cardioid || bulb
}

/// The number of iterations, between 1 and `limit`, before the orbit
/// of `point` leaves the radius-2 disc.  A result of `limit` means the
/// orbit never left.
///
/// The squares of both components are carried from one step to the
/// next, so each step costs three multiplications.
#[inline]
pub fn escape_time(point: Complex<f64>, limit: u32) -> u32 {
    debug_assert!(limit > 0, "escape time needs an iteration cap of at least 1");
    if known_inside(point) {
        return limit;
    }

    let (x0, y0) = (point.re, point.im);
    let (mut x, mut y, mut x2, mut y2) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
    let mut iteration = 0;
    while x2 + y2 <= 4.0 && iteration < limit {
        y = (x + x) * y + y0;
        x = x2 - y2 + x0;
        x2 = x * x;
        y2 = y * y;
        iteration += 1;
    }
    debug_assert!(iteration >= 1);
    iteration
}

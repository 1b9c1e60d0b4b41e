//! Pan and zoom.
//!
//! A `Viewport` maps screen pixels to "world" coordinates, which are
//! screen pixels of the unzoomed, unpanned image:
//!
//! ```text
//! world = screen / scale + offset
//! ```
//!
//! Larger scales magnify.  The reciprocal of the scale is kept
//! alongside it so the per-pixel transform never divides.

/// A scale or zoom factor that is zero, negative, or not finite.
#[derive(Debug, Fail, PartialEq)]
#[fail(display = "Scale must be a positive finite number, got {}", _0)]
pub struct ViewportError(pub f64);

/// The current pan offset and zoom scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    offset: (f64, f64),
    scale: f64,
    inverse_scale: f64,
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            offset: (0.0, 0.0),
            scale: 1.0,
            inverse_scale: 1.0,
        }
    }
}

fn check_scale(scale: f64) -> Result<f64, ViewportError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ViewportError(scale))
    }
}

impl Viewport {
    /// A viewport at the given offset and scale.
    pub fn new(offset_x: f64, offset_y: f64, scale: f64) -> Result<Viewport, ViewportError> {
        let mut viewport = Viewport::default();
        viewport.set_scale(scale)?;
        viewport.offset = (offset_x, offset_y);
        Ok(viewport)
    }

    /// The pan offset, in world units.
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    /// The zoom scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Replaces the scale.  The reciprocal is recomputed with it.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ViewportError> {
        self.scale = check_scale(scale)?;
        self.inverse_scale = 1.0 / self.scale;
        Ok(())
    }

    /// Back to offset 0,0 at scale 1.
    pub fn reset(&mut self) {
        *self = Viewport::default();
    }

    /// Screen pixel to world coordinates.
    #[inline]
    pub fn screen_to_world(&self, px: f64, py: f64) -> (f64, f64) {
        (
            px * self.inverse_scale + self.offset.0,
            py * self.inverse_scale + self.offset.1,
        )
    }

    /// World coordinates to screen pixel.
    #[inline]
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        ((wx - self.offset.0) * self.scale, (wy - self.offset.1) * self.scale)
    }

    /// Moves the view by a distance measured in screen pixels.  The
    /// image follows the pointer: dragging right reveals what lies to
    /// the left.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.0 -= dx * self.inverse_scale;
        self.offset.1 -= dy * self.inverse_scale;
    }

    /// Multiplies the scale by `factor`, keeping the world point under
    /// the screen position `(px, py)` where it is.
    pub fn zoom_at(&mut self, px: f64, py: f64, factor: f64) -> Result<(), ViewportError> {
        check_scale(factor)?;
        let before = self.screen_to_world(px, py);
        self.set_scale(self.scale * factor)?;
        let after = self.screen_to_world(px, py);
        self.offset.0 += before.0 - after.0;
        self.offset.1 += before.1 - after.1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        let tolerance = 1e-9 * (1.0 + a.0.abs().max(a.1.abs()));
        (a.0 - b.0).abs() < tolerance && (a.1 - b.1).abs() < tolerance
    }

    #[test]
    fn default_is_identity() {
        let v = Viewport::default();
        assert_eq!(v.screen_to_world(12.0, 34.0), (12.0, 34.0));
        assert_eq!(v.world_to_screen(12.0, 34.0), (12.0, 34.0));
    }

    #[test]
    fn rejects_bad_scales() {
        assert_eq!(Viewport::new(0.0, 0.0, 0.0), Err(ViewportError(0.0)));
        assert!(Viewport::new(0.0, 0.0, -1.0).is_err());
        assert!(Viewport::new(0.0, 0.0, ::std::f64::NAN).is_err());
        assert!(Viewport::new(0.0, 0.0, ::std::f64::INFINITY).is_err());
        let mut v = Viewport::default();
        assert!(v.set_scale(-2.0).is_err());
        assert_eq!(v.scale(), 1.0);
        assert!(v.zoom_at(1.0, 1.0, 0.0).is_err());
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn transforms_are_inverses() {
        let viewports = [
            Viewport::new(0.0, 0.0, 1.0).unwrap(),
            Viewport::new(-37.5, 12.25, 2.5).unwrap(),
            Viewport::new(640.0, -360.0, 0.1).unwrap(),
            Viewport::new(3.0, 7.0, 1.1f64.powi(40)).unwrap(),
        ];
        for v in &viewports {
            for &(px, py) in &[(0.0, 0.0), (1279.0, 719.0), (640.0, 360.0), (17.0, 503.0)] {
                let (wx, wy) = v.screen_to_world(px, py);
                assert!(close(v.world_to_screen(wx, wy), (px, py)));
            }
        }
    }

    #[test]
    fn zoom_keeps_the_cursor_fixed() {
        let mut v = Viewport::new(10.0, -20.0, 1.0).unwrap();
        let cursor = (400.0, 300.0);
        for &factor in &[1.1, 0.9, 1.1, 1.1, 0.9, 0.5, 3.0] {
            let before = v.screen_to_world(cursor.0, cursor.1);
            v.zoom_at(cursor.0, cursor.1, factor).unwrap();
            let after = v.screen_to_world(cursor.0, cursor.1);
            assert!(close(before, after));
        }
    }

    #[test]
    fn zoom_compounds() {
        let mut v = Viewport::default();
        for _ in 0..10 {
            v.zoom_at(0.0, 0.0, 1.1).unwrap();
        }
        assert!((v.scale() - 1.1f64.powi(10)).abs() < 1e-12);
        assert_eq!(v.offset(), (0.0, 0.0));
    }

    #[test]
    fn pan_moves_by_screen_pixels() {
        let mut v = Viewport::new(0.0, 0.0, 2.0).unwrap();
        v.pan(10.0, -4.0);
        assert_eq!(v.offset(), (-5.0, 2.0));
        v.reset();
        assert_eq!(v, Viewport::default());
    }
}

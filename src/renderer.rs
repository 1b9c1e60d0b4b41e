// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The frame renderer: one call per frame, returning a complete image.

use bands;
use config::FractalConfig;
use image::{Pixel, RgbaImage};
use num::Complex;
use palette::Palette;
use planes::PlaneMapper;
use viewport::Viewport;

/// A finished frame: `width × height` RGBA pixels, row-major.
pub type PixelBuffer = RgbaImage;

/// Holds everything that stays fixed from one frame to the next: the
/// configuration, the palette built from its iteration cap, and the
/// mapping from the unzoomed screen to the fractal's native region
/// of the complex plane.  Once built, a renderer is never mutated;
/// all per-frame state arrives in the `Viewport`.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: FractalConfig,
    palette: Palette,
    plane: PlaneMapper,
}

impl Renderer {
    /// Builds the palette and plane mapping for `config`.
    pub fn new(config: FractalConfig) -> Result<Self, String> {
        let palette = Palette::new(config.iterations()).map_err(|e| e.to_string())?;
        let native = config.kind().native_plane();
        let plane = PlaneMapper::new(config.width(), config.height(), native.0, native.1)?;
        Ok(Renderer {
            config,
            palette,
            plane,
        })
    }

    /// The configuration this renderer was built from.
    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    /// The palette shared by every frame.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The complex number drawn at screen position `(px, py)`.
    #[inline]
    pub fn screen_to_point(&self, viewport: &Viewport, px: f64, py: f64) -> Complex<f64> {
        let (wx, wy) = viewport.screen_to_world(px, py);
        self.plane.screen_to_point(wx, wy)
    }

    /// The screen position at which `point` is drawn; may be off screen.
    pub fn point_to_screen(&self, viewport: &Viewport, point: Complex<f64>) -> (f64, f64) {
        let (wx, wy) = self.plane.point_to_screen(point);
        viewport.world_to_screen(wx, wy)
    }

    /// The escape time of the pixel at column `px`, row `py`.
    #[inline]
    pub fn escape_time_at(&self, viewport: &Viewport, px: usize, py: usize) -> u32 {
        let point = self.screen_to_point(viewport, px as f64, py as f64);
        self.config
            .kind()
            .escape_time(point, self.config.iterations())
    }

    /// Renders one frame.  Blocks until every band is filled.
    pub fn render(&self, viewport: &Viewport) -> PixelBuffer {
        let (width, height) = (self.config.width(), self.config.height());
        let mut image = RgbaImage::new(width as u32, height as u32);
        bands::fill_bands(&mut *image, width * 4, self.config.workers(), |py, row| {
            for (px, pixel) in row.chunks_mut(4).enumerate() {
                let color = self.palette.color(self.escape_time_at(viewport, px, py));
                pixel.copy_from_slice(color.channels());
            }
        });
        image
    }

    /// The raw escape times of one frame, row-major, without coloring.
    pub fn iterations(&self, viewport: &Viewport) -> Vec<u32> {
        let (width, height) = (self.config.width(), self.config.height());
        let mut counts = vec![0u32; width * height];
        bands::fill_bands(&mut counts, width, self.config.workers(), |py, row| {
            for (px, count) in row.iter_mut().enumerate() {
                *count = self.escape_time_at(viewport, px, py);
            }
        });
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(width: usize, height: usize, workers: usize, limit: u32) -> Renderer {
        Renderer::new(FractalConfig::new("mandelbrot", width, height, workers, limit).unwrap())
            .unwrap()
    }

    #[test]
    fn buffer_matches_resolution() {
        let image = renderer(13, 7, 3, 50).render(&Viewport::default());
        assert_eq!(image.dimensions(), (13, 7));
    }

    #[test]
    fn pixels_are_palette_lookups() {
        let r = renderer(16, 9, 4, 40);
        let v = Viewport::new(1.5, -2.0, 1.3).unwrap();
        let image = r.render(&v);
        let counts = r.iterations(&v);
        for (i, (x, y, pixel)) in image.enumerate_pixels().enumerate() {
            assert_eq!(counts[i], r.escape_time_at(&v, x as usize, y as usize));
            assert_eq!(*pixel, r.palette().color(counts[i]));
        }
    }

    #[test]
    fn screen_and_point_agree() {
        let r = renderer(1280, 720, 1, 10);
        let v = Viewport::new(100.0, 50.0, 4.0).unwrap();
        let point = r.screen_to_point(&v, 333.0, 222.0);
        let (px, py) = r.point_to_screen(&v, point);
        assert!((px - 333.0).abs() < 1e-6 && (py - 222.0).abs() < 1e-6);
    }

    #[test]
    fn unzoomed_corner_is_native_corner() {
        let r = renderer(1280, 720, 1, 10);
        assert_eq!(
            r.screen_to_point(&Viewport::default(), 0.0, 0.0),
            Complex::new(-2.5, 1.0)
        );
    }
}

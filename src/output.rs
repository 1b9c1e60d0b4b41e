//! Writes finished frames to disk.  The format follows the file
//! extension: `.png` keeps the alpha channel, `.ppm` and `.pnm` drop
//! it and write a binary pixmap.

use image::png::PNGEncoder;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use renderer::PixelBuffer;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Ways writing an image can fail.
#[derive(Debug, Fail)]
pub enum OutputError {
    /// The extension names no format we can write.
    #[fail(display = "Cannot tell the image format of {}; use .png, .ppm or .pnm", _0)]
    UnsupportedFormat(String),
    /// Creating or writing the file failed.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> OutputError {
        OutputError::Io(err)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Format {
    Png,
    Pnm,
}

fn format_of(path: &Path) -> Option<Format> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some(Format::Png),
        "ppm" | "pnm" => Some(Format::Pnm),
        _ => None,
    }
}

/// Encodes `pixels` into the file at `path`, replacing it if present.
pub fn write_image<P: AsRef<Path>>(path: P, pixels: &PixelBuffer) -> Result<(), OutputError> {
    let path = path.as_ref();
    let format = format_of(path)
        .ok_or_else(|| OutputError::UnsupportedFormat(path.display().to_string()))?;
    let (width, height) = pixels.dimensions();
    let output = BufWriter::new(File::create(path)?);
    match format {
        Format::Png => {
            PNGEncoder::new(output).encode(pixels, width, height, ColorType::RGBA(8))?;
        }
        Format::Pnm => {
            let rgb: Vec<u8> = pixels
                .chunks(4)
                .flat_map(|rgba| rgba[..3].iter().cloned())
                .collect();
            PNMEncoder::new(output)
                .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary))
                .encode(&rgb[..], width, height, ColorType::RGB(8))?;
        }
    }
    debug!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image;
    use image::{Pixel, Rgba};
    use std::fs;
    use tempfile::tempdir;

    fn checkerboard() -> PixelBuffer {
        PixelBuffer::from_fn(4, 3, |x, y| {
            let v = if (x + y) % 2 == 0 { 0xFF } else { 0 };
            Rgba::from_channels(v, v, v, 0xFF)
        })
    }

    #[test]
    fn formats_follow_extensions() {
        assert_eq!(format_of(Path::new("a.png")), Some(Format::Png));
        assert_eq!(format_of(Path::new("a.PNG")), Some(Format::Png));
        assert_eq!(format_of(Path::new("dir/a.ppm")), Some(Format::Pnm));
        assert_eq!(format_of(Path::new("a.pnm")), Some(Format::Pnm));
        assert_eq!(format_of(Path::new("a.jpg")), None);
        assert_eq!(format_of(Path::new("png")), None);
    }

    #[test]
    fn writes_a_png_that_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.png");
        write_image(&path, &checkerboard()).unwrap();
        let back = image::open(&path).unwrap().to_rgba();
        assert_eq!(back.dimensions(), (4, 3));
        assert_eq!(back.into_raw(), checkerboard().into_raw());
    }

    #[test]
    fn writes_a_binary_pixmap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.ppm");
        write_image(&path, &checkerboard()).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        // 4x3 pixels, three bytes each, after the header.
        assert!(bytes.ends_with(&[0xFF, 0xFF, 0xFF, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0, 0, 0]));
    }

    #[test]
    fn refuses_unknown_extensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.gif");
        match write_image(&path, &checkerboard()) {
            Err(OutputError::UnsupportedFormat(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(!path.exists());
    }
}

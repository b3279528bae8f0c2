//
// Loading and validation of the input bitmap.
//

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{GrayImage, ImageFormat, ImageReader};
use log::debug;

use crate::bitmap;
use crate::error::{Error, Result};

/// Sniff `path` from its header bytes, rejecting anything that is not a BMP.
///
/// The file name plays no part: `ImageReader::open` would preset the format
/// from a `.bmp` extension and keep it for unrecognised content.
fn open_bmp(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(io_err)?;

    match reader.format() {
        Some(ImageFormat::Bmp) => Ok(reader),
        other => {
            debug!("{}: sniffed format {:?}", path.display(), other);
            Err(Error::InputValidation {
                path: path.to_path_buf(),
                reason: "not a BMP file",
            })
        }
    }
}

/// Decode the BMP at `path` to 8-bit grayscale.
///
/// With `strict`, any intensity other than 0 or 255 is rejected. Otherwise
/// shades are accepted and left for the packer to threshold.
pub fn load_grayscale(path: &Path, strict: bool) -> Result<GrayImage> {
    let gray = open_bmp(path)?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();

    debug!("{} dimensions: {} x {}", path.display(), gray.width(), gray.height());

    if strict && !bitmap::is_monochrome(&gray) {
        return Err(Error::InputValidation {
            path: path.to_path_buf(),
            reason: "contains pixels that are neither black nor white",
        });
    }
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Luma, Rgb, RgbImage};
    use std::path::PathBuf;

    fn temp_path(tag: &str, ext: &str) -> PathBuf {
        std::env::temp_dir().join(format!("image2grlib_{}_{}.{}", std::process::id(), tag, ext))
    }

    fn checker(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| Luma([if (x + y) % 2 == 0 { 0 } else { 255 }]))
    }

    #[test]
    fn test_load_bmp_round_trip() {
        let path = temp_path("checker", "bmp");
        let gray = checker(11, 3);
        DynamicImage::ImageLuma8(gray.clone())
            .save_with_format(&path, ImageFormat::Bmp)
            .unwrap();

        let loaded = load_grayscale(&path, true).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, gray);
    }

    #[test]
    fn test_rejects_non_bmp() {
        let path = temp_path("notbmp", "bmp");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\n not really").unwrap();

        let err = load_grayscale(&path, false).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::InputValidation { .. }));
        assert_eq!(err.exit_code(), -2);
    }

    #[test]
    fn test_rejects_text_named_bmp() {
        let path = temp_path("text", "bmp");
        std::fs::write(&path, b"hello, this is not an image at all").unwrap();

        let err = load_grayscale(&path, false).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, Error::InputValidation { .. }));
        assert_eq!(err.exit_code(), -2);
    }

    #[test]
    fn test_sniffs_bmp_without_extension() {
        let path = temp_path("noext", "img");
        let gray = checker(5, 2);
        DynamicImage::ImageLuma8(gray.clone())
            .save_with_format(&path, ImageFormat::Bmp)
            .unwrap();

        let loaded = load_grayscale(&path, false).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, gray);
    }

    #[test]
    fn test_strict_rejects_gray() {
        let path = temp_path("gray", "bmp");
        let mut rgb = RgbImage::from_pixel(4, 2, Rgb([255, 255, 255]));
        rgb.put_pixel(1, 1, Rgb([128, 128, 128]));
        DynamicImage::ImageRgb8(rgb).save_with_format(&path, ImageFormat::Bmp).unwrap();

        let err = load_grayscale(&path, true).unwrap_err();
        assert!(matches!(err, Error::InputValidation { .. }));

        let lenient = load_grayscale(&path, false).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lenient.get_pixel(1, 1)[0], 128);
        assert_eq!(lenient.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_grayscale(&temp_path("missing", "bmp"), false).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}

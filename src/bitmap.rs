//
// Packing of a grayscale matrix into 1BPP_UNCOMP rows.
//

use image::GrayImage;

/// A 1-bit-per-pixel image: `height` rows of `ceil(width / 8)` bytes, MSB
/// first. Unused low bits of the last byte in each row are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<Vec<u8>>,
}

impl PackedBitmap {
    pub fn bytes_per_row(width: u32) -> usize {
        (width as usize).div_ceil(8)
    }
}

/// Pack `gray` into one bit per pixel.
///
/// Only pure black (0) leaves its bit clear. Every other intensity, however
/// dark, sets it. grlib images rely on this polarity, so do not turn it into
/// a midpoint threshold.
pub fn pack(gray: &GrayImage) -> PackedBitmap {
    let (w, h) = gray.dimensions();
    let stride = PackedBitmap::bytes_per_row(w);

    // Index by (x, y) rather than `rows()` so a zero-width image still
    // yields `h` (empty) rows.
    let rows = (0..h)
        .map(|y| {
            let mut bytes = vec![0u8; stride];
            for x in 0..w {
                if gray.get_pixel(x, y)[0] != 0 {
                    let x = x as usize;
                    bytes[x / 8] |= 1 << (7 - x % 8);
                }
            }
            bytes
        })
        .collect();

    PackedBitmap {
        width: w,
        height: h,
        rows,
    }
}

/// True if every pixel is pure black or pure white.
pub fn is_monochrome(gray: &GrayImage) -> bool {
    gray.pixels().all(|p| p[0] == 0 || p[0] == 0xff)
}

//! Rasterizing solid swatch fills.

use std::io::Write;

use gamut::{Gamut, RgbColor};
use rayon::prelude::*;

/// An 8-bit RGB image, with values in `gamut`'s color space.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchImage {
    pub width: usize,
    pub height: usize,
    pub gamut: Gamut,
    pub pixels: Vec<[u8; 3]>,
}

/// The largest swatch we're willing to allocate.
pub const MAX_SWATCH_PIXELS: usize = 1 << 26;

/// Number of pixels in a `width` x `height` swatch, or `None` if it
/// exceeds `MAX_SWATCH_PIXELS`.
pub fn swatch_pixel_count(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .filter(|&count| count <= MAX_SWATCH_PIXELS)
}

/// Fills a `width` x `height` image with `color`, in the color's own
/// gamut.  Extended channel values are clipped to [0, 1].
///
/// Returns `None` if the size is too large (see `swatch_pixel_count()`).
pub fn render_swatch(color: &RgbColor, width: usize, height: usize) -> Option<SwatchImage> {
    let pixel = to_8_bit(color.components());
    let mut pixels = vec![[0u8; 3]; swatch_pixel_count(width, height)?];
    if width > 0 {
        pixels
            .par_chunks_mut(width)
            .for_each(|row| row.fill(pixel));
    }

    Some(SwatchImage {
        width: width,
        height: height,
        gamut: color.gamut,
        pixels: pixels,
    })
}

/// Writes a binary PPM, with the gamut noted in a header comment.
pub fn write_ppm<W: Write>(out: &mut W, image: &SwatchImage) -> std::io::Result<()> {
    out.write_all(b"P6\n")?;
    out.write_all(format!("# gamut: {}\n", image.gamut).as_bytes())?;
    out.write_all(format!("{} {}\n", image.width, image.height).as_bytes())?;
    out.write_all(b"255\n")?;
    for pixel in &image.pixels {
        out.write_all(pixel)?;
    }

    Ok(())
}

fn to_8_bit(rgb: [f64; 3]) -> [u8; 3] {
    // Note: `max()` also maps NaN to 0.0.
    rgb.map(|n| (n.max(0.0).min(1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_pixel() {
        let color = RgbColor::new(1.0, 0.5, 0.0, Gamut::Wide);
        let image = render_swatch(&color, 4, 3).unwrap();

        assert_eq!(image.gamut, Gamut::Wide);
        assert_eq!(image.pixels.len(), 12);
        assert!(image.pixels.iter().all(|&p| p == [255, 128, 0]));
    }

    #[test]
    fn extended_values_are_clipped() {
        let color = RgbColor::new(1.09, -0.23, -0.15, Gamut::Standard);
        let image = render_swatch(&color, 2, 2).unwrap();
        assert_eq!(image.pixels[0], [255, 0, 0]);
    }

    #[test]
    fn empty_image() {
        let color = RgbColor::new(0.0, 0.0, 0.0, Gamut::Standard);
        assert!(render_swatch(&color, 0, 5).unwrap().pixels.is_empty());
        assert!(render_swatch(&color, 5, 0).unwrap().pixels.is_empty());
        assert!(render_swatch(&color, 0, usize::MAX).unwrap().pixels.is_empty());
    }

    #[test]
    fn oversized_image() {
        let color = RgbColor::new(0.0, 0.0, 0.0, Gamut::Standard);

        // Would wrap around to zero without overflow checking.
        let half = 1usize << (usize::BITS / 2);
        assert_eq!(half.wrapping_mul(half), 0);
        assert_eq!(swatch_pixel_count(half, half), None);
        assert!(render_swatch(&color, half, half).is_none());

        assert_eq!(swatch_pixel_count(usize::MAX, 2), None);
        assert_eq!(swatch_pixel_count(MAX_SWATCH_PIXELS, 1), Some(MAX_SWATCH_PIXELS));
        assert_eq!(swatch_pixel_count(MAX_SWATCH_PIXELS, 2), None);
    }

    #[test]
    fn ppm_layout() {
        let color = RgbColor::new(0.0, 1.0, 0.0, Gamut::Standard);
        let image = render_swatch(&color, 2, 1).unwrap();
        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        let header = b"P6\n# gamut: sRGB\n2 1\n255\n";
        assert_eq!(&out[..header.len()], &header[..]);
        assert_eq!(&out[header.len()..], &[0, 255, 0, 0, 255, 0][..]);
    }
}

//! The sRGB transfer curve, which Display P3 shares, extended to negative
//! values.

use colorbox::transfer_functions::srgb;

/// Linear -> sRGB, mirrored around zero so that negative values (which
/// show up when a color is outside the target gamut) keep their magnitude.
pub fn from_linear_extended(n: f64) -> f64 {
    if n < 0.0 {
        -(srgb::from_linear(-n as f32) as f64)
    } else {
        srgb::from_linear(n as f32) as f64
    }
}

/// Inverse of `from_linear_extended()`.
pub fn to_linear_extended(n: f64) -> f64 {
    if n < 0.0 {
        -(srgb::to_linear(-n as f32) as f64)
    } else {
        srgb::to_linear(n as f32) as f64
    }
}

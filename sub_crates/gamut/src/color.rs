use wheel_geom::normalize_hue;

use crate::{hsb, ColorError, Gamut};

/// An RGB color, tagged with the gamut its values are expressed in.
///
/// Channels are normally in [0, 1], but colors converted from a wider
/// gamut can have extended (negative or > 1) values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub gamut: Gamut,
}

impl RgbColor {
    pub fn new(red: f64, green: f64, blue: f64, gamut: Gamut) -> RgbColor {
        RgbColor {
            red: red,
            green: green,
            blue: blue,
            gamut: gamut,
        }
    }

    pub fn from_components(components: [f64; 3], gamut: Gamut) -> RgbColor {
        RgbColor::new(components[0], components[1], components[2], gamut)
    }

    pub fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|n| n.is_finite())
    }

    /// Whether all channels are within [0, 1].
    pub fn is_nominal(&self) -> bool {
        self.components().iter().all(|&n| n >= 0.0 && n <= 1.0)
    }
}

/// Hue, saturation, and brightness.  Hue is always in [0, 1), and the
/// other two in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HsbColor {
    hue: f64,
    saturation: f64,
    brightness: f64,
}

impl HsbColor {
    /// Hue is wrapped into [0, 1).  Saturation and brightness are
    /// checked, not clamped.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Result<HsbColor, ColorError> {
        if !hue.is_finite() {
            return Err(ColorError::ComponentOutOfRange {
                name: "hue",
                value: hue,
            });
        }
        check_unit("saturation", saturation)?;
        check_unit("brightness", brightness)?;

        Ok(HsbColor {
            hue: normalize_hue(hue),
            saturation: saturation,
            brightness: brightness,
        })
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// The same RGB triple regardless of gamut: the gamut only says which
    /// color space the triple lives in.
    pub fn to_rgb(&self, gamut: Gamut) -> RgbColor {
        RgbColor::from_components(
            hsb::hsb_to_rgb(self.hue, self.saturation, self.brightness),
            gamut,
        )
    }
}

/// Channel values of a color as expressed in some gamut, for display.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Components {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Components {
    pub fn as_array(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[f64; 3]> for Components {
    fn from(rgb: [f64; 3]) -> Self {
        Components {
            red: rgb[0],
            green: rgb[1],
            blue: rgb[2],
        }
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ColorError> {
    if value >= 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ColorError::ComponentOutOfRange {
            name: name,
            value: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps() {
        let c = HsbColor::new(1.25, 0.5, 0.5).unwrap();
        assert!((c.hue() - 0.25).abs() < 0.000_000_1);
        assert_eq!(HsbColor::new(1.0, 1.0, 1.0).unwrap().hue(), 0.0);
        assert!((HsbColor::new(-0.1, 1.0, 1.0).unwrap().hue() - 0.9).abs() < 0.000_000_1);

        // Tiny negative hues must not round up to 1.0.
        assert_eq!(HsbColor::new(-1.0e-20, 1.0, 1.0).unwrap().hue(), 0.0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            HsbColor::new(0.0, 1.5, 1.0),
            Err(ColorError::ComponentOutOfRange {
                name: "saturation",
                value: 1.5
            })
        );
        assert!(HsbColor::new(0.0, 1.0, -0.01).is_err());
        assert!(HsbColor::new(0.0, f64::NAN, 1.0).is_err());
        assert!(HsbColor::new(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn tagging_does_not_touch_values() {
        let hsb = HsbColor::new(0.6, 0.7, 0.8).unwrap();
        let standard = hsb.to_rgb(Gamut::Standard);
        let wide = hsb.to_rgb(Gamut::Wide);
        assert_eq!(standard.components(), wide.components());
        assert_ne!(standard, wide);
    }

    #[test]
    fn nominal() {
        assert!(RgbColor::new(0.0, 0.5, 1.0, Gamut::Wide).is_nominal());
        assert!(!RgbColor::new(1.09, -0.22, -0.15, Gamut::Standard).is_nominal());
        assert!(!RgbColor::new(f64::NAN, 0.0, 0.0, Gamut::Standard).is_finite());
    }
}

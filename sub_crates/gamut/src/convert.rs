use colorbox::matrix;

use crate::{hsb, transfer, ColorError, Components, Gamut, HsbColor, RgbColor};

/// Re-expresses encoded RGB values from one gamut's color space in
/// another's.
///
/// Implementations report conversions they can't do as
/// `ColorError::UnsupportedConversion` rather than guessing.
pub trait ColorSpacePort {
    fn convert(&self, rgb: [f64; 3], from: Gamut, to: Gamut) -> Result<[f64; 3], ColorError>;
}

/// Converts between sRGB and Display P3 with 3x3 primaries matrices.
///
/// Both spaces share the sRGB transfer curve and a D65 white point, so
/// no chromatic adaptation is involved.  The extended form of the curve
/// is used, so out-of-gamut results come back as negative or > 1 values
/// instead of being clipped.
#[derive(Debug, Copy, Clone)]
pub struct MatrixPort {
    standard_to_wide: [[f64; 3]; 3],
    wide_to_standard: [[f64; 3]; 3],
}

impl MatrixPort {
    pub fn new() -> MatrixPort {
        let standard = Gamut::Standard.chromaticities();
        let wide = Gamut::Wide.chromaticities();
        MatrixPort {
            standard_to_wide: matrix::rgb_to_rgb_matrix(standard, wide),
            wide_to_standard: matrix::rgb_to_rgb_matrix(wide, standard),
        }
    }
}

impl Default for MatrixPort {
    fn default() -> MatrixPort {
        MatrixPort::new()
    }
}

impl ColorSpacePort for MatrixPort {
    fn convert(&self, rgb: [f64; 3], from: Gamut, to: Gamut) -> Result<[f64; 3], ColorError> {
        let unsupported = ColorError::UnsupportedConversion {
            from: from,
            to: to,
            components: rgb,
        };
        if !rgb.iter().all(|n| n.is_finite()) {
            return Err(unsupported);
        }
        if from == to {
            return Ok(rgb);
        }

        let m = match to {
            Gamut::Wide => self.standard_to_wide,
            Gamut::Standard => self.wide_to_standard,
        };

        let linear = rgb.map(transfer::to_linear_extended);
        let out = matrix::transform_color(linear, m).map(transfer::from_linear_extended);

        if out.iter().all(|n| n.is_finite()) {
            Ok(out)
        } else {
            Err(unsupported)
        }
    }
}

/// Builds colors from hue/saturation/brightness and pulls numeric values
/// back out of them.
#[derive(Debug, Clone)]
pub struct GamutConverter<P: ColorSpacePort = MatrixPort> {
    port: P,
}

impl GamutConverter<MatrixPort> {
    pub fn new() -> GamutConverter<MatrixPort> {
        GamutConverter {
            port: MatrixPort::new(),
        }
    }
}

impl Default for GamutConverter<MatrixPort> {
    fn default() -> GamutConverter<MatrixPort> {
        GamutConverter::new()
    }
}

impl<P: ColorSpacePort> GamutConverter<P> {
    pub fn with_port(port: P) -> GamutConverter<P> {
        GamutConverter { port: port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// The HSB -> RGB math is the same for both gamuts.  The resulting
    /// triple is just declared to be in `gamut`, which for `Gamut::Wide`
    /// gives more saturated real-world colors.
    pub fn color_from(
        &self,
        hue: f64,
        saturation: f64,
        brightness: f64,
        gamut: Gamut,
    ) -> Result<RgbColor, ColorError> {
        Ok(HsbColor::new(hue, saturation, brightness)?.to_rgb(gamut))
    }

    /// Re-expresses `color` in `target`'s color space.
    pub fn convert(&self, color: &RgbColor, target: Gamut) -> Result<RgbColor, ColorError> {
        let rgb = self.port.convert(color.components(), color.gamut, target)?;
        Ok(RgbColor::from_components(rgb, target))
    }

    /// Channel values of `color` as they'd be expressed in `target`.
    ///
    /// Returns `None` when the conversion isn't available.  Callers should
    /// show that as blank, not as zeros.
    pub fn components_of(&self, color: &RgbColor, target: Gamut) -> Option<Components> {
        match self.port.convert(color.components(), color.gamut, target) {
            Ok(rgb) => Some(rgb.into()),
            Err(e) => {
                log::debug!("Components unavailable: {}", e);
                None
            }
        }
    }

    pub fn hue_of(&self, color: &RgbColor) -> Result<f64, ColorError> {
        self.extract_hsb(color).map(|hsb| hsb[0])
    }

    pub fn brightness_of(&self, color: &RgbColor) -> Result<f64, ColorError> {
        self.extract_hsb(color).map(|hsb| hsb[2])
    }

    /// HSB is only defined directly on colors whose channels are in
    /// [0, 1].  Anything else gets exactly one retry in extended sRGB,
    /// where unbounded (but finite) channels are accepted.
    fn extract_hsb(&self, color: &RgbColor) -> Result<[f64; 3], ColorError> {
        if color.is_finite() && color.is_nominal() {
            return Ok(hsb::rgb_to_hsb(color.components()));
        }

        log::warn!(
            "Cannot extract HSB from {} color {:?} directly, retrying in extended sRGB",
            color.gamut,
            color.components()
        );

        let failed = ColorError::ExtractionFailed {
            gamut: color.gamut,
            components: color.components(),
        };
        match self.convert(color, Gamut::Standard) {
            Ok(extended) if extended.is_finite() => Ok(hsb::rgb_to_hsb(extended.components())),
            Ok(_) => Err(failed),
            Err(e) => {
                log::warn!("Extended sRGB conversion failed: {}", e);
                Err(failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_close(a: f64, b: f64, thresh: f64) -> bool {
        (a - b).abs() < thresh
    }

    /// A port that only knows about sRGB.
    struct StandardOnlyPort;

    impl ColorSpacePort for StandardOnlyPort {
        fn convert(&self, rgb: [f64; 3], from: Gamut, to: Gamut) -> Result<[f64; 3], ColorError> {
            if from == Gamut::Standard && to == Gamut::Standard {
                Ok(rgb)
            } else {
                Err(ColorError::UnsupportedConversion {
                    from: from,
                    to: to,
                    components: rgb,
                })
            }
        }
    }

    #[test]
    fn gamuts_give_distinct_colors() {
        let conv = GamutConverter::new();
        let standard = conv.color_from(0.0, 1.0, 1.0, Gamut::Standard).unwrap();
        let wide = conv.color_from(0.0, 1.0, 1.0, Gamut::Wide).unwrap();

        assert_eq!(standard.components(), wide.components());
        assert_ne!(standard, wide);

        let standard_in_wide = conv.components_of(&standard, Gamut::Wide).unwrap();
        let wide_in_standard = conv.components_of(&wide, Gamut::Standard).unwrap();
        assert!(standard_in_wide.as_array() != standard.components());
        assert!(wide_in_standard.as_array() != wide.components());
    }

    #[test]
    fn known_red_values() {
        let conv = GamutConverter::new();
        let srgb_red = RgbColor::new(1.0, 0.0, 0.0, Gamut::Standard);
        let p3 = conv.components_of(&srgb_red, Gamut::Wide).unwrap();
        assert!(is_close(p3.red, 0.9175, 0.001));
        assert!(is_close(p3.green, 0.2003, 0.001));
        assert!(is_close(p3.blue, 0.1386, 0.001));

        // Display P3 red is outside sRGB, so it comes out extended.
        let p3_red = RgbColor::new(1.0, 0.0, 0.0, Gamut::Wide);
        let srgb = conv.components_of(&p3_red, Gamut::Standard).unwrap();
        assert!(srgb.red > 1.0);
        assert!(srgb.green < 0.0);
        assert!(srgb.blue < 0.0);
    }

    #[test]
    fn same_gamut_is_identity() {
        let conv = GamutConverter::new();
        let c = RgbColor::new(0.2, 0.4, 0.6, Gamut::Wide);
        assert_eq!(conv.components_of(&c, Gamut::Wide).unwrap().as_array(), c.components());
    }

    #[test]
    fn conversion_round_trip() {
        let conv = GamutConverter::new();
        let c = RgbColor::new(0.25, 0.5, 0.75, Gamut::Standard);
        let back = conv
            .convert(&conv.convert(&c, Gamut::Wide).unwrap(), Gamut::Standard)
            .unwrap();
        for i in 0..3 {
            assert!(is_close(back.components()[i], c.components()[i], 0.000_01));
        }
    }

    #[test]
    fn unsupported_conversion_is_absent() {
        let conv = GamutConverter::with_port(StandardOnlyPort);
        let c = conv.color_from(0.3, 1.0, 1.0, Gamut::Wide).unwrap();
        assert_eq!(conv.components_of(&c, Gamut::Standard), None);

        let conv = GamutConverter::new();
        let nan = RgbColor::new(f64::NAN, 0.0, 0.0, Gamut::Standard);
        assert_eq!(conv.components_of(&nan, Gamut::Wide), None);
    }

    #[test]
    fn brightness_is_monotonic() {
        let conv = GamutConverter::new();
        for &gamut in &[Gamut::Standard, Gamut::Wide] {
            for &(hue, sat) in &[(0.0, 1.0), (0.37, 0.5), (0.8, 0.0)] {
                let mut last = -1.0;
                for i in 0..=20 {
                    let b = i as f64 / 20.0;
                    let color = conv.color_from(hue, sat, b, gamut).unwrap();
                    let brightness = conv.brightness_of(&color).unwrap();
                    assert!(brightness >= last);
                    assert!(is_close(brightness, b, 0.000_001));
                    last = brightness;
                }
            }
        }
    }

    #[test]
    fn hue_extraction_matches_input() {
        let conv = GamutConverter::new();
        for &hue in &[0.0, 0.1, 0.5, 0.9] {
            let color = conv.color_from(hue, 1.0, 1.0, Gamut::Wide).unwrap();
            assert!(is_close(conv.hue_of(&color).unwrap(), hue, 0.000_001));
        }
    }

    #[test]
    fn extended_color_uses_fallback() {
        let conv = GamutConverter::new();
        let p3_red = RgbColor::new(1.0, 0.0, 0.0, Gamut::Wide);
        let extended = conv.convert(&p3_red, Gamut::Standard).unwrap();
        assert!(!extended.is_nominal());

        assert!(conv.brightness_of(&extended).unwrap() > 1.0);
        let hue = conv.hue_of(&extended).unwrap();
        assert!(hue >= 0.0 && hue < 1.0);
        assert!(hue > 0.9 || hue < 0.1);
    }

    #[test]
    fn extraction_failure_is_reported() {
        let conv = GamutConverter::new();
        let bad = RgbColor::new(f64::NAN, 0.5, 0.5, Gamut::Wide);
        assert!(matches!(
            conv.hue_of(&bad),
            Err(ColorError::ExtractionFailed {
                gamut: Gamut::Wide,
                ..
            })
        ));

        let bad = RgbColor::new(0.5, f64::INFINITY, 0.5, Gamut::Standard);
        assert!(conv.brightness_of(&bad).is_err());

        let conv = GamutConverter::with_port(StandardOnlyPort);
        let out_of_range = RgbColor::new(1.2, 0.5, 0.5, Gamut::Wide);
        assert!(matches!(
            conv.brightness_of(&out_of_range),
            Err(ColorError::ExtractionFailed { .. })
        ));
    }

    #[test]
    fn color_from_rejects_bad_input() {
        let conv = GamutConverter::new();
        assert!(conv.color_from(0.0, 1.0, 1.5, Gamut::Wide).is_err());
        assert!(conv.color_from(0.0, -0.5, 1.0, Gamut::Standard).is_err());
    }
}

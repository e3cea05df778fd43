//! Numeric readout of the picked color, as shown next to the swatch.

use gamut::{hsb, ColorSpacePort, Components, Gamut, GamutConverter, RgbColor};

/// Label color as a grey level plus alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextColor {
    pub white: f64,
    pub alpha: f64,
}

/// Dark text on bright swatches, light text on dark ones.  Extended
/// brightness above 1 is treated as 1.
pub fn text_color_for(brightness: f64) -> TextColor {
    let brightness = brightness.min(1.0);
    if brightness > 0.5 {
        TextColor {
            white: 0.0,
            alpha: brightness,
        }
    } else {
        TextColor {
            white: 1.0,
            alpha: 1.0 - brightness,
        }
    }
}

/// Two decimal places.  Missing values are left blank rather than shown
/// as zero.
pub fn format_component(value: Option<f64>) -> String {
    match value {
        Some(n) => format!("{:.2}", n),
        None => String::new(),
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SwatchReadout {
    pub color: RgbColor,
    pub srgb: Option<Components>,
    pub display_p3: Option<Components>,

    /// Based on the brightness of the (extended) sRGB values.  `None` if
    /// those aren't available, in which case the labels should keep
    /// whatever color they had.
    pub text_color: Option<TextColor>,
}

impl SwatchReadout {
    pub fn of<P: ColorSpacePort>(color: RgbColor, converter: &GamutConverter<P>) -> SwatchReadout {
        let srgb = converter.components_of(&color, Gamut::Standard);
        SwatchReadout {
            color: color,
            srgb: srgb,
            display_p3: converter.components_of(&color, Gamut::Wide),
            text_color: srgb.map(|c| text_color_for(hsb::rgb_to_hsb(c.as_array())[2])),
        }
    }

    pub fn srgb_labels(&self) -> [String; 3] {
        labels(self.srgb)
    }

    pub fn display_p3_labels(&self) -> [String; 3] {
        labels(self.display_p3)
    }
}

impl std::fmt::Display for SwatchReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, labels) in [
            (Gamut::Standard, self.srgb_labels()),
            (Gamut::Wide, self.display_p3_labels()),
        ] {
            writeln!(
                f,
                "{:<12}R {:>5}  G {:>5}  B {:>5}",
                name.to_string(),
                labels[0],
                labels[1],
                labels[2]
            )?;
        }
        match self.text_color {
            Some(c) => write!(f, "text: white {:.2}, alpha {:.2}", c.white, c.alpha),
            None => write!(f, "text: unchanged"),
        }
    }
}

fn labels(components: Option<Components>) -> [String; 3] {
    [
        format_component(components.map(|c| c.red)),
        format_component(components.map(|c| c.green)),
        format_component(components.map(|c| c.blue)),
    ]
}

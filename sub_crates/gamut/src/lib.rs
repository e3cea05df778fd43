//! Color gamuts, HSB colors, and conversion between the standard (sRGB)
//! and wide (Display P3) color spaces.

mod color;
mod convert;
mod error;
pub mod hsb;
pub mod transfer;

use colorbox::chroma;

pub use color::{Components, HsbColor, RgbColor};
pub use convert::{ColorSpacePort, GamutConverter, MatrixPort};
pub use error::ColorError;

/// The color space that a color's numeric RGB values are expressed in.
///
/// The same RGB triple is a different physical color depending on the
/// gamut it's tagged with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Gamut {
    /// sRGB.
    Standard,
    /// Display P3.
    #[default]
    Wide,
}

/// What the platform reports about the display's color capability.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DisplayGamut {
    #[default]
    Unspecified,
    Srgb,
    P3,
}

impl Gamut {
    pub fn from_display_gamut(display_gamut: DisplayGamut) -> Gamut {
        match display_gamut {
            DisplayGamut::Srgb => Gamut::Standard,
            DisplayGamut::P3 | DisplayGamut::Unspecified => Gamut::Wide,
        }
    }

    pub fn display_gamut(self) -> DisplayGamut {
        match self {
            Gamut::Standard => DisplayGamut::Srgb,
            Gamut::Wide => DisplayGamut::P3,
        }
    }

    /// `None` means the platform didn't say, which is treated as wide.
    pub fn from_supports_wide_color(supports_wide: Option<bool>) -> Gamut {
        match supports_wide {
            Some(false) => Gamut::Standard,
            Some(true) | None => Gamut::Wide,
        }
    }

    pub fn supports_wide_color(self) -> bool {
        self == Gamut::Wide
    }

    /// Maps a gamut selector's segment index.  Unknown indices are wide.
    pub fn from_index(index: usize) -> Gamut {
        match index {
            1 => Gamut::Standard,
            _ => Gamut::Wide,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Gamut::Wide => 0,
            Gamut::Standard => 1,
        }
    }

    /// Both are D65.  Display P3 uses the DCI-P3 primaries.
    pub fn chromaticities(self) -> chroma::Chromaticities {
        match self {
            Gamut::Standard => chroma::REC709,
            Gamut::Wide => chroma::DISPLAY_P3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gamut::Standard => "srgb",
            Gamut::Wide => "p3",
        }
    }

    pub fn from_str(text: &str) -> Option<Gamut> {
        match text.trim().to_lowercase().as_str() {
            "srgb" | "standard" => Some(Gamut::Standard),
            "p3" | "display-p3" | "display_p3" | "wide" => Some(Gamut::Wide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gamut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gamut::Standard => write!(f, "sRGB"),
            Gamut::Wide => write!(f, "Display P3"),
        }
    }
}

impl DisplayGamut {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayGamut::Unspecified => "unspecified",
            DisplayGamut::Srgb => "srgb",
            DisplayGamut::P3 => "p3",
        }
    }

    pub fn from_str(text: &str) -> Option<DisplayGamut> {
        match text.trim().to_lowercase().as_str() {
            "unspecified" | "unknown" => Some(DisplayGamut::Unspecified),
            "srgb" => Some(DisplayGamut::Srgb),
            "p3" | "display-p3" => Some(DisplayGamut::P3),
            _ => None,
        }
    }
}

use crate::Gamut;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ColorError {
    /// Saturation or brightness outside [0, 1], or not a number.
    #[error("{name} {value} is outside the range [0, 1]")]
    ComponentOutOfRange { name: &'static str, value: f64 },

    #[error("cannot express {components:?} from {from} in {to}")]
    UnsupportedConversion {
        from: Gamut,
        to: Gamut,
        components: [f64; 3],
    },

    /// Hue/brightness couldn't be extracted, even after converting to
    /// extended sRGB.
    #[error("failed to extract hue and brightness from {gamut} color {components:?}")]
    ExtractionFailed { gamut: Gamut, components: [f64; 3] },
}

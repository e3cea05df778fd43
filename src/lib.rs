pub mod job_helpers;
pub mod picker;
pub mod render;
pub mod settings;
pub mod swatch;

pub use gamut::{DisplayGamut, Gamut, GamutConverter, RgbColor};
pub use wheel_geom::{Circle, Point2D};

/// Everything a front end needs to draw after an input event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickerView {
    pub state: picker::PickerState,
    pub reticule: Point2D,
    pub wheel_color: Option<RgbColor>,
    pub swatch: Option<swatch::SwatchReadout>,
}

impl PickerView {
    /// Derives the view for `state`.  Colors that can't be built are left
    /// out rather than replaced with defaults.
    pub fn of<P: gamut::ColorSpacePort>(
        state: picker::PickerState,
        reticule: Point2D,
        converter: &GamutConverter<P>,
    ) -> PickerView {
        let wheel_color = state.wheel_color(converter).ok();
        let swatch = state
            .swatch_color(converter)
            .ok()
            .map(|color| swatch::SwatchReadout::of(color, converter));

        PickerView {
            state: state,
            reticule: reticule,
            wheel_color: wheel_color,
            swatch: swatch,
        }
    }
}

//! The picker's state as a plain value.
//!
//! Every input (pointer move, brightness change, gamut change, new color)
//! produces a new `PickerState`, and the caller re-derives whatever it
//! displays from that.  Nothing is shared or mutated in place.

use gamut::{ColorError, ColorSpacePort, Gamut, GamutConverter, RgbColor};
use wheel_geom::{hue_to_position, position_to_hue, Circle, Point2D};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickerState {
    gamut: Gamut,
    hue: f64,
    brightness: f64,
}

impl Default for PickerState {
    fn default() -> PickerState {
        PickerState::new(Gamut::default())
    }
}

impl PickerState {
    /// Hue 0 at full brightness.
    pub fn new(gamut: Gamut) -> PickerState {
        PickerState {
            gamut: gamut,
            hue: 0.0,
            brightness: 1.0,
        }
    }

    /// Takes both hue and brightness from `color`.
    pub fn from_color<P: ColorSpacePort>(
        color: &RgbColor,
        gamut: Gamut,
        converter: &GamutConverter<P>,
    ) -> Result<PickerState, ColorError> {
        PickerState::new(gamut).with_color(color, converter)
    }

    pub fn gamut(&self) -> Gamut {
        self.gamut
    }

    /// In [0, 1).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// On error `self` is left as it was, so the caller can keep showing
    /// the previous state.
    pub fn with_color<P: ColorSpacePort>(
        self,
        color: &RgbColor,
        converter: &GamutConverter<P>,
    ) -> Result<PickerState, ColorError> {
        let hue = converter.hue_of(color)?;
        let brightness = converter.brightness_of(color)?;

        // Extended colors can report brightness above 1.
        Ok(PickerState {
            hue: hue,
            brightness: brightness.max(0.0).min(1.0),
            ..self
        })
    }

    /// Returns the new state and where to draw the reticule.
    pub fn pointer_moved(self, point: Point2D, circle: Circle) -> (PickerState, Point2D) {
        let pick = position_to_hue(point, circle);
        (
            PickerState {
                hue: pick.hue,
                ..self
            },
            pick.reticule,
        )
    }

    pub fn with_brightness(self, brightness: f64) -> Result<PickerState, ColorError> {
        if !(brightness >= 0.0 && brightness <= 1.0) {
            return Err(ColorError::ComponentOutOfRange {
                name: "brightness",
                value: brightness,
            });
        }
        Ok(PickerState {
            brightness: brightness,
            ..self
        })
    }

    /// The hue stays put, only the colors derived from it change.
    pub fn with_gamut(self, gamut: Gamut) -> PickerState {
        PickerState {
            gamut: gamut,
            ..self
        }
    }

    pub fn reticule(&self, circle: Circle) -> Point2D {
        hue_to_position(self.hue, circle)
    }

    /// The fully saturated, fully bright color at the current hue.  This
    /// is what the brightness slider's track shows.
    pub fn wheel_color<P: ColorSpacePort>(
        &self,
        converter: &GamutConverter<P>,
    ) -> Result<RgbColor, ColorError> {
        converter.color_from(self.hue, 1.0, 1.0, self.gamut)
    }

    /// The picked color: current hue at the current brightness.
    pub fn swatch_color<P: ColorSpacePort>(
        &self,
        converter: &GamutConverter<P>,
    ) -> Result<RgbColor, ColorError> {
        converter.color_from(self.hue, 1.0, self.brightness, self.gamut)
    }
}

/// The brightness slider runs from bright (0.0) to dark (1.0).
pub fn brightness_from_slider(value: f32) -> f64 {
    1.0 - (value.max(0.0).min(1.0) as f64)
}

pub fn slider_from_brightness(brightness: f64) -> f32 {
    (1.0 - brightness) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_close(a: f64, b: f64, thresh: f64) -> bool {
        (a - b).abs() < thresh
    }

    fn circle() -> Circle {
        Circle::new(Point2D::new(100.0, 100.0), 50.0)
    }

    #[test]
    fn starts_from_green() {
        let conv = GamutConverter::new();
        let green = RgbColor::new(0.0, 1.0, 0.0, Gamut::Standard);
        let state = PickerState::from_color(&green, Gamut::Wide, &conv).unwrap();

        assert_eq!(state.gamut(), Gamut::Wide);
        assert!(is_close(state.hue(), 1.0 / 3.0, 0.000_001));
        assert!(is_close(state.brightness(), 1.0, 0.000_001));

        let wheel = state.wheel_color(&conv).unwrap();
        assert_eq!(wheel.gamut, Gamut::Wide);
        assert!(is_close(wheel.green, 1.0, 0.000_001));
        assert!(is_close(wheel.red, 0.0, 0.000_001));
    }

    #[test]
    fn pointer_sets_hue() {
        let state = PickerState::new(Gamut::Standard);
        let (state, reticule) = state.pointer_moved(Point2D::new(100.0, 400.0), circle());

        assert!(is_close(state.hue(), 0.75, 0.000_001));
        assert!(is_close(reticule.x, 100.0, 0.000_001));
        assert!(is_close(reticule.y, 150.0, 0.000_001));

        let r = state.reticule(circle());
        assert!(is_close(r.x, reticule.x, 0.000_001));
        assert!(is_close(r.y, reticule.y, 0.000_001));
    }

    #[test]
    fn swatch_uses_brightness() {
        let conv = GamutConverter::new();
        let state = PickerState::new(Gamut::Wide).with_brightness(0.5).unwrap();

        let swatch = state.swatch_color(&conv).unwrap();
        assert_eq!(swatch, RgbColor::new(0.5, 0.0, 0.0, Gamut::Wide));
        assert_eq!(
            state.wheel_color(&conv).unwrap(),
            RgbColor::new(1.0, 0.0, 0.0, Gamut::Wide)
        );
    }

    #[test]
    fn gamut_change_keeps_hue() {
        let conv = GamutConverter::new();
        let (state, _) =
            PickerState::new(Gamut::Wide).pointer_moved(Point2D::new(100.0, 50.0), circle());
        let switched = state.with_gamut(Gamut::Standard);

        assert_eq!(switched.hue(), state.hue());
        let a = state.swatch_color(&conv).unwrap();
        let b = switched.swatch_color(&conv).unwrap();
        assert_eq!(a.components(), b.components());
        assert_ne!(a, b);
    }

    #[test]
    fn bad_brightness_keeps_state() {
        let state = PickerState::new(Gamut::Wide);
        assert!(state.with_brightness(1.5).is_err());
        assert!(state.with_brightness(f64::NAN).is_err());
        assert_eq!(state.brightness(), 1.0);
    }

    #[test]
    fn failed_color_is_an_error() {
        let conv = GamutConverter::new();
        let state = PickerState::new(Gamut::Wide).with_brightness(0.3).unwrap();
        let bad = RgbColor::new(f64::NAN, 0.0, 0.0, Gamut::Wide);
        assert!(state.with_color(&bad, &conv).is_err());
        assert_eq!(state.brightness(), 0.3);
    }

    #[test]
    fn slider_mapping() {
        assert_eq!(brightness_from_slider(0.0), 1.0);
        assert_eq!(brightness_from_slider(1.0), 0.0);
        assert!(is_close(brightness_from_slider(0.25), 0.75, 0.000_001));
        assert!(is_close(slider_from_brightness(0.75) as f64, 0.25, 0.000_001));
    }
}

//! Picker settings, stored as simple `key: value` lines.

use std::path::Path;

use gamut::{DisplayGamut, Gamut};
use wheel_geom::{Circle, Point2D};

use crate::render::swatch_pixel_count;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Explicit gamut selection.  If `None`, it's derived from
    /// `display_gamut`.
    pub gamut: Option<Gamut>,
    pub display_gamut: DisplayGamut,

    /// If `None`, the brightness is taken from `start_color`.
    pub brightness: Option<f64>,

    /// In sRGB.
    pub start_color: [f64; 3],

    pub wheel_size: (f64, f64),
    pub swatch_size: (usize, usize),
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            gamut: None,
            display_gamut: DisplayGamut::Unspecified,
            brightness: None,
            start_color: [0.0, 1.0, 0.0],
            wheel_size: (300.0, 300.0),
            swatch_size: (320, 120),
        }
    }
}

impl Settings {
    pub fn gamut(&self) -> Gamut {
        self.gamut
            .unwrap_or_else(|| Gamut::from_display_gamut(self.display_gamut))
    }

    /// The wheel's circle, with the wheel's bounding box at the origin.
    pub fn wheel_circle(&self) -> Circle {
        Circle::inscribed(Point2D::default(), self.wheel_size.0, self.wheel_size.1)
    }

    pub fn to_string(&self) -> String {
        let mut s = String::new();

        if let Some(gamut) = self.gamut {
            s.push_str(&format!("gamut: {}\n", gamut.as_str()));
        }
        s.push_str(&format!("display_gamut: {}\n", self.display_gamut.as_str()));
        if let Some(brightness) = self.brightness {
            s.push_str(&format!("brightness: {}\n", brightness));
        }
        s.push_str(&format!(
            "start_color: {} {} {}\n",
            self.start_color[0], self.start_color[1], self.start_color[2]
        ));
        s.push_str(&format!(
            "wheel_size: {} {}\n",
            self.wheel_size.0, self.wheel_size.1
        ));
        s.push_str(&format!(
            "swatch_size: {} {}\n",
            self.swatch_size.0, self.swatch_size.1
        ));

        s
    }

    /// Parses settings text.
    ///
    /// Bad lines don't stop parsing: the returned settings have everything
    /// that could be parsed, and the result holds the first error.
    pub fn from_str(text: &str) -> (Settings, Result<(), SettingsError>) {
        let mut settings = Settings::default();
        let mut result = Ok(());

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (param, value) = match line.split_once(':') {
                Some((param, value)) => (param.trim(), value.trim()),
                None => {
                    if result.is_ok() {
                        result = Err(SettingsError::UnknownSetting(line.into()));
                    }
                    continue;
                }
            };

            let parsed = match param {
                "gamut" => Gamut::from_str(value)
                    .map(|g| settings.gamut = Some(g))
                    .ok_or_else(|| SettingsError::UnknownGamut(value.into())),
                "display_gamut" => DisplayGamut::from_str(value)
                    .map(|g| settings.display_gamut = g)
                    .ok_or_else(|| SettingsError::UnknownGamut(value.into())),
                "brightness" => parse_numbers::<f64, 1>(param, value)
                    .and_then(|[b]| {
                        if b >= 0.0 && b <= 1.0 {
                            Ok(b)
                        } else {
                            Err(invalid(param, value))
                        }
                    })
                    .map(|b| settings.brightness = Some(b)),
                "start_color" => {
                    parse_numbers::<f64, 3>(param, value).map(|rgb| settings.start_color = rgb)
                }
                "wheel_size" => parse_numbers::<f64, 2>(param, value)
                    .map(|[w, h]| settings.wheel_size = (w, h)),
                "swatch_size" => parse_numbers::<usize, 2>(param, value)
                    .and_then(|[w, h]| match swatch_pixel_count(w, h) {
                        Some(_) => Ok((w, h)),
                        None => Err(invalid(param, value)),
                    })
                    .map(|size| settings.swatch_size = size),
                _ => Err(SettingsError::UnknownSetting(param.into())),
            };

            if let Err(e) = parsed {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }

        (settings, result)
    }

    /// Loads a settings file.  Only I/O failures are errors: unparseable
    /// lines are logged and skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
        let path: &Path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let (settings, result) = Settings::from_str(&text);
        if let Err(e) = result {
            log::warn!("Problem in settings file \"{}\": {}", path.display(), e);
        }
        log::debug!("Loaded settings from \"{}\"", path.display());
        Ok(settings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown gamut \"{0}\"")]
    UnknownGamut(String),

    #[error("unknown setting \"{0}\"")]
    UnknownSetting(String),

    #[error("invalid value for \"{param}\": \"{value}\"")]
    InvalidValue { param: String, value: String },
}

fn invalid(param: &str, value: &str) -> SettingsError {
    SettingsError::InvalidValue {
        param: param.into(),
        value: value.into(),
    }
}

/// Parses a pointer position written as "x,y" or "x y".
pub fn parse_point(text: &str) -> Result<Point2D, SettingsError> {
    parse_numbers::<f64, 2>("point", text).map(|[x, y]| Point2D::new(x, y))
}

/// Parses exactly `N` numbers, separated by whitespace and/or commas.
fn parse_numbers<T, const N: usize>(
    param: &str,
    value: &str,
) -> Result<[T; N], SettingsError>
where
    T: std::str::FromStr + Copy + Default,
{
    let mut out = [T::default(); N];
    let mut count = 0;
    for word in value.split(|c: char| c.is_whitespace() || c == ',') {
        if word.is_empty() {
            continue;
        }
        if count >= N {
            return Err(invalid(param, value));
        }
        out[count] = word.parse::<T>().map_err(|_| invalid(param, value))?;
        count += 1;
    }

    if count == N {
        Ok(out)
    } else {
        Err(invalid(param, value))
    }
}

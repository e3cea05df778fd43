//! HSB (a.k.a. HSV) <-> RGB conversion.
//!
//! Hue is in [0, 1) rather than degrees.  Neither direction cares what
//! gamut the RGB values are in.

/// Six-sector HSB -> RGB.  Hue wraps, so 1.0 is the same as 0.0.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> [f64; 3] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let v = brightness;
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - (saturation * f));
    let t = brightness * (1.0 - (saturation * (1.0 - f)));

    match (sector as u32) % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// RGB -> HSB.  Achromatic colors get hue 0.
///
/// Works on unbounded values too, in which case saturation and
/// brightness can land outside [0, 1].
pub fn rgb_to_hsb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let sector = if delta <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        ((b - r) / delta) + 2.0
    } else {
        ((r - g) / delta) + 4.0
    };
    let hue = sector / 6.0;

    [if hue >= 1.0 { 0.0 } else { hue }, saturation, max]
}

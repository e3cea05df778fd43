//! Mapping between points on a circular hue wheel and hue values.
//!
//! Hue 0 sits at angle 0 (the positive x axis), and hue increases in the
//! opposite direction of the trigonometric angle, so that the mapping
//! lines up with the wheel artwork.  All functions here are pure.

use std::f64::consts::PI;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x: x, y: y }
    }

    pub fn distance_to(&self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Circle {
        Circle {
            center: center,
            radius: radius,
        }
    }

    /// The circle inscribed in a control's bounding box.
    ///
    /// `origin` is the top-left corner of the box.
    pub fn inscribed(origin: Point2D, width: f64, height: f64) -> Circle {
        Circle {
            center: Point2D::new(origin.x + (width / 2.0), origin.y + (height / 2.0)),
            radius: width.min(height) / 2.0,
        }
    }

    /// Zero, negative, and NaN radii all count as degenerate.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0)
    }
}

/// The result of picking a hue from a pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HuePick {
    /// Always in [0, 1).
    pub hue: f64,

    /// Where the reticule should be drawn: the pointer position, snapped
    /// onto the circumference if it was outside the circle.
    pub reticule: Point2D,
}

/// Wraps a hue into [0, 1).  0 and 1 denote the same angle.
pub fn normalize_hue(hue: f64) -> f64 {
    let h = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

/// Moves a point outside the circle onto the closest point of its
/// circumference, along the same ray from the center.  Points inside or
/// on the circle are returned unchanged.
pub fn clamp_to_circle(point: Point2D, circle: Circle) -> Point2D {
    if circle.is_degenerate() {
        return circle.center;
    }

    let x_offset = point.x - circle.center.x;
    let y_offset = point.y - circle.center.y;
    let distance = x_offset.hypot(y_offset);

    if distance > circle.radius {
        let scale = circle.radius / distance;
        Point2D::new(
            circle.center.x + (x_offset * scale),
            circle.center.y + (y_offset * scale),
        )
    } else {
        point
    }
}

/// Converts a pointer position into a hue on the wheel.
///
/// A degenerate circle yields hue 0 with the reticule at the center, and
/// so does a pointer exactly at the center of a valid circle (with the
/// reticule left at the pointer).
pub fn position_to_hue(point: Point2D, circle: Circle) -> HuePick {
    if circle.is_degenerate() {
        return HuePick {
            hue: 0.0,
            reticule: circle.center,
        };
    }

    let reticule = clamp_to_circle(point, circle);
    let x_offset = reticule.x - circle.center.x;
    let y_offset = reticule.y - circle.center.y;

    if x_offset == 0.0 && y_offset == 0.0 {
        return HuePick {
            hue: 0.0,
            reticule: reticule,
        };
    }

    // atan2 returns values in [-pi, pi], so move them into [0, 2pi).
    let atan = y_offset.atan2(x_offset);
    let angle = if atan >= 0.0 { atan } else { atan + (2.0 * PI) };

    HuePick {
        hue: normalize_hue(1.0 - (angle / (2.0 * PI))),
        reticule: reticule,
    }
}

/// Converts a hue into the point on the wheel's circumference where the
/// reticule sits for that hue.
pub fn hue_to_position(hue: f64, circle: Circle) -> Point2D {
    if circle.is_degenerate() {
        return circle.center;
    }

    let angle = (1.0 - hue) * (2.0 * PI);
    Point2D::new(
        circle.center.x + (angle.cos() * circle.radius),
        circle.center.y + (angle.sin() * circle.radius),
    )
}

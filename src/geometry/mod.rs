use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// A point in pixel coordinates, origin top-left, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Detected eye centers in the pixel space of one specific raster.
///
/// The pair must refer to the same image that is handed to the engine. If
/// detection ran at a different resolution, rescale with
/// [`LandmarkPair::rescaled_to`] before aligning; the engine itself never
/// rescales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPair {
    pub left: Point2D,
    pub right: Point2D,
}

impl LandmarkPair {
    pub fn new(left: Point2D, right: Point2D) -> Self {
        Self { left, right }
    }

    /// Inter-eye distance in pixels.
    pub fn span(&self) -> f64 {
        self.left.distance_to(self.right)
    }

    /// Scales both coordinates by a uniform factor.
    pub fn rescaled(&self, factor: f64) -> Self {
        Self {
            left: Point2D::new(self.left.x * factor, self.left.y * factor),
            right: Point2D::new(self.right.x * factor, self.right.y * factor),
        }
    }

    /// Corrects coordinates measured at detection resolution to the actual
    /// raster resolution (uniform factor, equal aspect assumed).
    pub fn rescaled_to(&self, actual_width: f64, detection_width: f64) -> crate::Result<Self> {
        if !(actual_width.is_finite() && actual_width > 0.0)
            || !(detection_width.is_finite() && detection_width > 0.0)
        {
            return Err(Error::Config(format!(
                "invalid rescale widths: actual {}, detection {}",
                actual_width, detection_width
            )));
        }
        Ok(self.rescaled(actual_width / detection_width))
    }
}

/// Rotation + uniform scale + translation as a 2x3 matrix
/// `[[a, -b, tx], [b, a, ty]]`. No shear.
///
/// Built per alignment call from one landmark correspondence; carries no
/// identity beyond that call.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityTransform {
    m: [[f64; 3]; 2],
}

impl SimilarityTransform {
    /// Closed-form similarity transform mapping `source.left` onto
    /// `target.left` exactly and `source.right` onto `target.right` up to
    /// floating-point rounding.
    pub fn between(source: &LandmarkPair, target: &LandmarkPair) -> crate::Result<Self> {
        let src_dx = source.right.x - source.left.x;
        let src_dy = source.right.y - source.left.y;
        let src_span = src_dx.hypot(src_dy);
        if !src_span.is_finite() || src_span == 0.0 {
            return Err(Error::DegenerateLandmarks {
                left: source.left,
                right: source.right,
            });
        }

        let dst_dx = target.right.x - target.left.x;
        let dst_dy = target.right.y - target.left.y;
        let dst_span = dst_dx.hypot(dst_dy);
        if !dst_span.is_finite() || dst_span == 0.0 {
            return Err(Error::Config(format!(
                "target landmarks coincide: left {}, right {}",
                target.left, target.right
            )));
        }

        let theta = dst_dy.atan2(dst_dx) - src_dy.atan2(src_dx);
        let scale = dst_span / src_span;
        let a = scale * theta.cos();
        let b = scale * theta.sin();
        // Translation pins source.left onto target.left exactly.
        let tx = target.left.x - (a * source.left.x - b * source.left.y);
        let ty = target.left.y - (b * source.left.x + a * source.left.y);

        Ok(Self {
            m: [[a, -b, tx], [b, a, ty]],
        })
    }

    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    pub fn scale(&self) -> f64 {
        self.m[1][0].hypot(self.m[0][0])
    }

    pub fn rotation_radians(&self) -> f64 {
        self.m[1][0].atan2(self.m[0][0])
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_radians().to_degrees()
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.m[0][2], self.m[1][2])
    }

    pub fn matrix(&self) -> [[f64; 3]; 2] {
        self.m
    }

    /// Row-major 3x3 homogeneous form consumed by the warp routine.
    pub fn to_projective(&self) -> [f32; 9] {
        [
            self.m[0][0] as f32,
            self.m[0][1] as f32,
            self.m[0][2] as f32,
            self.m[1][0] as f32,
            self.m[1][1] as f32,
            self.m[1][2] as f32,
            0.0,
            0.0,
            1.0,
        ]
    }
}

use serde::Serialize;

use crate::config::TargetConfig;
use crate::geometry::{LandmarkPair, Point2D, SimilarityTransform};

/// Diagnostic record of one alignment: the transform parameters plus where
/// the source eyes actually land versus the configured targets.
///
/// Reporting never alters the output; the residual is useful for calibration
/// and for attributing bad results to the upstream detector.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub source_left: Point2D,
    pub source_right: Point2D,
    pub target_left: Point2D,
    pub target_right: Point2D,
    pub achieved_left: Point2D,
    pub achieved_right: Point2D,
    pub rotation_degrees: f64,
    pub scale: f64,
    pub translation: (f64, f64),
    pub max_residual_px: f64,
}

impl AlignmentReport {
    pub fn new(
        landmarks: &LandmarkPair,
        transform: &SimilarityTransform,
        config: &TargetConfig,
    ) -> Self {
        let achieved_left = transform.apply(landmarks.left);
        let achieved_right = transform.apply(landmarks.right);
        let max_residual_px = achieved_left
            .distance_to(config.target_left)
            .max(achieved_right.distance_to(config.target_right));

        Self {
            source_left: landmarks.left,
            source_right: landmarks.right,
            target_left: config.target_left,
            target_right: config.target_right,
            achieved_left,
            achieved_right,
            rotation_degrees: transform.rotation_degrees(),
            scale: transform.scale(),
            translation: transform.translation(),
            max_residual_px,
        }
    }

    pub fn within_tolerance(&self, tolerance_px: f64) -> bool {
        self.max_residual_px <= tolerance_px
    }
}

pub fn print_report(report: &AlignmentReport) {
    println!("Alignment report");
    println!("================");
    println!(
        "  Source eyes:   left {}  right {}",
        report.source_left, report.source_right
    );
    println!("  Rotation:      {:.3} deg", report.rotation_degrees);
    println!("  Scale:         {:.4}", report.scale);
    println!(
        "  Translation:   ({:.2}, {:.2})",
        report.translation.0, report.translation.1
    );
    println!(
        "  Achieved eyes: left {}  right {}",
        report.achieved_left, report.achieved_right
    );
    println!(
        "  Target eyes:   left {}  right {}",
        report.target_left, report.target_right
    );
    println!("  Max residual:  {:.6} px", report.max_residual_px);
}

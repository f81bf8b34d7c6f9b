use thiserror::Error;

use crate::geometry::Point2D;

/// Failure taxonomy for the alignment engine.
///
/// `Decode` and `DegenerateLandmarks` attribute fault to the caller's inputs
/// (the image bytes and the upstream detector, respectively). `Encode` is an
/// internal defect: a valid canvas failed to serialize.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode input image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("degenerate landmarks: left {left} and right {right} do not define a transform")]
    DegenerateLandmarks { left: Point2D, right: Point2D },

    #[error("failed to encode aligned image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation as WarpInterpolation, Projection};
use log::debug;

use crate::analysis::AlignmentReport;
use crate::config::{Interpolation, TargetConfig};
use crate::error::Error;
use crate::geometry::{LandmarkPair, SimilarityTransform};

/// Result of a successful alignment: the encoded canvas plus the diagnostic
/// record of the transform that produced it.
#[derive(Debug, Clone)]
pub struct AlignedImage {
    pub jpeg: Vec<u8>,
    pub report: AlignmentReport,
}

/// Aligns an encoded portrait so that both eyes land on the configured
/// target coordinates.
///
/// Decodes `image_bytes`, computes the similarity transform mapping the
/// landmark pair onto `config.target_pair()`, resamples the source through
/// that transform in one pass into a fresh `config.output_size` canvas, and
/// encodes the canvas as JPEG at `config.output_quality`.
///
/// Pure and deterministic: identical inputs produce identical bytes. The
/// landmarks must be in the pixel space of the decoded image.
pub fn align(
    image_bytes: &[u8],
    landmarks: &LandmarkPair,
    config: &TargetConfig,
) -> crate::Result<AlignedImage> {
    let decoded = image::load_from_memory(image_bytes).map_err(Error::Decode)?;
    let source = decoded.to_rgb8();

    let (canvas, report) = align_image(&source, landmarks, config)?;
    let jpeg = encode_jpeg(&canvas, config.output_quality)?;

    Ok(AlignedImage { jpeg, report })
}

/// As [`align`], for callers that already hold a decoded raster. Returns the
/// un-encoded canvas.
pub fn align_image(
    source: &RgbImage,
    landmarks: &LandmarkPair,
    config: &TargetConfig,
) -> crate::Result<(RgbImage, AlignmentReport)> {
    let transform = SimilarityTransform::between(landmarks, &config.target_pair())?;
    debug!(
        "similarity transform: scale={:.4} rotation={:.2}deg translation=({:.1}, {:.1})",
        transform.scale(),
        transform.rotation_degrees(),
        transform.translation().0,
        transform.translation().1,
    );

    // One resampling pass. Destination pixels whose inverse-mapped source
    // coordinate falls outside the raster get the background color.
    let projection =
        Projection::from_matrix(transform.to_projective()).ok_or(Error::DegenerateLandmarks {
            left: landmarks.left,
            right: landmarks.right,
        })?;

    let (out_w, out_h) = config.output_size;
    let background = Rgb(config.background_color);
    let mut canvas = RgbImage::from_pixel(out_w, out_h, background);
    warp_into(
        source,
        &projection,
        warp_interpolation(config.interpolation),
        background,
        &mut canvas,
    );

    let report = AlignmentReport::new(landmarks, &transform, config);
    Ok((canvas, report))
}

/// Encodes a canvas as JPEG at the given quality (1-100).
pub fn encode_jpeg(canvas: &RgbImage, quality: u8) -> crate::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(canvas)
        .map_err(Error::Encode)?;
    Ok(buffer)
}

fn warp_interpolation(kind: Interpolation) -> WarpInterpolation {
    match kind {
        Interpolation::Nearest => WarpInterpolation::Nearest,
        Interpolation::Bilinear => WarpInterpolation::Bilinear,
        Interpolation::Bicubic => WarpInterpolation::Bicubic,
    }
}

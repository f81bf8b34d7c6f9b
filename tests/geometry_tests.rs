use portrait_align::*;

#[test]
fn test_transform_pins_left_eye_exactly() {
    let source = LandmarkPair::new(Point2D::new(123.7, 88.2), Point2D::new(301.4, 112.9));
    let target = TargetConfig::default().target_pair();

    let transform = SimilarityTransform::between(&source, &target).unwrap();

    let left = transform.apply(source.left);
    assert!((left.x - target.left.x).abs() < 1e-9);
    assert!((left.y - target.left.y).abs() < 1e-9);

    // The right eye is determined by the model, exact up to fp rounding.
    let right = transform.apply(source.right);
    assert!(right.distance_to(target.right) < 1e-9);
}

#[test]
fn test_transform_parameters_for_pure_translation() {
    let source = LandmarkPair::new(Point2D::new(100.0, 200.0), Point2D::new(300.0, 200.0));
    let target = LandmarkPair::new(Point2D::new(150.0, 250.0), Point2D::new(350.0, 250.0));

    let transform = SimilarityTransform::between(&source, &target).unwrap();

    assert!((transform.scale() - 1.0).abs() < 1e-12);
    assert!(transform.rotation_degrees().abs() < 1e-12);
    let (tx, ty) = transform.translation();
    assert!((tx - 50.0).abs() < 1e-9);
    assert!((ty - 50.0).abs() < 1e-9);
}

#[test]
fn test_transform_parameters_for_quarter_turn() {
    // Right eye directly below the left maps to a horizontal target pair.
    let source = LandmarkPair::new(Point2D::new(0.0, 0.0), Point2D::new(0.0, 100.0));
    let target = LandmarkPair::new(Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0));

    let transform = SimilarityTransform::between(&source, &target).unwrap();

    assert!((transform.scale() - 1.0).abs() < 1e-12);
    assert!((transform.rotation_degrees() + 90.0).abs() < 1e-9);
}

#[test]
fn test_matrix_has_no_shear() {
    let source = LandmarkPair::new(Point2D::new(40.0, 60.0), Point2D::new(220.0, 90.0));
    let target = TargetConfig::default().target_pair();

    let m = SimilarityTransform::between(&source, &target).unwrap().matrix();

    // [[a, -b, tx], [b, a, ty]]
    assert!((m[0][0] - m[1][1]).abs() < 1e-12);
    assert!((m[0][1] + m[1][0]).abs() < 1e-12);
}

#[test]
fn test_projective_form_matches_affine_rows() {
    let source = LandmarkPair::new(Point2D::new(40.0, 60.0), Point2D::new(220.0, 90.0));
    let target = TargetConfig::default().target_pair();
    let transform = SimilarityTransform::between(&source, &target).unwrap();

    let m = transform.matrix();
    let p = transform.to_projective();
    assert_eq!(p[0], m[0][0] as f32);
    assert_eq!(p[5], m[1][2] as f32);
    assert_eq!(&p[6..], &[0.0, 0.0, 1.0]);
}

#[test]
fn test_coincident_source_points_are_degenerate() {
    let source = LandmarkPair::new(Point2D::new(50.0, 50.0), Point2D::new(50.0, 50.0));
    let target = TargetConfig::default().target_pair();

    let err = SimilarityTransform::between(&source, &target).unwrap_err();
    match err {
        Error::DegenerateLandmarks { left, right } => {
            assert_eq!(left, Point2D::new(50.0, 50.0));
            assert_eq!(right, Point2D::new(50.0, 50.0));
        }
        other => panic!("expected DegenerateLandmarks, got {:?}", other),
    }
}

#[test]
fn test_coincident_target_points_are_a_config_error() {
    let source = LandmarkPair::new(Point2D::new(10.0, 10.0), Point2D::new(90.0, 10.0));
    let target = LandmarkPair::new(Point2D::new(432.0, 432.0), Point2D::new(432.0, 432.0));

    let err = SimilarityTransform::between(&source, &target).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_landmark_span() {
    let pair = LandmarkPair::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 4.0));
    assert!((pair.span() - 5.0).abs() < 1e-12);
}

#[test]
fn test_rescaled_applies_uniform_factor() {
    let pair = LandmarkPair::new(Point2D::new(100.0, 150.0), Point2D::new(200.0, 150.0));
    let scaled = pair.rescaled(2.5);

    assert_eq!(scaled.left, Point2D::new(250.0, 375.0));
    assert_eq!(scaled.right, Point2D::new(500.0, 375.0));
}

#[test]
fn test_rescaled_to_detection_resolution() {
    // Detector ran on a 500px-wide preview of a 2000px-wide original.
    let pair = LandmarkPair::new(Point2D::new(120.0, 90.0), Point2D::new(180.0, 90.0));
    let scaled = pair.rescaled_to(2000.0, 500.0).unwrap();

    assert_eq!(scaled.left, Point2D::new(480.0, 360.0));
    assert_eq!(scaled.right, Point2D::new(720.0, 360.0));
}

#[test]
fn test_rescaled_to_rejects_zero_detection_width() {
    let pair = LandmarkPair::new(Point2D::new(120.0, 90.0), Point2D::new(180.0, 90.0));

    let err = pair.rescaled_to(2000.0, 0.0).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

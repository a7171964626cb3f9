//! Tests for pipeline defaults and output constants

#[cfg(test)]
mod tests {
    use tileprep::io::configuration::{
        AUGMENTATION_FACTOR, DEFAULT_CONTRAST_THRESHOLD, DEFAULT_SPREAD_THRESHOLD, DEFAULT_STRIDE,
        DEFAULT_TILE_SIZE, MAX_INTENSITY_LEVEL, OUTPUT_EXTENSION, PROGRESS_BAR_WIDTH,
    };
    use tileprep::spatial::transforms::Transform;

    // Tests default window geometry
    // Verified by changing the tile size
    #[test]
    fn test_default_geometry() {
        assert_eq!(DEFAULT_TILE_SIZE, 64);
        assert_eq!(DEFAULT_STRIDE, 32);
        assert!(DEFAULT_STRIDE <= DEFAULT_TILE_SIZE);
    }

    // Tests the contrast default equals sixteen 8-bit steps
    // Verified by using 16/255
    #[test]
    fn test_default_contrast_threshold() {
        assert!((DEFAULT_CONTRAST_THRESHOLD - 0.0625).abs() < f32::EPSILON);
    }

    // Tests the default spread threshold
    // Verified by changing it to 0.01
    #[test]
    fn test_default_spread_threshold() {
        assert!((DEFAULT_SPREAD_THRESHOLD - 0.1).abs() < f32::EPSILON);
    }

    // Tests the augmentation factor matches the transform group
    // Verified by dropping a transform
    #[test]
    fn test_augmentation_factor_matches_transforms() {
        assert_eq!(AUGMENTATION_FACTOR, Transform::ALL.len());
        assert_eq!(AUGMENTATION_FACTOR, 8);
    }

    // Tests output extension is a bare lowercase format name
    // Verified by adding a leading dot
    #[test]
    fn test_output_extension_format() {
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert!(!OUTPUT_EXTENSION.starts_with('.'));
        assert!(OUTPUT_EXTENSION.chars().all(|ch| ch.is_ascii_lowercase()));
    }

    // Tests output level scale and bar width
    // Verified by scaling levels to 256
    #[test]
    fn test_display_constants() {
        assert!((MAX_INTENSITY_LEVEL - 255.0).abs() < f32::EPSILON);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}

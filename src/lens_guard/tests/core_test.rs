#[cfg(test)]
mod core_test {
    use crate::config::SkinToneThresholds;
    use crate::lens_guard::core::{
        analyze, central_region, classify, color_variance, is_skin_tone, overlay_rect, warm_ratio,
        AnalysisError, FrameSample, Region, Signals, Status,
    };
    use image::{Rgba, RgbaImage};

    fn uniform_sample(width: u32, height: u32, rgb: (u8, u8, u8)) -> FrameSample {
        let image = RgbaImage::from_pixel(width, height, Rgba([rgb.0, rgb.1, rgb.2, 255]));
        FrameSample::from_image(&image)
    }

    fn signals(full: f64, central: f64, variance: f64) -> Signals {
        Signals {
            full_warm_ratio: full,
            central_warm_ratio: central,
            color_variance: variance,
        }
    }

    #[test]
    fn test_skin_tone_predicate() {
        assert!(is_skin_tone(200, 100, 80));
        assert!(is_skin_tone(51, 16, 50));

        // one clause violated each
        assert!(!is_skin_tone(100, 200, 80)); // r not > g
        assert!(!is_skin_tone(100, 50, 120)); // r not > b
        assert!(!is_skin_tone(60, 20, 200)); // b not < 150
        assert!(!is_skin_tone(40, 20, 30)); // r not > 50
        assert!(!is_skin_tone(100, 10, 30)); // g not > 15
        assert!(!is_skin_tone(100, 100, 30)); // r not strictly > g
        assert!(!is_skin_tone(100, 50, 100)); // r not strictly > b
    }

    #[test]
    fn test_warm_ratio_uniform_regions() {
        let dark = uniform_sample(8, 8, (30, 10, 10));
        assert_eq!(warm_ratio(&dark).unwrap(), 0.0);

        let skin = uniform_sample(8, 8, (200, 100, 50));
        assert_eq!(warm_ratio(&skin).unwrap(), 1.0);
    }

    #[test]
    fn test_warm_ratio_mixed_region() {
        let sample = FrameSample::new(2, 1, vec![200, 100, 50, 255, 0, 0, 0, 255]);
        assert_eq!(warm_ratio(&sample).unwrap(), 0.5);
    }

    #[test]
    fn test_warm_ratio_empty_region() {
        let sample = FrameSample::new(0, 0, vec![]);
        assert_eq!(warm_ratio(&sample), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_color_variance_uniform_is_zero() {
        let sample = uniform_sample(8, 8, (200, 100, 50));
        assert_eq!(color_variance(&sample).unwrap(), 0.0);
    }

    #[test]
    fn test_color_variance_black_and_white() {
        let sample = FrameSample::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]);
        // per channel: mean 127.5, E[x^2] 32512.5, variance 16256.25
        assert_eq!(color_variance(&sample).unwrap(), 16256.25);
    }

    #[test]
    fn test_color_variance_empty_region() {
        let sample = FrameSample::new(0, 0, vec![]);
        assert_eq!(color_variance(&sample), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_central_region_geometry() {
        assert_eq!(
            central_region(640, 480),
            Region {
                x: 213,
                y: 160,
                width: 213,
                height: 160
            }
        );
        assert_eq!(
            central_region(100, 100),
            Region {
                x: 33,
                y: 33,
                width: 33,
                height: 33
            }
        );
    }

    #[test]
    fn test_region_extraction_picks_native_pixels() {
        // 3x3 frame, only the center pixel is skin tone
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([200, 100, 50, 255]));
        let sample = FrameSample::from_image(&image);

        let central = sample.region(central_region(3, 3));
        assert_eq!(central.width(), 1);
        assert_eq!(central.height(), 1);
        assert_eq!(warm_ratio(&central).unwrap(), 1.0);
    }

    #[test]
    fn test_region_clamped_to_bounds() {
        let sample = uniform_sample(4, 4, (200, 100, 50));
        let out_of_range = sample.region(Region {
            x: 10,
            y: 10,
            width: 2,
            height: 2,
        });
        assert_eq!(out_of_range.pixel_count(), 0);
    }

    #[test]
    fn test_analyze_combines_full_and_central_signals() {
        // 9x9 frame: central third is skin tone, everything else black
        let image = RgbaImage::from_fn(9, 9, |x, y| {
            if (3..6).contains(&x) && (3..6).contains(&y) {
                Rgba([200, 100, 50, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        });
        let sample = FrameSample::from_image(&image);

        let signals = analyze(&sample).unwrap();
        assert!((signals.full_warm_ratio - 9.0 / 81.0).abs() < 1e-9);
        assert_eq!(signals.central_warm_ratio, 1.0);
        assert!(signals.color_variance > 0.0);
    }

    #[test]
    fn test_analyze_fails_on_degenerate_frame() {
        // 2x2 frame has a zero-size central region
        let sample = uniform_sample(2, 2, (200, 100, 50));
        assert_eq!(analyze(&sample), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_classify_touching_rule_wins_over_near() {
        let thresholds = SkinToneThresholds::default();
        // rule 2's full-ratio clause would also match here
        assert_eq!(
            classify(&signals(0.85, 0.0, 1000.0), &thresholds),
            Status::TouchingLens
        );
    }

    #[test]
    fn test_classify_high_variance_blocks_touching() {
        let thresholds = SkinToneThresholds::default();
        assert_eq!(
            classify(&signals(0.85, 0.9, 5000.0), &thresholds),
            Status::NearDetected
        );
    }

    #[test]
    fn test_classify_near_by_full_ratio() {
        let thresholds = SkinToneThresholds::default();
        assert_eq!(
            classify(&signals(0.3, 0.0, 5000.0), &thresholds),
            Status::NearDetected
        );
    }

    #[test]
    fn test_classify_near_by_central_ratio() {
        let thresholds = SkinToneThresholds::default();
        assert_eq!(
            classify(&signals(0.1, 0.06, 5000.0), &thresholds),
            Status::NearDetected
        );
    }

    #[test]
    fn test_classify_clear() {
        let thresholds = SkinToneThresholds::default();
        assert_eq!(
            classify(&signals(0.05, 0.01, 5000.0), &thresholds),
            Status::Clear
        );
    }

    #[test]
    fn test_classify_thresholds_are_strict() {
        let thresholds = SkinToneThresholds::default();
        // exactly at the far threshold is not above it
        assert_eq!(
            classify(&signals(0.2, 0.05, 5000.0), &thresholds),
            Status::Clear
        );
    }

    #[test]
    fn test_overlay_rect_centers_native_region_in_viewport() {
        let rect = overlay_rect((640, 480), (320, 240));
        assert_eq!(rect.width, 213.0);
        assert_eq!(rect.height, 160.0);
        assert_eq!(rect.left, (320.0 - 213.0) / 2.0);
        assert_eq!(rect.top, (240.0 - 160.0) / 2.0);
    }
}

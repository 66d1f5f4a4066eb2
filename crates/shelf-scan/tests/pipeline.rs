use approx::assert_abs_diff_eq;
use image::{Rgb, RgbImage};
use shelf_scan::{
    analyze_bytes, analyze_rgb, analyze_rgb_with_observer, assign_linen_types, AnalyzeError,
    FillStatus, GridSpec, LinenLayout, PipelineObserver, ShelfConfig,
};

fn square_config(grid: GridSpec) -> ShelfConfig {
    // Inset quad inside a 100x100 source image.
    let mut cfg = ShelfConfig::with_corners([
        [10.0, 10.0],
        [89.0, 10.0],
        [89.0, 89.0],
        [10.0, 89.0],
    ]);
    cfg.output_size = [80, 80];
    cfg.grid = grid;
    cfg
}

#[test]
fn all_white_shelf_is_full_everywhere() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let analysis = analyze_rgb(&img, &cfg).expect("analyze");
    assert_eq!(analysis.sections.len(), 4);
    for section in &analysis.sections {
        assert_abs_diff_eq!(section.white_ratio, 1.0);
        assert_eq!(section.status, FillStatus::Full);
    }
}

#[test]
fn all_black_shelf_is_empty_everywhere() {
    let img = RgbImage::from_pixel(100, 100, Rgb([10, 10, 10]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let analysis = analyze_rgb(&img, &cfg).expect("analyze");
    assert!(analysis.mask.data.iter().all(|&v| v == 0));
    for section in &analysis.sections {
        assert_abs_diff_eq!(section.white_ratio, 0.0);
        assert_eq!(section.status, FillStatus::Empty);
    }
}

#[test]
fn section_coordinates_are_unique_and_row_major() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 4, cols: 4 });

    let analysis = analyze_rgb(&img, &cfg).expect("analyze");
    assert_eq!(analysis.sections.len(), 16);

    let mut seen = std::collections::HashSet::new();
    for (i, section) in analysis.sections.iter().enumerate() {
        assert!(section.row < 4 && section.col < 4);
        assert!(seen.insert((section.row, section.col)));
        assert_eq!(i as u32, section.row * 4 + section.col);
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    // Half linen, half dark background.
    let mut img = RgbImage::from_pixel(100, 100, Rgb([35, 30, 28]));
    for y in 0..50 {
        for x in 0..100 {
            img.put_pixel(x, y, Rgb([248, 246, 240]));
        }
    }
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let a = analyze_rgb(&img, &cfg).expect("first run");
    let b = analyze_rgb(&img, &cfg).expect("second run");

    assert_eq!(a.mask, b.mask);
    assert_eq!(a.masked_gray, b.masked_gray);
    assert_eq!(a.texture, b.texture);
    assert_eq!(a.sections, b.sections);
}

#[test]
fn texture_histogram_is_well_formed() {
    let mut img = RgbImage::from_pixel(100, 100, Rgb([240, 240, 236]));
    for y in (0..100).step_by(7) {
        for x in 0..100 {
            img.put_pixel(x, y, Rgb([60, 55, 50]));
        }
    }
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let analysis = analyze_rgb(&img, &cfg).expect("analyze");
    assert_eq!(analysis.texture.bins.len(), 10);
    assert!(analysis.texture.bins.iter().all(|&b| b >= 0.0));
    assert_abs_diff_eq!(analysis.texture.sum(), 1.0, epsilon = 1e-4);
}

#[test]
fn analyze_bytes_round_trips_through_png() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode");

    let cfg = square_config(GridSpec { rows: 2, cols: 2 });
    let from_bytes = analyze_bytes(&bytes, &cfg).expect("analyze bytes");
    let from_image = analyze_rgb(&img, &cfg).expect("analyze image");
    assert_eq!(from_bytes.sections, from_image.sections);
}

#[test]
fn undecodable_bytes_fail_with_image_load() {
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });
    let err = analyze_bytes(b"not an image", &cfg).unwrap_err();
    assert!(matches!(err, AnalyzeError::ImageLoad(_)));
}

#[test]
fn collinear_calibration_fails_with_rectify_error() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let mut cfg = square_config(GridSpec { rows: 2, cols: 2 });
    cfg.corners = [[0.0, 0.0], [10.0, 10.0], [20.0, 20.0], [30.0, 30.0]];

    let err = analyze_rgb(&img, &cfg).unwrap_err();
    assert!(matches!(err, AnalyzeError::Rectify(_)));
}

#[test]
fn type_assignment_applies_after_analysis() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let mut analysis = analyze_rgb(&img, &cfg).expect("analyze");
    let layout = LinenLayout::from_row_major(cfg.grid, ["King", "Single", "Towel", "FaceTowel"])
        .expect("layout");
    assign_linen_types(&mut analysis.sections, &layout).expect("assign");

    assert_eq!(analysis.sections[0].linen_type.as_deref(), Some("King"));
    assert_eq!(analysis.sections[3].linen_type.as_deref(), Some("FaceTowel"));
}

#[test]
fn short_type_list_is_rejected_before_any_mutation() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });
    let analysis = analyze_rgb(&img, &cfg).expect("analyze");

    let err = LinenLayout::from_row_major(cfg.grid, ["King", "Single", "Towel"]).unwrap_err();
    assert!(matches!(
        err,
        shelf_scan::GridError::TypeCountMismatch {
            expected: 4,
            got: 3
        }
    ));
    assert!(analysis.sections.iter().all(|s| s.linen_type.is_none()));
}

#[test]
fn observer_sees_every_stage_in_pipeline_order() {
    #[derive(Default)]
    struct Recorder {
        stages: Vec<&'static str>,
    }

    impl PipelineObserver for Recorder {
        fn on_rectified(&mut self, _: &shelf_scan::core::RgbBuffer) {
            self.stages.push("rectified");
        }
        fn on_mask(&mut self, _: &shelf_scan::core::GrayImage) {
            self.stages.push("mask");
        }
        fn on_masked_gray(&mut self, _: &shelf_scan::core::GrayImage) {
            self.stages.push("masked_gray");
        }
        fn on_sections(&mut self, _: &[shelf_scan::Section]) {
            self.stages.push("sections");
        }
    }

    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let mut recorder = Recorder::default();
    analyze_rgb_with_observer(&img, &cfg, &mut recorder).expect("analyze");
    assert_eq!(
        recorder.stages,
        vec!["rectified", "mask", "masked_gray", "sections"]
    );
}

#[test]
fn annotated_overlay_matches_canvas_size() {
    let img = RgbImage::from_pixel(100, 100, Rgb([250, 250, 250]));
    let cfg = square_config(GridSpec { rows: 2, cols: 2 });

    let analysis = analyze_rgb(&img, &cfg).expect("analyze");
    let annotated = analysis.annotated(&shelf_scan::OverlayStyle::default(), None);
    assert_eq!((annotated.width(), annotated.height()), (80, 80));
}

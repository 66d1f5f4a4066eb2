use crate::config::ShelfConfig;
use image::RgbImage;
use log::debug;
use shelf_scan_core::{
    gray_from_rgb, rectify_quad_rgb, GrayImage, RectifyError, RgbBuffer, RgbView,
};
use shelf_scan_grid::{analyze_sections, GridError, GridSpec, Section};
use shelf_scan_segment::{segment_linen, TextureHistogram};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors terminating an analysis run. None of these are retried: the
/// inputs are deterministic, so retrying without changing them cannot
/// succeed. No partial results are returned on failure.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("failed to decode source image")]
    ImageLoad(#[from] image::ImageError),

    #[error(transparent)]
    Rectify(#[from] RectifyError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Hook invoked after each pipeline stage, e.g. to dump intermediate
/// images while tuning a calibration. All methods default to no-ops so the
/// pipeline runs headless.
pub trait PipelineObserver {
    fn on_rectified(&mut self, _rectified: &RgbBuffer) {}
    fn on_mask(&mut self, _mask: &GrayImage) {}
    fn on_masked_gray(&mut self, _masked: &GrayImage) {}
    fn on_sections(&mut self, _sections: &[Section]) {}
}

impl PipelineObserver for () {}

/// Everything an analysis run produces. Nothing here is persisted by this
/// crate; storage and reporting belong to the caller.
#[derive(Clone, Debug)]
pub struct ShelfAnalysis {
    pub rectified: RgbBuffer,
    pub mask: GrayImage,
    pub masked_gray: GrayImage,
    pub texture: TextureHistogram,
    pub sections: Vec<Section>,
    pub grid: GridSpec,
    pub white_threshold: u8,
}

/// Borrow an `image::RgbImage` as the lightweight core view type.
pub fn rgb_view(img: &RgbImage) -> RgbView<'_> {
    RgbView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Copy a core RGB buffer into an `image::RgbImage`, e.g. for encoding or
/// overlay rendering.
pub fn rgb_image_from_buffer(buf: &RgbBuffer) -> RgbImage {
    RgbImage::from_raw(buf.width as u32, buf.height as u32, buf.data.clone())
        .expect("buffer length matches its dimensions")
}

/// Run the full pipeline on an in-memory image: rectify the shelf region,
/// segment linen by color, classify every grid slot.
pub fn analyze_rgb(img: &RgbImage, cfg: &ShelfConfig) -> Result<ShelfAnalysis, AnalyzeError> {
    analyze_rgb_with_observer(img, cfg, &mut ())
}

/// [`analyze_rgb`] with a stage observer.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, cfg, observer),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn analyze_rgb_with_observer(
    img: &RgbImage,
    cfg: &ShelfConfig,
    observer: &mut dyn PipelineObserver,
) -> Result<ShelfAnalysis, AnalyzeError> {
    let [out_w, out_h] = cfg.output_size;
    let rectified = rectify_quad_rgb(
        &rgb_view(img),
        &cfg.corner_points(),
        out_w as usize,
        out_h as usize,
    )?;
    observer.on_rectified(&rectified);

    let seg = segment_linen(&rectified.as_view(), &cfg.color_range);
    observer.on_mask(&seg.mask);

    let masked_gray = gray_from_rgb(&seg.masked.as_view());
    observer.on_masked_gray(&masked_gray);

    let sections = analyze_sections(&masked_gray.as_view(), &cfg.grid, cfg.white_threshold)?;
    observer.on_sections(&sections);

    debug!(
        "analyzed {} sections on a {}x{} canvas",
        sections.len(),
        out_w,
        out_h
    );

    Ok(ShelfAnalysis {
        rectified,
        mask: seg.mask,
        masked_gray,
        texture: seg.texture,
        sections,
        grid: cfg.grid,
        white_threshold: cfg.white_threshold,
    })
}

/// Decode raw image bytes and run [`analyze_rgb`].
pub fn analyze_bytes(bytes: &[u8], cfg: &ShelfConfig) -> Result<ShelfAnalysis, AnalyzeError> {
    let img = image::load_from_memory(bytes)?.to_rgb8();
    analyze_rgb(&img, cfg)
}

impl ShelfAnalysis {
    /// Render the review overlay for this run.
    pub fn annotated(
        &self,
        style: &shelf_scan_grid::OverlayStyle,
        font: Option<&shelf_scan_grid::OverlayFont>,
    ) -> RgbImage {
        let rect = rgb_image_from_buffer(&self.rectified);
        shelf_scan_grid::render_overlay(&rect, &self.sections, &self.grid, style, font)
    }
}

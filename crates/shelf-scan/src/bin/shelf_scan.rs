use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use shelf_scan::{
    analyze_bytes, assign_linen_types, rgb_image_from_buffer, section_summary, LinenLayout,
    OverlayFont, OverlayStyle, ShelfConfig, ShelfReport,
};

/// Analyze a linen shelf photograph and write the annotated review image.
#[derive(Parser, Debug)]
#[command(name = "shelf-scan", version)]
struct Cli {
    /// JSON calibration file (corners, canvas size, color range, grid,
    /// white threshold).
    config: PathBuf,

    /// Source photograph.
    image: PathBuf,

    /// JSON array of linen-type labels in row-major order, one per grid
    /// slot.
    #[arg(long)]
    types: Option<PathBuf>,

    /// TTF/OTF font for overlay labels; without it the overlay carries
    /// only the grid geometry.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output path for the annotated image.
    #[arg(long, default_value = "annotated.png")]
    annotated: PathBuf,

    /// Also write the bare rectified image.
    #[arg(long)]
    rectified: Option<PathBuf>,

    /// Write a JSON report (sections + texture histogram).
    #[arg(long)]
    report: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    shelf_scan::core::init_with_level(cli.log_level)?;

    let cfg: ShelfConfig = serde_json::from_str(&fs::read_to_string(&cli.config)?)?;
    let bytes = fs::read(&cli.image)?;

    let mut analysis = analyze_bytes(&bytes, &cfg)?;
    info!(
        "analyzed {} into {} sections",
        cli.image.display(),
        analysis.sections.len()
    );

    if let Some(types_path) = &cli.types {
        let labels: Vec<String> = serde_json::from_str(&fs::read_to_string(types_path)?)?;
        let layout = LinenLayout::from_row_major(cfg.grid, labels)?;
        assign_linen_types(&mut analysis.sections, &layout)?;
    }

    let font = match &cli.font {
        Some(path) => Some(OverlayFont::from_bytes(fs::read(path)?)?),
        None => None,
    };

    let annotated = analysis.annotated(&OverlayStyle::default(), font.as_ref());
    annotated.save(&cli.annotated)?;
    info!("wrote annotated image to {}", cli.annotated.display());

    if let Some(path) = &cli.rectified {
        rgb_image_from_buffer(&analysis.rectified).save(path)?;
        info!("wrote rectified image to {}", path.display());
    }

    for section in &analysis.sections {
        println!("{}", section_summary(section));
    }

    if let Some(path) = &cli.report {
        let report = ShelfReport::from_analysis(&analysis);
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("wrote report JSON to {}", path.display());
    }

    Ok(())
}

mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spread_layout::constants::px_to_mm;
use spread_layout::{RegionId, SpreadLayout, SpreadSpec};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spreadt", about = "Cover spread layout tools", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the regions, guides and labels of a spread
    Layout {
        #[command(flatten)]
        spec: SpecArgs,

        /// Emit the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recompute a spread after a spine change and report how each region moved
    Resize {
        #[command(flatten)]
        spec: SpecArgs,

        /// New spine width in mm
        #[arg(long, conflicts_with = "pages")]
        spine_mm: Option<f64>,

        /// New page count (spine width is derived with --caliper-mm)
        #[arg(long)]
        pages: Option<u32>,

        /// Paper thickness per leaf in mm
        #[arg(long, default_value = "0.1")]
        caliper_mm: f64,

        /// Emit the before/after report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the region containing a pixel x coordinate
    Locate {
        #[command(flatten)]
        spec: SpecArgs,

        /// X coordinate in pixels
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
    },

    /// Write a spec file to start from
    InitSpec {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        spec: SpecArgs,
    },
}

#[derive(Args)]
struct SpecArgs {
    /// Spec JSON file; overrides all dimension flags
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Cover size preset
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Cover panel width in mm
    #[arg(long, default_value = "140")]
    cover_width: f64,

    /// Cover height in mm
    #[arg(long, default_value = "210")]
    cover_height: f64,

    /// Spine width in mm
    #[arg(long, default_value = "10")]
    spine: f64,

    /// Wing (flap) width in mm; enables wings
    #[arg(long)]
    wing: Option<f64>,

    /// Bleed in mm
    #[arg(long, default_value = "3")]
    cut: f64,

    /// Safe margin in mm
    #[arg(long, default_value = "5")]
    safe: f64,

    /// Resolution in dots per inch
    #[arg(long, default_value = "150")]
    dpi: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    A5,
    B5,
    /// 6in x 9in
    Trade,
    /// 4.25in x 6.87in
    Pocket,
}

impl PresetArg {
    fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PresetArg::A5 => (148.0, 210.0),
            PresetArg::B5 => (176.0, 250.0),
            PresetArg::Trade => (152.4, 228.6),
            PresetArg::Pocket => (107.95, 174.5),
        }
    }
}

impl SpecArgs {
    async fn resolve(&self) -> Result<SpreadSpec> {
        if let Some(path) = &self.spec {
            return SpreadSpec::load(path)
                .await
                .with_context(|| format!("loading spec {}", path.display()));
        }

        let (cover_width, cover_height) = self
            .preset
            .map_or((self.cover_width, self.cover_height), PresetArg::dimensions_mm);
        let mut spec = SpreadSpec::new(cover_width, cover_height, self.spine)
            .with_margins(self.cut, self.safe)
            .with_dpi(self.dpi);
        if let Some(wing) = self.wing {
            spec = spec.with_wings(wing);
        }
        spec.validate()?;
        Ok(spec)
    }
}

#[derive(Serialize)]
struct RegionDelta {
    region: RegionId,
    left_delta_px: f64,
    width_delta_px: f64,
}

#[derive(Serialize)]
struct ResizeReport<'a> {
    spine_delta_px: f64,
    regions: Vec<RegionDelta>,
    before: &'a SpreadLayout,
    after: &'a SpreadLayout,
}

fn print_layout(layout: &SpreadLayout) {
    println!("Spread Layout:");
    println!(
        "  Size: {} x {} ({:.2}px x {:.2}px @ {}dpi)",
        spread_layout::layout::format_mm(layout.width_mm),
        spread_layout::layout::format_mm(layout.height_mm),
        layout.width_px,
        layout.height_px,
        layout.dpi
    );
    println!("  Regions:");
    for region in &layout.regions {
        println!(
            "    {:<12} left {:>9.2}px  width {:>9.2}px  ({})",
            region.id,
            region.position.left,
            region.position.width,
            spread_layout::layout::format_mm(region.width_mm)
        );
    }
    println!("  Guides:");
    for guide in &layout.guides {
        println!("    {:?} at {:.2}px", guide.kind, guide.x);
    }
    for (name, rect) in [("Trim", layout.trim_bounds()), ("Bleed", layout.bleed_bounds)] {
        println!(
            "  {} box: x {:.2}..{:.2}px, y {:.2}, {:.2}px x {:.2}px",
            name,
            rect.x,
            rect.right(),
            rect.y,
            rect.width,
            rect.height
        );
    }
}

fn region_deltas(before: &SpreadLayout, after: &SpreadLayout) -> Vec<RegionDelta> {
    after
        .regions
        .iter()
        .filter_map(|region| {
            let old = before.region(region.id)?;
            Some(RegionDelta {
                region: region.id,
                left_delta_px: region.position.left - old.position.left,
                width_delta_px: region.position.width - old.position.width,
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Layout { spec, json } => {
            let spec = spec.resolve().await?;
            let layout = spread_layout::compute_layout(&spec)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print_layout(&layout);
            }
        }

        Commands::Resize {
            spec,
            spine_mm,
            pages,
            caliper_mm,
            json,
        } => {
            let spec = spec.resolve().await?;
            let new_spec = match (spine_mm, pages) {
                (Some(mm), _) => spec.with_spine_width_mm(mm),
                (None, Some(pages)) => spec.with_page_count(pages, caliper_mm),
                (None, None) => bail!("resize needs --spine-mm or --pages"),
            };

            let before = spread_layout::compute_layout(&spec)?;
            let after = spread_layout::compute_resized_layout(&before, &new_spec)?;
            let report = ResizeReport {
                spine_delta_px: after.spine_delta_px(&before),
                regions: region_deltas(&before, &after),
                before: &before,
                after: &after,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Spine: {} → {} ({:+.2}px)",
                    spread_layout::layout::format_mm(spec.spine_width_mm),
                    spread_layout::layout::format_mm(new_spec.spine_width_mm),
                    report.spine_delta_px
                );
                for delta in &report.regions {
                    println!(
                        "  {:<12} left {:+9.2}px  width {:+9.2}px",
                        delta.region, delta.left_delta_px, delta.width_delta_px
                    );
                }
                println!();
                print_layout(&after);
            }
        }

        Commands::Locate { spec, x } => {
            let spec = spec.resolve().await?;
            let layout = spread_layout::compute_layout(&spec)?;
            match spread_layout::resolve_region_at_x(&layout, x) {
                Some(region) => {
                    let offset = x - region.reference_x();
                    println!(
                        "{} (offset {:.2}px / {} from its reference edge)",
                        region.id,
                        offset,
                        spread_layout::layout::format_mm(px_to_mm(offset, layout.dpi))
                    );
                }
                None => println!("outside all regions"),
            }
        }

        Commands::InitSpec { output, spec } => {
            let spec = spec.resolve().await?;
            spec.save(&output).await?;
            println!("Spec → {}", output.display());
        }
    }

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atlas_recolor::models::{RecolorConfig, CONFIG_ENV_VAR};
use atlas_recolor::services::{RunOptions, RunReport};

#[derive(Parser)]
#[command(name = "atlas-recolor", version)]
#[command(about = "Generate a key-color mask from a texture atlas and recolor the masked region")]
#[command(after_help = "\
Examples:

  1. Generate the purple mask (once):
     atlas-recolor atlas.png Textures/Masks/purple_mask.png -t 0.12

  2. Generate the mask plus a red preview:
     atlas-recolor atlas.png Textures/Masks/purple_mask.png -t 0.12 --paint \"#FF0000\" --overlay-output preview_red.png

  3. Repaint using an existing mask:
     atlas-recolor atlas.png output.png --apply-mask Textures/Masks/purple_mask.png --paint \"#00FF00\"")]
struct Cli {
    /// Input image (atlas)
    input: PathBuf,

    /// Output path (mask, or repainted atlas with --apply-mask)
    output: PathBuf,

    /// Match tolerance, 0..1 [default: 0.12]
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Paint color as hex (e.g. "#FF0000") or a preset name from the config
    #[arg(short, long)]
    paint: Option<String>,

    /// Output path for a repainted preview (needs --paint)
    #[arg(short, long)]
    overlay_output: Option<PathBuf>,

    /// Apply an existing mask instead of generating one (needs --paint)
    #[arg(short = 'm', long)]
    apply_mask: Option<PathBuf>,

    /// Key color to detect, as hex [default: #A349A4]
    #[arg(short, long)]
    key_color: Option<String>,

    /// Repaint mode: replace, multiply or preserve-luminance [default: replace]
    #[arg(short, long)]
    blend: Option<String>,

    /// YAML config file (also read from ATLAS_RECOLOR_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Losslessly re-compress written PNGs
    #[arg(long)]
    optimize: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atlas_recolor=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
    let config = RecolorConfig::load_optional(config_path.as_deref())?;

    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        tolerance: cli.tolerance,
        paint: cli.paint,
        overlay_output: cli.overlay_output,
        apply_mask: cli.apply_mask,
        key_color: cli.key_color,
        blend: cli.blend,
        optimize: cli.optimize,
    };
    let (service, plan) = options.resolve(&config)?;
    let report = service.run(&plan)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &RunReport) {
    match report {
        RunReport::Generate(r) => {
            println!("Mask saved to {}", r.mask_output.display());
            println!(
                "  Matched pixels: {} of {} ({:.2}%)",
                r.scan.matched, r.scan.total, r.scan.coverage_percent
            );
            println!(
                "  Distance min: {:.4}, max: {:.4}",
                r.scan.min_distance, r.scan.max_distance
            );
            if r.warning.is_some() {
                println!("  Warning: no matching pixels. Try a larger --tolerance or check --key-color");
            }
            if let Some(o) = &r.overlay {
                println!("Overlay saved to {}", o.output.display());
                println!(
                    "  Painted pixels: {} of {} ({:.2}%)",
                    o.scan.matched, o.scan.total, o.scan.coverage_percent
                );
            }
        }
        RunReport::Apply(r) => {
            println!("Repainted atlas saved to {}", r.output.display());
            println!(
                "  Repainted pixels: {} of {} ({:.2}%)",
                r.painted, r.total, r.coverage_percent
            );
        }
    }
}

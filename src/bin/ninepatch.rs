use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ninepatch::{NinePatch, NinePatchConfig, StretchAxis};

#[derive(Parser, Debug)]
#[command(name = "ninepatch", version)]
struct Cli {
    /// JSON config with `scan` and `project` sections.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a nine-patch border and report ticks, content area and grid.
    Inspect(InspectArgs),
    /// Pad a plain image into a nine-patch with a uniform stretch region.
    Convert(ConvertArgs),
    /// Print destination rectangles for a target size.
    Project(ProjectArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input nine-patch PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input plain PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output nine-patch PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Input nine-patch PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target width in pixels.
    #[arg(long)]
    width: u32,

    /// Target height in pixels.
    #[arg(long)]
    height: u32,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NinePatchConfig::from_path(path)?,
        None => NinePatchConfig::default(),
    };
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args, &config),
        Command::Convert(args) => cmd_convert(args),
        Command::Project(args) => cmd_project(args, &config),
    }
}

fn load(path: &Path, config: &NinePatchConfig) -> anyhow::Result<NinePatch> {
    let image = ninepatch::open_image(path)
        .with_context(|| format!("load nine-patch '{}'", path.display()))?;
    Ok(NinePatch::from_image_with(
        image,
        Some(path.display().to_string()),
        config,
    ))
}

fn cmd_inspect(args: InspectArgs, config: &NinePatchConfig) -> anyhow::Result<()> {
    let np = load(&args.in_path, config)?;
    let bad = np.bad_patches()?;

    if args.json {
        let doc = serde_json::json!({
            "name": np.name(),
            "model": np.model(),
            "content_area": np.content_area(),
            "bad_corners": np.report().bad_corners,
            "stray_pixels": np.report().stray_pixels,
            "grid": np.chunk_grid(),
            "bad_patches": bad,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let model = np.model();
    println!("{}", np.display_name());
    println!("  size:     {}x{}", model.width(), model.height());
    println!("  valid:    {}", model.is_valid());
    for p in np.report().normalized_pixels() {
        println!("  cleared:  ({}, {})", p.x, p.y);
    }
    println!("  stretch x: {:?}", model.horizontal_ticks());
    println!("  stretch y: {:?}", model.vertical_ticks());
    println!("  content:  {}", np.content_area());

    let grid = np.chunk_grid();
    println!("  grid:     {} rows x {} columns", grid.row_count(), grid.column_count());
    for row in grid.chunks() {
        let line: Vec<String> = row
            .iter()
            .map(|c| {
                let tag = match c.stretch_axis {
                    StretchAxis::None => "-",
                    StretchAxis::Horizontal => "H",
                    StretchAxis::Vertical => "V",
                    StretchAxis::Both => "B",
                };
                let flag = if c.corrupt { "!" } else { "" };
                format!("{tag}{flag}{}", c.rect)
            })
            .collect();
        println!("    {}", line.join("  "));
    }
    for cell in bad {
        println!("  bad patch: row {} col {}", cell.row, cell.col);
    }
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let plain = ninepatch::open_image(&args.in_path)
        .with_context(|| format!("load image '{}'", args.in_path.display()))?;
    let padded = ninepatch::convert_to_nine_patch(&plain)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    ninepatch::save_png(&padded, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_project(args: ProjectArgs, config: &NinePatchConfig) -> anyhow::Result<()> {
    let np = load(&args.in_path, config)?;
    let projections = np.projections(args.width, args.height, config.project)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
        return Ok(());
    }

    if projections.target_too_small() {
        eprintln!(
            "warning: {}x{} is smaller than the fixed content of {}",
            args.width,
            args.height,
            np.display_name()
        );
    }
    for (r, row) in projections.cells.iter().enumerate() {
        for (c, p) in row.iter().enumerate() {
            let [sx, _, _, sy, _, _] = p.transform().as_coeffs();
            println!(
                "[{r},{c}] {} -> {}  scale {sx:.3}x{sy:.3}",
                p.source_rect, p.dest_rect
            );
        }
    }
    Ok(())
}

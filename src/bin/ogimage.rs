use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "ogimage", version)]
struct Cli {
    /// Log pipeline stages at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one image.
    Render(RenderArgs),
    /// Render every job of a JSON manifest in parallel.
    Batch(BatchArgs),
    /// Print which font files resolve and their digests.
    Fonts(FontArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Generator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font directory (overrides config).
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Font family file prefix (overrides config).
    #[arg(long)]
    family: Option<String>,

    /// Font file extension (overrides config).
    #[arg(long)]
    format: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Request JSON; when absent the request is built from flags.
    #[arg(long = "in", conflicts_with = "title")]
    in_path: Option<PathBuf>,

    /// Page title.
    #[arg(long)]
    title: Option<String>,

    /// Page description.
    #[arg(long)]
    description: Option<String>,

    /// Page kind.
    #[arg(long, value_enum, default_value_t = KindChoice::Website)]
    kind: KindChoice,

    /// Display date (articles only).
    #[arg(long)]
    date: Option<String>,

    /// Tag; repeat for several.
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the layout tree as JSON to stderr.
    #[arg(long)]
    dump_tree: bool,

    /// Also write the intermediate SVG document here.
    #[arg(long)]
    dump_svg: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// JSON array of `{ "out": path, "request": {...} }`.
    #[arg(long)]
    manifest: PathBuf,
}

#[derive(Parser, Debug)]
struct FontArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Website,
    Article,
}

#[derive(Debug, serde::Deserialize)]
struct BatchJob {
    out: PathBuf,
    request: ogimage::ImageRequest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<ogimage::GeneratorConfig> {
    let mut cfg = match &args.config {
        Some(path) => ogimage::GeneratorConfig::from_json_file(path)?,
        None => ogimage::GeneratorConfig::default(),
    };
    if let Some(dir) = &args.fonts_dir {
        cfg.fonts.dir = dir.clone();
    }
    if let Some(family) = &args.family {
        cfg.fonts.family = family.clone();
    }
    if let Some(format) = &args.format {
        cfg.fonts.format = format.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn read_request_json(path: &Path) -> anyhow::Result<ogimage::ImageRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let req: ogimage::ImageRequest = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse request JSON '{}'", path.display()))?;
    Ok(req)
}

fn request_from_flags(args: &RenderArgs) -> anyhow::Result<ogimage::ImageRequest> {
    let title = args
        .title
        .clone()
        .context("either --in or --title is required")?;
    Ok(ogimage::ImageRequest {
        title,
        description: args.description.clone(),
        kind: match args.kind {
            KindChoice::Website => ogimage::PageKind::Website,
            KindChoice::Article => ogimage::PageKind::Article,
        },
        date: args.date.clone(),
        tags: args.tags.clone(),
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let request = match &args.in_path {
        Some(path) => read_request_json(path)?,
        None => request_from_flags(&args)?,
    };
    let generator = ogimage::ImageGenerator::new(&cfg)?;

    if args.dump_tree {
        let tree = generator.layout(&request)?;
        eprintln!("{}", serde_json::to_string_pretty(&tree)?);
    }
    if let Some(svg_path) = &args.dump_svg {
        let doc = generator.document(&request)?;
        write_output(svg_path, doc.as_str().as_bytes())?;
        eprintln!("wrote {}", svg_path.display());
    }

    let png = generator.generate_image(&request)?;
    write_output(&args.out, &png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let f = File::open(&args.manifest)
        .with_context(|| format!("open manifest '{}'", args.manifest.display()))?;
    let jobs: Vec<BatchJob> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse manifest JSON '{}'", args.manifest.display()))?;

    let base = args.manifest.parent().unwrap_or_else(|| Path::new("."));
    let generator = Arc::new(ogimage::ImageGenerator::new(&cfg)?);

    jobs.par_iter()
        .map(|job| {
            let png = generator
                .generate_image(&job.request)
                .with_context(|| format!("render '{}'", job.request.title))?;
            let out = base.join(&job.out);
            write_output(&out, &png)?;
            eprintln!("wrote {}", out.display());
            Ok(())
        })
        .collect::<anyhow::Result<Vec<()>>>()?;

    eprintln!("rendered {} image(s)", jobs.len());
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let source = cfg.fonts.source();
    let generator = ogimage::ImageGenerator::new(&cfg)?;
    let fonts = generator.fonts()?;

    let db = ogimage::raster::font_database(&fonts);
    eprintln!("font diagnostics:");
    for weight in ogimage::FontWeight::ALL {
        eprintln!("  {} ({}):", weight.file_suffix(), weight.numeric());
        eprintln!("    path:   {}", source.path_for(weight).display());
        eprintln!("    sha256: {}", fonts.sha256_hex(weight));
    }
    for face in db.faces() {
        let family = face
            .families
            .first()
            .map(|(name, _)| name.as_str())
            .unwrap_or("<unnamed>");
        eprintln!("  face: {family} weight {}", face.weight.0);
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "epistemic-canvas", version)]
struct Cli {
    /// Log pipeline diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a request as an SVG document.
    Render(RenderArgs),
    /// Render a request and rasterize it to a PNG.
    Png(PngArgs),
    /// Print every stage descriptor as JSON.
    Stages,
    /// Print the SVG fragment for a single stage.
    Fragment(FragmentArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input render request JSON. Omit to render every stage with defaults.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the structured response (without the document) as JSON.
    #[arg(long)]
    payload: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Input render request JSON. Omit to render every stage with defaults.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixels per SVG user unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct FragmentArgs {
    /// Stage name, e.g. `propagation`.
    stage: String,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,
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
        Command::Png(args) => cmd_png(args),
        Command::Stages => cmd_stages(),
        Command::Fragment(args) => cmd_fragment(args),
    }
}

fn read_request(path: Option<&Path>) -> anyhow::Result<epistemic_canvas::RenderRequest> {
    let Some(path) = path else {
        return Ok(epistemic_canvas::RenderRequest::default());
    };
    let req = epistemic_canvas::RenderRequest::from_path(path)
        .with_context(|| format!("read render request '{}'", path.display()))?;
    Ok(req)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let req = read_request(args.in_path.as_deref())?;
    let res = epistemic_canvas::render(&req)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, &res.document)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(path) = args.payload {
        let mut value = serde_json::to_value(&res).context("serialize render payload")?;
        if let Some(obj) = value.as_object_mut() {
            obj.remove("document");
        }
        let text = serde_json::to_string_pretty(&value).context("format render payload")?;
        ensure_parent(&path)?;
        std::fs::write(&path, text)
            .with_context(|| format!("write payload '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let req = read_request(args.in_path.as_deref())?;
    let res = epistemic_canvas::render(&req)?;
    let img = epistemic_canvas::rasterize(&res.document, args.scale)?;
    epistemic_canvas::write_png(&img, &args.out)?;
    eprintln!("wrote {} ({}x{})", args.out.display(), img.width, img.height);
    Ok(())
}

fn cmd_stages() -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(epistemic_canvas::all_stages())
        .context("serialize stage descriptors")?;
    println!("{text}");
    Ok(())
}

fn cmd_fragment(args: FragmentArgs) -> anyhow::Result<()> {
    let canvas = epistemic_canvas::Canvas::new(args.width, args.height)?;
    let frag = epistemic_canvas::render_stage_fragment(&args.stage, canvas)?;
    print!("{frag}");
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenefader", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Blend a fade request and print the resulting sink calls as JSON.
    Fade(FadeArgs),
    /// Validate a fade request against a scene store without blending.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct FadeArgs {
    /// Scene store JSON (`{"scene.id": [snapshot, ..]}`).
    #[arg(long)]
    scenes: PathBuf,

    /// Fade request JSON (`{"scenes": [..], "position": 0.5}`).
    #[arg(long)]
    request: PathBuf,

    /// Optional settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the request position.
    #[arg(long)]
    position: Option<f64>,

    /// Caller context id forwarded to the sink.
    #[arg(long, default_value = "cli")]
    context: String,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Scene store JSON.
    #[arg(long)]
    scenes: PathBuf,

    /// Fade request JSON.
    #[arg(long)]
    request: PathBuf,

    /// Optional settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fade(args) => cmd_fade(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn load_fader(
    scenes: &Path,
    config: Option<&Path>,
) -> anyhow::Result<scenefader::SceneFader<scenefader::SceneStore>> {
    let store = scenefader::SceneStore::from_json_file(scenes)
        .with_context(|| format!("load scenes '{}'", scenes.display()))?;
    let settings = match config {
        Some(path) => scenefader::FaderSettings::from_json_file(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => scenefader::FaderSettings::default(),
    };
    Ok(scenefader::SceneFader::new(store, settings)?)
}

fn read_request(path: &Path) -> anyhow::Result<scenefader::FadeRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read request '{}'", path.display()))?;
    Ok(scenefader::FadeRequest::from_json_str(&json)?)
}

fn cmd_fade(args: FadeArgs) -> anyhow::Result<()> {
    let fader = load_fader(&args.scenes, args.config.as_deref())?;
    let mut request = read_request(&args.request)?;
    if let Some(p) = args.position {
        request.position = Some(p);
    }

    let mut sink = scenefader::RecordingSink::default();
    let ctx = scenefader::CallContext::new(args.context);
    fader.turn_on(&request, &ctx, &mut sink)?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&sink.calls)?
    } else {
        serde_json::to_string(&sink.calls)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let fader = load_fader(&args.scenes, args.config.as_deref())?;
    let request = read_request(&args.request)?;
    let outcome = fader.plan(&request)?;

    match outcome {
        scenefader::BlendOutcome::Exact { scene, .. } => {
            eprintln!("ok: activates {scene}");
        }
        scenefader::BlendOutcome::Blended { bracket, snapshot } => {
            eprintln!(
                "ok: blends {} -> {} at {:.3} ({} entities)",
                bracket.lower.scene,
                bracket.upper.scene,
                bracket.factor,
                snapshot.len()
            );
        }
    }
    Ok(())
}

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use printable::{
    config::{Config, OutputConfig, OutputOverrides, DEFAULT_CONFIG_FILE},
    dispatch,
    error::Result,
    format::Format,
    registry::RendererRegistry,
};
use std::{fs::File, path::PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "prnt", version, about = "Render a payload as text, HTML or JSON")]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a payload and write it to a file.
    Render(RenderArgs),
    /// List the formats known to the renderer registry.
    Formats,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Configuration file; flags given on the command line take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The payload to render.
    #[arg(long)]
    payload: Option<String>,

    /// The format the item is declared with.
    #[arg(long)]
    declared: Option<Format>,

    /// The format to render as. Defaults to the declared format.
    #[arg(long)]
    format: Option<String>,

    /// Output file. Defaults to `out.<extension>`.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Render through the renderer registry instead of the classic item.
    #[arg(long)]
    redesigned: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Render(args) => render(args),
        Command::Formats => {
            for name in RendererRegistry::with_defaults().names() {
                println!("{name}");
            }

            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &RenderArgs) -> Result<Config> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    match &args.config {
        Some(path) => Config::load(path),
        None if default_path.is_file() => {
            tracing::info!(path = %default_path.display(), "using config file");
            Config::load(default_path)
        }
        None => Ok(Config::default()),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let mut config = load_config(&args)?;

    config.output.merge(OutputOverrides {
        payload: args.payload,
        declared: args.declared,
        format: args.format,
        path: args.output,
        redesigned: args.redesigned,
    });

    let path = write_output(&config.output)?;
    tracing::info!(path = %path.display(), format = config.output.format(), "rendered output");

    Ok(())
}

/// Renders the configured item into its output file, returning the file's path.
fn write_output(output: &OutputConfig) -> Result<PathBuf> {
    let data = output.data()?;
    let path = output.path();
    let requested = output.format();

    // NOTE: Validate the requested format before the output file gets created.
    let registry = RendererRegistry::with_defaults();
    let format = if output.redesigned {
        if !registry.contains(requested) {
            anyhow::bail!("no renderer registered for format '{requested}'");
        }
        None
    } else {
        Some(requested.parse::<Format>()?)
    };

    // NOTE: The file is opened before rendering on purpose: the caller owns the sink, so a
    // mismatch leaves an empty (truncated) file behind.
    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let result = match format {
        Some(format) => dispatch::write_as(&mut file, &data, format),
        None => dispatch::write_with(&mut file, &registry, requested, data.payload()),
    };
    result.with_context(|| format!("Failed to render into {}", path.display()))?;

    Ok(path)
}

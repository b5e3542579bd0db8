mod client;
mod report;

use anyhow::{Context, Result};
use baseline_core::{DEFAULT_API_BASE, LinkTarget, resolve_feature_status};
use clap::{Parser, ValueEnum};
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};

use client::HttpStatusSource;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary for a terminal
    Console,
    /// Resolved view as pretty JSON
    Json,
    /// Server-rendered widget markup
    Html,
}

#[derive(Debug, Parser)]
#[command(name = "baseline-status", version)]
#[command(about = "Look up the Baseline browser support status of a web platform feature")]
struct Args {
    /// Feature identifier from the web-features catalog (e.g. `grid`)
    feature_id: String,

    /// Status API base URL; the feature id is appended as-is
    #[arg(long, default_value = DEFAULT_API_BASE)]
    base_url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Open documentation and upvote links in a new tab (HTML output)
    #[arg(long)]
    new_tab: bool,

    /// Optional path to write the output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            let mut out = stdout().lock();
            out.write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            out.flush().context("Failed to flush stdout")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let source = HttpStatusSource::new(args.base_url.as_str())
        .context("Failed to build HTTP client")?;
    let payload = resolve_feature_status(&source, &args.feature_id).await;
    log::info!(
        "{} resolved to tier {}",
        args.feature_id,
        payload.tier()
    );

    let rendered = match args.format {
        OutputFormat::Console => report::console(&args.feature_id, &payload),
        OutputFormat::Json => report::json(&args.feature_id, &payload)?,
        OutputFormat::Html => {
            let feature_id = args.feature_id.clone();
            let target = LinkTarget::from_new_tab(args.new_tab);
            tokio::task::spawn_blocking(move || report::html(&feature_id, payload, target))
                .await
                .context("HTML rendering task failed")?
        }
    };

    write_output(args.output.as_deref(), &rendered)
}

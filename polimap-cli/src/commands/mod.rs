pub mod analyze;
pub mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use tracing::info;

use polimap_core::Viewport;
use polimap_core::config::PolimapConfig;
use polimap_core::fetch::ReportClient;
use polimap_core::mock;
use polimap_core::pipeline::{AnalysisView, analyze_report};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a subject and print the graph and layout as JSON
    Analyze(analyze::AnalyzeArgs),
    /// Analyze a subject and write a static SVG diagram
    Render(render::RenderArgs),
}

pub async fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Analyze(args) => analyze::run(args).await,
        Command::Render(args) => render::run(args).await,
    }
}

/// Inputs shared by every view-producing command.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Subject to analyze (politician name)
    pub query: String,

    /// Use the built-in fixture report instead of the analysis service
    #[arg(long)]
    pub mock: bool,

    /// Viewport width in pixels
    #[arg(long, default_value = "1000")]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    pub height: f64,

    /// Path to polimap.toml (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Resolve a report (remote or fixture) and compose the analysis view.
/// Returns the loaded configuration alongside the view so commands can
/// reuse it (e.g. for layout parameters) without reloading.
pub async fn load_view(args: &ViewArgs) -> anyhow::Result<(AnalysisView, PolimapConfig)> {
    let config = PolimapConfig::load_or_default(args.config.as_deref())
        .context("Cannot load configuration")?;

    let report = if args.mock || config.fetch.endpoint.is_empty() {
        if !args.mock {
            info!("no endpoint configured; using built-in fixture report");
        }
        mock::mock_report()
    } else {
        let client = ReportClient::new(&config.fetch)?;
        client
            .fetch_latest(&args.query)
            .await?
            .context("Report request was superseded")?
    };

    let viewport = Viewport {
        width: args.width,
        height: args.height,
    };
    let view = analyze_report(&report, &args.query, viewport, &config.layout.params());
    Ok((view, config))
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use polimap_core::render::svg::render_svg;

use super::ViewArgs;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output SVG path
    #[arg(short, long, default_value = "polimap.svg")]
    pub out: PathBuf,
}

pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    let (view, config) = super::load_view(&args.view).await?;

    let svg = render_svg(&view, &config.layout.params());
    std::fs::write(&args.out, svg)
        .with_context(|| format!("Cannot write SVG to {}", args.out.display()))?;

    info!(path = %args.out.display(), nodes = view.graph.nodes.len(), "diagram written");
    println!("Wrote {}", args.out.display());
    Ok(())
}

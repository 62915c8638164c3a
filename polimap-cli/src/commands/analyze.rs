use anyhow::Context;
use clap::Args;

use super::ViewArgs;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let (view, _config) = super::load_view(&args.view).await?;

    let json = if args.compact {
        serde_json::to_string(&view)
    } else {
        serde_json::to_string_pretty(&view)
    }
    .context("Cannot serialize analysis view")?;

    println!("{json}");
    Ok(())
}

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pawfeed::app::AppContext;
use pawfeed::cli::{commands, Cli, Commands};
use pawfeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Stderr only: the TUI owns stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            pawfeed::tui::run(&ctx).await?;
        }
        Commands::Cat { count } => {
            commands::fetch_cat_facts(&ctx, count).await?;
        }
        Commands::Dog { output } => {
            commands::fetch_dog_image(&ctx, output.as_deref()).await?;
        }
    }

    Ok(())
}

// Pasta League entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Initialize tracing (log to file, not terminal)
// 3. Load config, seeding it from defaults/ on first run
// 4. Build the row source for the configured transport
// 5. Either print the tables once, or run the dashboard

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pasta_app::{build_source, config, load_league, RowSource};
use pasta_tui::cli::Cli;
use pasta_tui::{print, tui};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let base_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve working directory")?,
    };

    init_tracing(&base_dir)?;
    info!("Pasta League starting up in {}", base_dir.display());

    for copied in config::ensure_config_files(&base_dir).context("failed to seed configuration")? {
        info!("Created {} from defaults", copied.display());
    }
    let mut config = config::load_config_from(&base_dir).context("failed to load configuration")?;
    cli.apply(&mut config);
    info!(
        "Config loaded: league={}, transport={:?}, top_n={}",
        config.league.name, config.source.transport, config.display.top_n
    );

    let source: Arc<dyn RowSource> =
        Arc::from(build_source(&config.source).context("failed to set up data source")?);

    if cli.print {
        let view = load_league(source.as_ref(), &config.league.name, &config.display)
            .await
            .context("failed to load league")?;
        print!("{}", print::render_report(&view));
        return Ok(());
    }

    tui::run(source, config.league.name.clone(), config.display.clone()).await?;

    info!("Pasta League shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing(base_dir: &Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = base_dir.join("logs");
    std::fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let log_file = std::fs::File::create(log_dir.join("pasta-league.log"))
        .context("failed to create log file")?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pasta=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

// Transfer report entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; the report files are the only output)
// 2. Resolve the base directory (first argument, or the working directory)
// 3. Load config/transfer-stats.toml, or the built-in defaults when absent
// 4. Run the report pipeline

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use transfer_stats::config;
use transfer_stats::run;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("transfer-stats starting up");

    let base_dir = match std::env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("failed to resolve working directory")?,
    };

    let config = config::load_config(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: {} clubs requested, position '{}'",
        config.clubs.len(),
        config.position
    );

    let summary = run::run(&config)?;
    info!(
        "Done: {} transfers, {} clubs, {} leagues, {} leagues with position '{}'",
        summary.transfers, summary.clubs, summary.leagues, summary.position_leagues, config.position
    );

    Ok(())
}

/// Initialize tracing to stderr without colours.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("transfer_stats=info,transfer_stats_core=info,warn")
        }))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

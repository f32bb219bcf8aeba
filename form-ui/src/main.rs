use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{debug, info};

use form_ui::{
    Screen, app,
    config::{AppConfig, Overrides},
    logging,
    view::TerminalAlert,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal details form.
///
/// Collects name, email, mobile, date of birth, gender, ZIP, color and notes,
/// validates them as you type, and reveals an encoded copy on submit.
/// Commands are read one per line from stdin; type `help` for the list.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Postal-code table (.csv or .json). Defaults to the bundled table.
    #[arg(long)]
    zips: Option<PathBuf>,

    /// Color table (.json). Defaults to the bundled table.
    #[arg(long)]
    colors: Option<PathBuf>,

    /// Simulated submit delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Reject edits while a submit is pending.
    #[arg(long, default_value_t = false)]
    lock_while_loading: bool,

    /// Log level or EnvFilter directive. RUST_LOG takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?.apply(Overrides {
        zip_file: cli.zips,
        color_file: cli.colors,
        submit_delay_ms: cli.delay_ms,
        lock_while_loading: cli.lock_while_loading,
        log_level: cli.log_level,
        log_file: cli.log_file,
    });

    logging::init_logging(&config.log_level);
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
        info!(path = %path.display(), "file logging enabled");
    }
    debug!(?config, "configuration loaded");

    let controller = app::build_controller(&config, Box::new(TerminalAlert))?;
    let mut screen = Screen::new(controller);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    app::run(&mut screen, stdin, &mut stdout)
        .await
        .context("form session failed")?;

    info!("form closed");
    Ok(())
}

/*
[INPUT]:  CLI arguments, optional YAML configuration file, TASKLIST_* environment
[OUTPUT]: Interactive task list in the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tasklist_tui::{AppConfig, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui_with_log};

#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about = "Terminal task list")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides log.level from the configuration
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    /// Validate the configuration, print it, and exit
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::load(args.config_path.as_deref())
        .context("load config")?
        .with_log_level(args.log_level)
        .context("apply --log-level")?;

    if args.dry_run {
        init_stderr_tracing(&config.log.level)?;
        info!(
            config_path = ?args.config_path,
            "dry-run requested; configuration validated"
        );
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let log_buffer = LogBuffer::handle(config.log.buffer_capacity);
    init_buffered_tracing(&config.log.level, log_buffer.clone())?;
    info!(
        tick_interval_ms = config.ui.tick_interval_ms,
        show_logs = config.ui.show_logs,
        "starting tasklist"
    );

    run_tui_with_log(config, log_buffer).await
}

fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

// The alternate screen owns stdout, so log lines go to the in-app panel.
fn init_buffered_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

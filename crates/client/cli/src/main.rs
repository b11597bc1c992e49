//! Auto-equip session simulator.
//!
//! Replays a scripted session against an authoritative state and a mirrored
//! view, then prints a JSON report to stdout. Logs go to stderr and,
//! optionally, to a per-session log file.
mod config;
mod report;
mod script;
mod simulator;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use config::CliConfig;
use equip_content::{ConfigLoader, ContentFactory, ItemLoader};
use equip_core::AutoEquipConfig;
use equip_runtime::ItemOracleImpl;
use script::ScriptLoader;
use simulator::Simulator;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(&config)?;

    let (items, auto_equip) = load_content(&config)?;
    let script_path = config.script_file(std::env::args_os().nth(1).map(PathBuf::from));
    let script = ScriptLoader::load(&script_path)?;
    tracing::info!(
        script = %script_path.display(),
        steps = script.steps.len(),
        "replaying session"
    );

    let mut simulator = Simulator::new(items, auto_equip, &script)?;
    let report = simulator.run(&script.steps)?;

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    if report.diverged {
        anyhow::bail!("mirrored view diverged from the authoritative state");
    }
    Ok(())
}

/// Loads the item database and the auto-equip configuration.
fn load_content(config: &CliConfig) -> Result<(Arc<ItemOracleImpl>, AutoEquipConfig)> {
    let factory = ContentFactory::new(&config.data_dir);

    let definitions = match &config.items_path {
        Some(path) => ItemLoader::load(path)?,
        None => factory.load_items()?,
    };
    let auto_equip = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };

    tracing::info!(
        items = definitions.len(),
        enabled = auto_equip.enabled,
        allow_override = auto_equip.allow_override,
        "content loaded from {}",
        factory.data_dir().display()
    );

    Ok((
        Arc::new(ItemOracleImpl::from_definitions(definitions)),
        auto_equip,
    ))
}

/// Setup logging to stderr and, when configured, to a session log file.
///
/// The returned guard flushes the file writer on drop and must be held until
/// exit.
fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard, log_file) = match config.file_log_dir() {
        Some(log_dir) => {
            let session_id = config.session_id.clone().unwrap_or_else(|| {
                let timestamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_secs())
                    .unwrap_or_default();
                format!("session_{}", timestamp)
            });
            let session_log_dir = log_dir.join(&session_id);
            std::fs::create_dir_all(&session_log_dir).with_context(|| {
                format!("Failed to create log directory {}", session_log_dir.display())
            })?;

            let file_appender = tracing_appender::rolling::never(&session_log_dir, "autoequip.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (
                Some(layer),
                Some(guard),
                Some(session_log_dir.join("autoequip.log")),
            )
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(path) = log_file {
        tracing::info!("Log file: {}", path.display());
    }

    Ok(guard)
}

//! Logging facade demo binary.
//!
//! Loads a logging configuration, installs it as the process-wide default and
//! emits records through it. With `--watch`, keeps running and swaps the
//! default whenever the config file changes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use logging_facade::config::{builder, loader::load_config, watcher::ConfigWatcher, LoggingConfig};
use logging_facade::{registry, DefaultLogger, Logger, Severity};

#[derive(Parser)]
#[command(name = "logging-facade")]
#[command(about = "Emit records through a configured default logger", long_about = None)]
struct Cli {
    /// TOML logging configuration. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep running and reload the config file on change.
    #[arg(short, long, requires = "config")]
    watch: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log one record through the default logger
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Severity,

        #[arg(short, long, default_value = "app")]
        tag: String,

        message: String,
    },
    /// Print the effective configuration and default logger
    Show,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggingConfig::default(),
    };

    // Initialize tracing subscriber. RUST_LOG wins over the config and is
    // never reloaded.
    let from_env = EnvFilter::try_from_default_env().ok();
    let follows_config = from_env.is_none();
    let (env_filter, filter_handle) = reload::Layer::new(
        from_env.unwrap_or_else(|| config.tracing.env_filter.as_str().into()),
    );
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.tracing.ansi))
        .init();

    builder::install(&config);

    match cli.command {
        Some(Commands::Emit { level, tag, message }) => {
            DefaultLogger.log(level, &tag, &message, None);
        }
        Some(Commands::Show) => {
            println!("{}", toml::to_string_pretty(&config)?);
            println!("# default logger: {:?}", registry::default_logger());
        }
        None => {}
    }

    if cli.watch {
        if let Some(path) = &cli.config {
            watch(path.clone(), follows_config.then_some(filter_handle)).await?;
        }
    }

    Ok(())
}

async fn watch(
    path: PathBuf,
    filter: Option<reload::Handle<EnvFilter, Registry>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _handle = watcher.run()?;

    loop {
        tokio::select! {
            Some(new_config) = updates.recv() => {
                builder::install(&new_config);
                if let Some(handle) = &filter {
                    if let Err(e) = builder::reload_env_filter(handle, &new_config) {
                        tracing::warn!(error = %e, "Keeping previous tracing filter");
                    }
                }
                tracing::info!(path = ?path, "Logging configuration reloaded");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown complete");
                return Ok(());
            }
        }
    }
}

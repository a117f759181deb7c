use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diaglog::config::{load_config, LoggerConfig};
use diaglog::{LogLevel, LoggerService, TaskQueue, VerbosityMode};

#[derive(Parser)]
#[command(name = "diaglog-demo")]
#[command(about = "Feed a burst of entries through the logger service", long_about = None)]
struct Cli {
    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of entries to log.
    #[arg(short, long, default_value_t = 25)]
    entries: u32,

    /// Delay between entries in milliseconds.
    #[arg(short, long, default_value_t = 40)]
    interval_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diaglog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig {
            mode: VerbosityMode::Detailed,
            log_to_console: false,
            ..LoggerConfig::default()
        },
    };

    tracing::info!(
        max_entries = config.max_entries,
        notify_interval_ms = config.notify_interval_ms,
        "Configuration loaded"
    );

    let service = LoggerService::new(config);
    let _subscription = service.subscribe(|entries| {
        tracing::info!(buffered = entries.len(), "Subscriber notified");
    });

    let queue = TaskQueue::new();
    let ui = service.for_source("ui");
    for i in 0..cli.entries {
        let worker = service.for_source("worker");
        queue.enqueue(async move {
            worker.log_with(
                LogLevel::Debug,
                format!("unit {i} done"),
                serde_json::json!({ "unit": i }),
            );
            Ok(())
        });
        ui.info(format!("queued unit {i}"));
        tokio::time::sleep(Duration::from_millis(cli.interval_ms)).await;
    }

    while queue.is_processing() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    // Give the trailing notification a chance to land.
    tokio::time::sleep(Duration::from_millis(service.config().notify_interval_ms + 50)).await;

    let logs = service.get_logs();
    tracing::info!(total = logs.len(), "Demo complete");

    Ok(())
}

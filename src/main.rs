use std::io;

use fleet_records::api::Intake;
use fleet_records::config::{Config, LogFormat};
use fleet_records::error::AppError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .with_writer(io::stderr);

    match config.log_format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }

    tracing::info!("intake started");

    let mut intake = Intake::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = intake.run(stdin.lock(), stdout.lock())?;

    tracing::info!(
        processed = summary.processed,
        rejected = summary.rejected,
        "intake finished"
    );

    if config.print_metrics {
        let body = intake.metrics().encode()?;
        eprint!("{body}");
    }

    Ok(())
}

mod application;
mod config;
mod infrastructure;

use anyhow::Result;
use config::get_config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use application::{job::plan_jobs, service::SortService};
use infrastructure::{console::ConsoleReport, file_source::FileLineSource};

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse()?)
        .from_env_lossy();

    // Standard output carries the sorted report only.
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = get_config()?;
    setup_tracing(&config.logging.level)?;
    tracing::info!("Configuration loaded successfully");
    tracing::debug!(?config, "Full application configuration");

    let jobs = plan_jobs(&config.driver);
    let source = FileLineSource::new(&config);
    let report = ConsoleReport::new(std::io::BufWriter::new(std::io::stdout().lock()));

    let mut service = SortService::new(source, report, config.driver.timing);

    if let Err(e) = service.run(&jobs) {
        tracing::error!("Application finished with an error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}

use std::fs::File;
use std::io::{self, BufReader};

use team_registry::config::RegistryConfig;
use team_registry::script::run_script;
use team_registry::Registry;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables
    dotenv::dotenv().ok();
    let config = RegistryConfig::from_env();

    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let mut registry = Registry::new();
    let stdout = io::stdout();

    let summary = match &config.script_path {
        Some(path) => {
            tracing::info!("Running script {}", path.display());
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("Failed to open script {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            run_script(&mut registry, BufReader::new(file), stdout.lock(), config.fail_fast)
        }
        None => {
            tracing::info!("Reading operations from stdin");
            run_script(&mut registry, io::stdin().lock(), stdout.lock(), config.fail_fast)
        }
    }
    .expect("Failed to run script");

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Script finished"
    );

    if summary.aborted {
        std::process::exit(1);
    }
}

//! swagger-scout command-line entry point.

use std::process::ExitCode;

use clap::Parser;

use swagger_scout::cli::App;
use swagger_scout::config::Config;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let app = App::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(app.log_filter(&config))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Loaded configuration: {:?}", config);

    app.run(&config)
}

use clap::Parser;
use cli::App;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

const LOG_ENV: &str = "LOOKPATH_LOG";

fn main() -> anyhow::Result<ExitCode> {
    let app = App::parse();

    let filter = if app.debug {
        EnvFilter::new("lookpath=trace,lookpath_cli=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    app.run()
}

use clap::Parser;
use drum_spooling_toolbox::{app, config, ui_cli::Cli};
use tracing_subscriber::EnvFilter;

/// Entry point: sets up logging, loads settings and runs one command.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    app::run(cli, &cfg)
}

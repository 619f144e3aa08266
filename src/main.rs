//! patrolprep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use patrolprep::cli::{dispatch, Cli};
use patrolprep::ui::Ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN (status lines come from the ui module)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("patrolprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("patrolprep=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("patrolprep starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let ui = Ui::new(cli.quiet);

    match dispatch(&cli, &ui) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            ui.step_failed(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

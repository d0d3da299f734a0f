//! uart-replay - push recorded test vectors to a UART device under test.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod ports;
mod record;
mod replayer;
mod settings;

use std::io::IsTerminal;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::{Mode, ServiceContext};
use crate::error::ReplayError;
use crate::settings::ReplaySettings;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}

fn run(cli: &Cli) -> Result<(), ReplayError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ReplayError::Config)?;
    let settings = ReplaySettings::resolve(cli, &config).map_err(ReplayError::InvalidArgument)?;

    let mode = Mode::from_env();
    tracing::debug!(?mode, ?settings, config = %config_path.display(), "starting");

    let (mut ctx, recording_session) = ServiceContext::for_mode(&mode, &settings.serial)?;
    let result = replayer::run(&settings, ctx.sink.as_mut());
    // The session needs the only reference to the recorder.
    drop(ctx);

    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Capture saved: {}", path.display()),
            Err(e) if matches!(mode, Mode::Capturing(_)) && result.is_ok() => {
                return Err(ReplayError::Capture(e));
            }
            Err(e) => tracing::warn!("failed to save capture: {e}"),
        }
    }

    let summary = result?;
    tracing::info!(
        ascii_frames = summary.ascii.frames,
        hex_frames = summary.hex.frames,
        bytes = summary.bytes(),
        "replay complete"
    );
    eprintln!("Sent {} frames ({} bytes)", summary.frames(), summary.bytes());
    Ok(())
}

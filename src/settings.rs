//! Run settings resolved from CLI flags, config file, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::live::serial::SerialSettings;
use crate::cli::Cli;
use crate::config::Config;

/// Everything a replay run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySettings {
    /// Device connection parameters.
    pub serial: SerialSettings,
    /// ASCII input file, replayed first.
    pub ascii_file: PathBuf,
    /// Hex input file, replayed second.
    pub hex_file: PathBuf,
}

impl ReplaySettings {
    /// Merge CLI flags over the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the baud rate or timeout is unusable.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, String> {
        let device = cli.device.clone().unwrap_or_else(|| config.device());
        let baud_rate = validate_baud_rate(cli.baud.unwrap_or(config.serial.baud_rate))?;
        let timeout = validate_timeout(cli.timeout.unwrap_or(config.serial.timeout_secs))?;

        Ok(Self {
            serial: SerialSettings { device, baud_rate, timeout },
            ascii_file: cli
                .ascii_file
                .as_ref()
                .map_or_else(|| config.files.ascii.clone(), PathBuf::from),
            hex_file: cli.hex_file.as_ref().map_or_else(|| config.files.hex.clone(), PathBuf::from),
        })
    }
}

/// Validate the baud rate.
///
/// # Errors
///
/// Returns an error if the rate is zero.
pub fn validate_baud_rate(baud_rate: u32) -> Result<u32, String> {
    if baud_rate == 0 {
        Err("Baud rate must be greater than 0".to_string())
    } else {
        Ok(baud_rate)
    }
}

/// Validate a timeout given in seconds.
///
/// # Errors
///
/// Returns an error if the value is zero, negative, or not finite.
pub fn validate_timeout(secs: f64) -> Result<Duration, String> {
    match Duration::try_from_secs_f64(secs) {
        Ok(timeout) if !timeout.is_zero() => Ok(timeout),
        _ => Err(format!("Unsupported timeout '{secs}'. Must be a positive number of seconds")),
    }
}

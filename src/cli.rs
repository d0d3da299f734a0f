//! CLI argument parsing with clap.

use clap::Parser;

/// Replay recorded ASCII and hex test vectors to a UART device under test.
///
/// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "uart-replay", version, about)]
pub struct Cli {
    /// Serial device path (e.g. /dev/ttyUSB1, COM3).
    #[arg(short, long)]
    pub device: Option<String>,

    /// Baud rate.
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Write timeout in seconds.
    #[arg(short, long)]
    pub timeout: Option<f64>,

    /// File of ASCII records, one message per line.
    #[arg(short, long)]
    pub ascii_file: Option<String>,

    /// File of hex records, one space-separated frame per line.
    #[arg(short = 'x', long)]
    pub hex_file: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output (log every frame).
    #[arg(short, long)]
    pub verbose: bool,
}

//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Serial device configuration.
    #[serde(default)]
    pub serial: SerialConfig,

    /// Input file locations.
    #[serde(default)]
    pub files: FilesConfig,
}

/// Serial device configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Device path.
    pub device: String,
    /// Baud rate.
    pub baud_rate: u32,
    /// Timeout in seconds.
    pub timeout_secs: f64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { device: "/dev/ttyUSB1".to_string(), baud_rate: 9600, timeout_secs: 1.0 }
    }
}

/// Input file locations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// ASCII records, one message per line.
    pub ascii: PathBuf,
    /// Hex records, one frame per line.
    pub hex: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { ascii: PathBuf::from("ascii_data.txt"), hex: PathBuf::from("bytes_data.txt") }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the serial device path, preferring environment variable.
    #[must_use]
    pub fn device(&self) -> String {
        std::env::var("UART_REPLAY_DEVICE").unwrap_or_else(|_| self.serial.device.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `UART_REPLAY_CONFIG` environment variable
/// 3. `~/.config/uart-replay/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("UART_REPLAY_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/uart-replay/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/uart-replay/config.toml")
    } else {
        PathBuf::from("uart-replay.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.serial.device, "/dev/ttyUSB1");
        assert_eq!(config.serial.baud_rate, 9600);
        assert!((config.serial.timeout_secs - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.files.ascii, PathBuf::from("ascii_data.txt"));
        assert_eq!(config.files.hex, PathBuf::from("bytes_data.txt"));
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.serial.baud_rate, 9600);
    }

    #[test]
    fn load_valid_toml() {
        let dir = std::env::temp_dir().join("uart_replay_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            r#"
[serial]
device = "/dev/ttyACM0"
baud_rate = 115200
timeout_secs = 0.5

[files]
ascii = "vectors/ascii.txt"
hex = "vectors/frames.txt"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.serial.device, "/dev/ttyACM0");
        assert_eq!(config.serial.baud_rate, 115_200);
        assert!((config.serial.timeout_secs - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.files.ascii, PathBuf::from("vectors/ascii.txt"));
        assert_eq!(config.files.hex, PathBuf::from("vectors/frames.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let dir = std::env::temp_dir().join("uart_replay_config_partial_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[serial]\nbaud_rate = 19200\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.serial.baud_rate, 19200);
        assert_eq!(config.serial.device, "/dev/ttyUSB1");
        assert_eq!(config.files.hex, PathBuf::from("bytes_data.txt"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_invalid_toml() {
        let dir = std::env::temp_dir().join("uart_replay_config_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some("/tmp/my-config.toml"));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}

//! Serial port adapter for the `FrameSink` port.

use std::io::{ErrorKind, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::error::ReplayError;
use crate::ports::{Frame, FrameSink};

/// Connection parameters for the device under test.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialSettings {
    /// Device path (e.g. `/dev/ttyUSB1`, `COM3`).
    pub device: String,
    /// Baud rate.
    pub baud_rate: u32,
    /// Per-operation timeout.
    pub timeout: Duration,
}

/// Writes frames to a serial device opened 8N1 without flow control.
pub struct SerialPortSink {
    device: String,
    port: Box<dyn SerialPort>,
}

impl SerialPortSink {
    /// Open the device described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Connection`] if the device is missing, busy, or
    /// not accessible.
    pub fn open(settings: &SerialSettings) -> Result<Self, ReplayError> {
        let port = serialport::new(&settings.device, settings.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(settings.timeout)
            .open()
            .map_err(|source| ReplayError::Connection { device: settings.device.clone(), source })?;

        tracing::info!(
            device = %settings.device,
            baud_rate = settings.baud_rate,
            timeout_ms = settings.timeout.as_millis(),
            "serial device opened"
        );
        Ok(Self { device: settings.device.clone(), port })
    }
}

/// Classify a failed write: timeouts get their own variant.
fn write_error(device: &str, source: std::io::Error) -> ReplayError {
    if source.kind() == ErrorKind::TimedOut {
        ReplayError::WriteTimeout { device: device.to_string() }
    } else {
        ReplayError::Write { device: device.to_string(), source }
    }
}

impl FrameSink for SerialPortSink {
    fn target(&self) -> &str {
        &self.device
    }

    fn send(&mut self, frame: &Frame) -> Result<(), ReplayError> {
        if frame.data.is_empty() {
            return Ok(());
        }
        self.port.write_all(&frame.data).map_err(|e| write_error(&self.device, e))?;
        self.port.flush().map_err(|e| write_error(&self.device, e))
    }
}

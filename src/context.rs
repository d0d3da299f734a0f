//! Service context that owns the frame sink for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::capturing::frame_sink::CapturingFrameSink;
use crate::adapters::live::serial::{SerialPortSink, SerialSettings};
use crate::adapters::recording::frame_sink::RecordingFrameSink;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::ReplayError;
use crate::ports::FrameSink;

/// Where frames go for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Real device only.
    Live,
    /// Real device, plus a cassette under `.uart-replay/captures/`.
    Recording,
    /// Cassette at the given path, no device.
    Capturing(PathBuf),
}

impl Mode {
    /// Pick the mode from `UART_REPLAY_CAPTURE` and `UART_REPLAY_REC`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("UART_REPLAY_CAPTURE").ok().as_deref(),
            std::env::var("UART_REPLAY_REC").ok().as_deref(),
        )
    }

    fn from_vars(capture: Option<&str>, rec: Option<&str>) -> Self {
        match (capture, rec) {
            (Some(path), _) if !path.is_empty() => Self::Capturing(PathBuf::from(path)),
            (_, Some("true" | "1")) => Self::Recording,
            _ => Self::Live,
        }
    }
}

/// Owns the sink the replayer writes into.
pub struct ServiceContext {
    /// Frame sink port.
    pub sink: Box<dyn FrameSink>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// The [`ServiceContext`] that shares the recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Build the context for `mode`. Only `Capturing` comes back without
    /// an open device.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Connection`] if a device is needed and cannot
    /// be opened.
    pub fn for_mode(
        mode: &Mode,
        settings: &SerialSettings,
    ) -> Result<(Self, Option<RecordingSession>), ReplayError> {
        match mode {
            Mode::Live => Ok((Self::live(settings)?, None)),
            Mode::Recording => {
                let (ctx, session) = Self::recording(settings)?;
                Ok((ctx, Some(session)))
            }
            Mode::Capturing(path) => {
                let (ctx, session) = Self::capturing(path, settings);
                Ok((ctx, Some(session)))
            }
        }
    }

    /// Create a live context on the configured device.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be opened.
    pub fn live(settings: &SerialSettings) -> Result<Self, ReplayError> {
        Ok(Self { sink: Box::new(SerialPortSink::open(settings)?) })
    }

    /// Create a recording context that wraps the live device with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be opened.
    pub fn recording(settings: &SerialSettings) -> Result<(Self, RecordingSession), ReplayError> {
        let live_ctx = Self::live(settings)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".uart-replay/captures")
            .join(&timestamp)
            .join("session.cassette.yaml");
        let recorder = new_recorder(path, format!("{timestamp}-session"), settings);

        let sink = RecordingFrameSink::new(live_ctx.sink, Arc::clone(&recorder));
        Ok((Self { sink: Box::new(sink) }, RecordingSession { recorder }))
    }

    /// Create a capture-only context writing to `path`. No device is opened.
    #[must_use]
    pub fn capturing(path: &Path, settings: &SerialSettings) -> (Self, RecordingSession) {
        let name = path
            .file_stem()
            .map_or_else(|| "capture".to_string(), |s| s.to_string_lossy().into_owned());
        let recorder = new_recorder(path.to_path_buf(), name, settings);

        let sink = CapturingFrameSink::new(
            format!("capture:{}", path.display()),
            Arc::clone(&recorder),
        );
        (Self { sink: Box::new(sink) }, RecordingSession { recorder })
    }
}

fn new_recorder(
    path: PathBuf,
    name: String,
    settings: &SerialSettings,
) -> Arc<Mutex<CassetteRecorder>> {
    Arc::new(Mutex::new(CassetteRecorder::new(
        path,
        name,
        settings.device.as_str(),
        settings.baud_rate,
    )))
}

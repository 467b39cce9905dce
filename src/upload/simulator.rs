//! Simulated image upload.
//!
//! No bytes leave the process. A selected file walks `Idle -> Uploading(0..100) -> Done`
//! one tick at a time; whoever owns the timer calls [`UploadSimulator::tick`].

use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    config::UploadSettings,
    foundation::{
        error::{TicketError, TicketResult},
        math::Fnv1a64,
    },
};

/// A file picked or dropped by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name.
    pub name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap in-memory contents.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk.
    pub fn from_path(path: &Path) -> TicketResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self { name, bytes })
    }
}

/// Local, ephemeral reference to uploaded bytes.
///
/// The URI stays meaningful only while this value (or a clone) is alive; dropping the last
/// clone releases the bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalImageRef {
    uri: String,
    format: image::ImageFormat,
    bytes: Arc<[u8]>,
}

impl LocalImageRef {
    /// `blob:` URI written into the form.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Sniffed image format.
    pub fn format(&self) -> image::ImageFormat {
        self.format
    }

    /// Referenced bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Upload lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    /// Nothing selected, or the last upload was cancelled.
    #[default]
    Idle,
    /// Transfer in progress, percent complete.
    Uploading {
        /// Percent complete, `0..100`.
        progress: u8,
    },
    /// Transfer finished.
    Done {
        /// Reference to the uploaded bytes.
        reference: LocalImageRef,
    },
}

/// Tick-driven fake uploader. Only the most recent file is tracked.
#[derive(Debug)]
pub struct UploadSimulator {
    settings: UploadSettings,
    state: UploadState,
    pending: Option<(SelectedFile, image::ImageFormat)>,
    generation: u64,
}

impl UploadSimulator {
    /// Create an idle simulator. Fails when `settings` could never complete an upload.
    pub fn new(settings: UploadSettings) -> TicketResult<Self> {
        settings.validate()?;
        Ok(Self::with_settings(settings))
    }

    fn with_settings(settings: UploadSettings) -> Self {
        Self {
            settings,
            state: UploadState::Idle,
            pending: None,
            generation: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Pacing in use.
    pub fn settings(&self) -> UploadSettings {
        self.settings
    }

    /// `true` while a transfer is in flight.
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// Progress in percent; 100 once done, 0 when idle.
    pub fn progress(&self) -> u8 {
        match self.state {
            UploadState::Idle => 0,
            UploadState::Uploading { progress } => progress,
            UploadState::Done { .. } => 100,
        }
    }

    /// Reference produced by the last completed upload.
    pub fn reference(&self) -> Option<&LocalImageRef> {
        match &self.state {
            UploadState::Done { reference } => Some(reference),
            _ => None,
        }
    }

    /// Start uploading `file`, replacing whatever was selected before.
    ///
    /// Returns the first progress value (always 0). Files that are not a recognised image
    /// format are rejected and leave the current state untouched.
    pub fn select(&mut self, file: SelectedFile) -> TicketResult<u8> {
        let format = image::guess_format(&file.bytes).map_err(|_| {
            TicketError::validation(format!("'{}' is not a supported image file", file.name))
        })?;

        // The previous reference (if any) is dropped here.
        self.generation += 1;
        tracing::debug!(
            file = %file.name,
            format = ?format,
            generation = self.generation,
            "upload started"
        );
        self.pending = Some((file, format));
        self.state = UploadState::Uploading { progress: 0 };
        Ok(0)
    }

    /// Advance one timer tick. Returns the new progress, or `None` when no upload is in
    /// flight (the timer should be cleared).
    pub fn tick(&mut self) -> Option<u8> {
        let UploadState::Uploading { progress } = self.state else {
            return None;
        };
        let next = progress.saturating_add(self.settings.step_percent).min(100);
        if next < 100 {
            self.state = UploadState::Uploading { progress: next };
            return Some(next);
        }

        let Some((file, format)) = self.pending.take() else {
            self.state = UploadState::Idle;
            return None;
        };
        let reference = self.make_reference(file, format);
        tracing::debug!(uri = %reference.uri, "upload finished");
        self.state = UploadState::Done { reference };
        Some(100)
    }

    /// Abort an in-flight upload (component teardown). Completed uploads are kept.
    pub fn cancel(&mut self) {
        if self.is_uploading() {
            tracing::debug!(generation = self.generation, "upload cancelled");
            self.pending = None;
            self.state = UploadState::Idle;
        }
    }

    fn make_reference(&self, file: SelectedFile, format: image::ImageFormat) -> LocalImageRef {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(file.name.as_bytes());
        h.write_bytes(&file.bytes);
        h.write_u64(self.generation);
        LocalImageRef {
            uri: format!("blob:ticket-wizard/{:016x}", h.finish()),
            format,
            bytes: Arc::from(file.bytes),
        }
    }
}

impl Default for UploadSimulator {
    fn default() -> Self {
        Self::with_settings(UploadSettings::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/upload/simulator.rs"]
mod tests;

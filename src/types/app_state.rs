use egui::Vec2;
use std::path::PathBuf;

use super::{image::ImageData, preferences::UserPreferences};
use crate::image_processor::ImageProcessor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AppearanceMode {
    #[default]
    System,
    Light,
    Dark,
}

/// Deferred user actions, posted by the UI and drained once per frame.
#[derive(Debug, Clone)]
pub enum AppStateRequest {
    LoadImage { path: String },
    ExportImage { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Outcome of the last load/export, shown in the footer until replaced.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

pub struct AppState {
    // Session state: source pixels, source path, block size
    pub processor: ImageProcessor,

    // Display-side textures
    pub input_image: Option<ImageData>,
    pub preview_image: Option<ImageData>,
    pub needs_render: bool,

    // View settings
    pub zoom: f32,
    pub pan_offset: Vec2,
    pub preferences: UserPreferences,
    last_preferences: UserPreferences,

    // Feedback and deferred actions
    pub status: Option<StatusMessage>,
    pub pending_request: Option<AppStateRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        let preferences = UserPreferences::load();
        Self {
            processor: ImageProcessor::new(),

            input_image: None,
            preview_image: None,
            needs_render: false,

            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            preferences: preferences.clone(),
            last_preferences: preferences,

            status: None,
            pending_request: None,
        }
    }
}

impl AppState {
    pub fn set_status_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn set_status_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    /// File name of the current source, for the header label.
    pub fn input_file_name(&self) -> Option<String> {
        let path = self.processor.source_path()?;
        Some(
            std::path::Path::new(path)
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        )
    }

    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }

    pub fn check_and_save_preferences(&mut self) {
        if self.preferences != self.last_preferences {
            self.last_preferences = self.preferences.clone();
            if let Err(e) = self.preferences.save() {
                log::error!("failed to save preferences: {e}");
            }
        }
    }
}

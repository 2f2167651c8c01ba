pub mod app_state;
pub mod export;
pub mod image;
pub mod preferences;

// Re-export all public types for convenience
pub use app_state::{AppState, AppStateRequest, AppearanceMode, StatusKind, StatusMessage};
pub use export::ExportFormat;
pub use image::ImageData;
pub use preferences::UserPreferences;

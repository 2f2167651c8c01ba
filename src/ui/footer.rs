use super::styles;
use crate::types::{AppState, AppStateRequest, StatusKind};
use egui::Color32;
use rfd::FileDialog;
use std::path::Path;

pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
    let width = ui.available_width();

    ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
        draw_view_controls(ui, state);

        if width > 560.0 {
            ui.separator();
            ui.label("🖱 Drag to pan, scroll to zoom");
        }

        ui.separator();
        draw_status_message(ui, state);

        draw_export_controls(ui, state);
    });
}

fn draw_view_controls(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("🔄 Reset Zoom").clicked() {
        state.reset_view();
    }
    ui.label(format!("🔍 Zoom: {:.1}x", state.zoom));
}

fn draw_status_message(ui: &mut egui::Ui, state: &AppState) {
    if let Some(status) = &state.status {
        let color = match status.kind {
            StatusKind::Info => Color32::LIGHT_GREEN,
            StatusKind::Error => Color32::LIGHT_RED,
        };
        ui.label(egui::RichText::new(&status.text).color(color));
    }
}

fn draw_export_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.scope(|ui| {
            ui.style_mut().spacing.button_padding = egui::vec2(10.0, 4.0);
            styles::apply_accent_button_style(ui);

            let response = ui.add_enabled(
                state.preview_image.is_some(),
                egui::Button::new("💾 Save Pixel Art…"),
            );
            if response.clicked()
                && let Some(path) = show_save_dialog(state)
            {
                state.pending_request = Some(AppStateRequest::ExportImage { path });
            }
        });
    });
}

/// Save dialog pre-filled next to the source with a `_pixel_art` name. The
/// exporter resolves the actual format from whatever extension the user
/// leaves on the path.
fn show_save_dialog(state: &AppState) -> Option<std::path::PathBuf> {
    let source_path = state.processor.source_path()?;
    let source = Path::new(source_path);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());

    let mut dialog = FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .set_file_name(format!("{stem}_pixel_art.png"));

    if let Some(parent) = source.parent() {
        dialog = dialog.set_directory(parent);
    }

    dialog.save_file()
}

use crate::pixelate::{BLOCK_SIZE_MAX, BLOCK_SIZE_MIN};
use crate::types::{AppState, AppStateRequest, AppearanceMode};
use rfd::FileDialog;

/// Header row: file selection, the block-size slider and view toggles.
/// Returns true when the block size changed and the preview needs a rerender.
pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut block_size_changed = false;

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            draw_file_selection(ui, state);
            ui.separator();
            block_size_changed |= draw_block_size_slider(ui, state);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            draw_appearance_selector(ui, state);
            ui.separator();
            ui.checkbox(&mut state.preferences.show_original_image, "Original Image");
            ui.label("View:");
        });
    });

    block_size_changed
}

fn draw_file_selection(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("📁 Open Image…").clicked()
        && let Some(path) = FileDialog::new()
            .add_filter("Image files", &["png", "jpg", "jpeg", "bmp"])
            .pick_file()
    {
        state.pending_request = Some(AppStateRequest::LoadImage {
            path: path.display().to_string(),
        });
    }

    if let Some(name) = state.input_file_name() {
        ui.label(format!("📄 {name}"));
    }
}

fn draw_block_size_slider(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;

    ui.label("Block Size:");
    let mut block_size = state.processor.block_size();
    if ui
        .add(egui::Slider::new(
            &mut block_size,
            BLOCK_SIZE_MIN..=BLOCK_SIZE_MAX,
        ))
        .changed()
    {
        state.processor.set_block_size(block_size);
        changed = true;
    }

    changed
}

fn draw_appearance_selector(ui: &mut egui::Ui, state: &mut AppState) {
    let current = state.preferences.appearance_mode;
    egui::ComboBox::from_id_salt("appearance_mode")
        .selected_text(appearance_label(current))
        .width(80.0)
        .show_ui(ui, |ui| {
            for mode in [
                AppearanceMode::System,
                AppearanceMode::Light,
                AppearanceMode::Dark,
            ] {
                ui.selectable_value(
                    &mut state.preferences.appearance_mode,
                    mode,
                    appearance_label(mode),
                );
            }
        });
}

fn appearance_label(mode: AppearanceMode) -> &'static str {
    match mode {
        AppearanceMode::System => "System",
        AppearanceMode::Light => "Light",
        AppearanceMode::Dark => "Dark",
    }
}

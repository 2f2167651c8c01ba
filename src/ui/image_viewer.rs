use crate::types::{AppState, ImageData};
use egui::{Align2, Color32, FontId, Pos2, Rect, Vec2};

const HORIZONTAL_MARGIN: f32 = 4.0;

/// Side-by-side original / pixel-art panels with shared zoom and pan.
pub fn draw_image_view(ui: &mut egui::Ui, state: &mut AppState) {
    let available_size = ui.available_size();

    let zoom = state.zoom;
    let pan_offset = state.pan_offset;
    let mut pan_changed = Vec2::ZERO;

    let split_x = if state.preferences.show_original_image {
        (available_size.x - HORIZONTAL_MARGIN) / 2.0
    } else {
        available_size.x
    };

    ui.horizontal(|ui| {
        ui.style_mut().spacing.item_spacing = egui::vec2(HORIZONTAL_MARGIN, 0.0);

        if state.preferences.show_original_image {
            draw_image_panel(
                ui,
                split_x,
                available_size.y,
                &state.input_image,
                zoom,
                pan_offset,
                &mut pan_changed,
                "Original",
            );
        }

        draw_image_panel(
            ui,
            split_x,
            available_size.y,
            &state.preview_image,
            zoom,
            pan_offset,
            &mut pan_changed,
            "Pixel Art",
        );
    });

    if pan_changed != Vec2::ZERO {
        state.pan_offset += pan_changed;
    }

    // Scroll zooms both panels together
    if ui.ui_contains_pointer() {
        let scroll_delta = ui.ctx().input(|i| i.raw_scroll_delta.y);
        if scroll_delta != 0.0 {
            let zoom_factor = 1.0 + scroll_delta * 0.001;
            state.zoom = (state.zoom * zoom_factor).clamp(0.1, 20.0);
        }
    }
}

pub fn draw_main_content(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.heading("📁 Drop an image file here or use 'Open Image…'");
    });
}

fn draw_image_panel(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
    image_data: &Option<ImageData>,
    zoom: f32,
    pan_offset: Vec2,
    pan_changed: &mut Vec2,
    title: &str,
) {
    ui.allocate_ui_with_layout(
        Vec2::new(width, height),
        egui::Layout::top_down(egui::Align::Center),
        |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(width, height), egui::Sense::click_and_drag());

            let canvas = response.rect;
            painter.rect_filled(canvas, 0.0, Color32::from_gray(64));

            if let Some(image_data) = image_data {
                let image_rect =
                    calculate_image_rect(&canvas, image_data.size_vec2(), zoom, pan_offset);

                painter.image(
                    image_data.texture.id(),
                    image_rect,
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            draw_panel_title(ui, &painter, &canvas, title);

            if response.dragged() {
                *pan_changed += response.drag_delta();
            }
        },
    );
}

/// Fit the image into the panel (aspect preserved), then apply the shared
/// zoom and pan. Draw-time scaling only; the stored pixels are untouched.
fn calculate_image_rect(canvas: &Rect, original_size: Vec2, zoom: f32, pan_offset: Vec2) -> Rect {
    let fit_scale = (canvas.width() / original_size.x)
        .min(canvas.height() / original_size.y)
        .min(1.0);
    let display_size = original_size * fit_scale * zoom;
    let view_center = canvas.center() + pan_offset;
    Rect::from_center_size(view_center, display_size)
}

fn draw_panel_title(ui: &egui::Ui, painter: &egui::Painter, canvas: &Rect, title: &str) {
    if title.is_empty() {
        return;
    }

    let visuals = &ui.ctx().style().visuals;
    let window_color = visuals.window_fill();
    let bg_color = Color32::from_rgba_unmultiplied(
        window_color.r(),
        window_color.g(),
        window_color.b(),
        178,
    );
    let text_color = visuals.override_text_color.unwrap_or(visuals.text_color());

    let galley = ui.fonts(|f| f.layout_no_wrap(title.to_string(), FontId::default(), text_color));

    let pos = canvas.left_bottom() + Vec2::new(4.0, -20.0);
    let rect = Align2::LEFT_TOP.align_size_within_rect(
        galley.size() + egui::vec2(4.0, 2.0),
        Rect::from_min_size(pos - egui::vec2(2.0, 1.0), galley.size() + egui::vec2(4.0, 2.0)),
    );
    painter.rect_filled(rect, 0.0, bg_color);
    painter.galley(pos, galley, text_color);
}

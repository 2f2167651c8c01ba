use egui::Color32;

pub const COLOR_TINT: Color32 = Color32::from_rgb(99, 102, 241);
pub const COLOR_TINT_ACTIVE: Color32 = Color32::from_rgb(34, 211, 238);

pub fn init_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.slider_width = 200.0;
    ctx.set_style(style);
}

/// Scope-local accent styling for the primary action button.
pub fn apply_accent_button_style(ui: &mut egui::Ui) {
    let style = ui.style_mut();

    // Inactive state
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.inactive.weak_bg_fill = COLOR_TINT;

    // Hovered state
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.weak_bg_fill = COLOR_TINT;

    // Active state
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, COLOR_TINT_ACTIVE);
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.weak_bg_fill = COLOR_TINT;
}

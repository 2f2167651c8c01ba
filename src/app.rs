use crate::types::AppState;
use crate::types::ImageData;
use crate::types::app_state::{AppStateRequest, AppearanceMode};
use crate::ui::UI;
use eframe::egui;
use egui::Margin;

pub struct PixelArtApp {
    state: AppState,
}

impl Default for PixelArtApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl PixelArtApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::ui::styles::init_styles(&cc.egui_ctx);
        Self::default()
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped_files.is_empty()
            && let Some(dropped_file) = dropped_files.first()
            && let Some(path) = &dropped_file.path
        {
            self.state.pending_request = Some(AppStateRequest::LoadImage {
                path: path.display().to_string(),
            });
        }
    }

    fn load_image_file(&mut self, path: String, ctx: &egui::Context) {
        match self.state.processor.load_source(&path) {
            Ok(source) => {
                self.state.input_image = Some(ImageData::from_rgb(ctx, "input", source));
                self.state.preview_image = None;
                self.state.needs_render = true;
                self.state.status = None;
                self.state.reset_view();
            }
            Err(e) => {
                // The previous selection, if any, stays loaded and usable.
                log::error!("image load failed: {e}");
                self.state.set_status_error(e.to_string());
            }
        }
    }

    fn export_image_file(&mut self, path: std::path::PathBuf) {
        match self.state.processor.export(&path) {
            Ok(resolved) => {
                self.state
                    .set_status_info(format!("Saved to {}", resolved.display()));
            }
            Err(e) => {
                log::error!("export failed: {e}");
                self.state.set_status_error(e.to_string());
            }
        }
    }

    fn handle_requests(&mut self, ctx: &egui::Context) {
        if let Some(request) = self.state.pending_request.take() {
            match request {
                AppStateRequest::LoadImage { path } => {
                    self.load_image_file(path, ctx);
                }
                AppStateRequest::ExportImage { path } => {
                    self.export_image_file(path);
                }
            }
        }
    }

    /// Synchronous preview recompute, always from the stored full-resolution
    /// source. Slider events just mark the state dirty; the transform is
    /// fast enough to run inline every frame it is needed.
    fn update_preview(&mut self, ctx: &egui::Context) {
        if !self.state.needs_render {
            return;
        }
        self.state.needs_render = false;

        if let Some(preview) = self.state.processor.render() {
            self.state.preview_image = Some(ImageData::from_rgb(ctx, "preview", &preview));
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.state.preferences.appearance_mode {
            AppearanceMode::Dark => egui::Visuals::dark(),
            AppearanceMode::Light => egui::Visuals::light(),
            AppearanceMode::System => match ctx.system_theme() {
                Some(egui::Theme::Dark) => egui::Visuals::dark(),
                Some(egui::Theme::Light) => egui::Visuals::light(),
                None => egui::Visuals::dark(),
            },
        };
        if ctx.style().visuals != visuals {
            ctx.set_visuals(visuals);
        }
    }
}

impl eframe::App for PixelArtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        // Handle drag and drop first
        self.handle_dropped_files(ctx);

        // Drain deferred load/export actions
        self.handle_requests(ctx);

        // Recompute the preview if an action marked it dirty
        self.update_preview(ctx);

        self.state.check_and_save_preferences();

        let mut block_size_changed = false;

        // Top (controls)
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 4))
                .show(ui, |ui| {
                    block_size_changed |= UI::draw_header(ui, &mut self.state);
                });
        });

        // Bottom (status + export)
        if self.state.processor.has_source() {
            egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
                egui::Frame::NONE
                    .inner_margin(Margin::symmetric(0, 4))
                    .show(ui, |ui| {
                        UI::draw_footer(ui, &mut self.state);
                    });
            });
        }

        // Main (images)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(0.0)
                    .fill(ctx.style().visuals.window_fill()),
            )
            .show(ctx, |ui| {
                if self.state.processor.has_source() {
                    UI::draw_image_view(ui, &mut self.state);
                } else {
                    UI::draw_main_content(ui);
                }
            });

        if block_size_changed {
            self.state.needs_render = true;
            ctx.request_repaint();
        }
    }
}

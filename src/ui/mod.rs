mod footer;
mod header;
mod image_viewer;
pub mod styles;

use crate::types::AppState;

pub struct UI;

impl UI {
    pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) -> bool {
        header::draw_header(ui, state)
    }

    pub fn draw_image_view(ui: &mut egui::Ui, state: &mut AppState) {
        image_viewer::draw_image_view(ui, state)
    }

    pub fn draw_main_content(ui: &mut egui::Ui) {
        image_viewer::draw_main_content(ui)
    }

    pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
        footer::draw_footer(ui, state)
    }
}

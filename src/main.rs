#![windows_subsystem = "windows"]
mod app;
mod error;
mod exporter;
mod image_processor;
mod pixelate;
mod types;
mod ui;

use app::PixelArtApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([700.0, 450.0])
            .with_drag_and_drop(true)
            .with_icon(egui::IconData::default())
            .with_title("Pixel Art GUI - Image Pixelation Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Art GUI - Image Pixelation Tool",
        options,
        Box::new(|cc| Ok(Box::new(PixelArtApp::new(cc)))),
    )
}

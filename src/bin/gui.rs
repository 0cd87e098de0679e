// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::{IconData, ViewportBuilder};
use thesis_browser::{
    config::{options::LoadOptions, state::AppState},
    gui,
};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/app_icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let level = std::env::var("THESIS_BROWSER_LOG").unwrap_or_else(|_| "info".into());
    thesis_browser::log::init(&level);

    let mut state = AppState::default();
    if let Some(path) = std::env::args_os().nth(1) {
        state.options.load = LoadOptions::for_path(PathBuf::from(path));
    }

    let mut viewport = ViewportBuilder::default()
        .with_title("Thesis Abstracts")
        .with_inner_size([state.gui.window_w, state.gui.window_h]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

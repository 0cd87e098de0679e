// src/gui/components/notice.rs

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

const NOTICE_COLOR: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF);
const EMPTY_COLOR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(text) = app.filter.notice().map(str::to_owned) else { return };
    let empty = app.filter.visible().is_empty();

    let mut clear = false;
    ui.horizontal_wrapped(|ui| {
        let color = if empty { EMPTY_COLOR } else { NOTICE_COLOR };
        ui.label(RichText::new(text).color(color));
        if empty && ui.link("Clear all filters").clicked() {
            clear = true;
        }
    });
    if clear {
        app.clear_filters();
    }
}

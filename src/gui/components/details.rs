// src/gui/components/details.rs
//
// Full text of the selected record.

use eframe::egui::{self, RichText};

use crate::display;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let record = app.selected.and_then(|ix| app.filter.dataset().records().get(ix));
    let Some(r) = record else {
        ui.weak("Select a row to read its abstract.");
        return;
    };

    ui.label(RichText::new(display::heading_line(r)).small());
    ui.label(RichText::new(&r.title).strong());
    egui::ScrollArea::vertical()
        .id_salt("abstract_scroll")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.label(r.abstract_text.as_str());
            ui.add_space(4.0);
            ui.weak(display::areas_line(r));
        });
}

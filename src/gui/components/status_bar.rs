// src/gui/components/status_bar.rs

use eframe::egui::{self, Align, Layout};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let loading = app.is_loading();
    let mut reload = false;
    let mut copy = false;
    ui.horizontal(|ui| {
        ui.label(app.status.as_str());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
                reload = true;
            }
            if ui.button("Copy").on_hover_text("Copy the visible records").clicked() {
                copy = true;
            }
            if ui.checkbox(&mut app.state.gui.show_abstracts, "Abstracts").changed() {
                logf!("UI: Show abstracts → {}", app.state.gui.show_abstracts);
            }
            ui.separator();
            ui.label(format!(
                "Showing {} of {} records",
                app.filter.visible().len(),
                app.filter.dataset().len()
            ));
        });
    });
    if copy {
        app.copy_visible(ui.ctx());
    }
    if reload {
        logf!("UI: Reload {}", app.state.options.load.path.display());
        app.start_load(ui.ctx());
    }
}

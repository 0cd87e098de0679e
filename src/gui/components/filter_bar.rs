// src/gui/components/filter_bar.rs
//
// Search box, method and area dropdowns, clear button and text size.
// Every edit goes straight into `app.filter`; the table picks up the change
// through the filter listener.

use eframe::egui::{self, Color32, RichText};

use crate::display::{self, MenuEntry, ALL_AREAS_LABEL, ALL_METHODS_LABEL};
use crate::filter::notice::clear_label;
use crate::filter::MethodSelection;
use crate::gui::app::App;

const CLEAR_READY_FILL: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);
const CLEAR_IDLE_FILL: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Menus are built up front: the combo closures must not hold `app.filter`.
    let method_menu = display::method_menu(app.filter.counts());
    let area_menu = display::area_menu(app.filter.counts());
    let cur_method = app.filter.selection().method;
    let cur_area = app.filter.selection().area.clone();

    let mut picked_method: Option<MethodSelection> = None;
    let mut picked_area: Option<Option<String>> = None;
    let mut clear = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_buf)
                .hint_text("Title, abstract, method or area")
                .desired_width(220.0),
        );
        if resp.changed() {
            app.filter.set_search_text(&app.search_buf);
        }

        ui.separator();

        let method_text = if cur_method.is_none() { ALL_METHODS_LABEL } else { cur_method.label() };
        egui::ComboBox::from_id_salt("method_filter")
            .width(240.0)
            .selected_text(method_text)
            .show_ui(ui, |ui| {
                for entry in &method_menu {
                    match entry {
                        MenuEntry::Group(g) => { ui.label(RichText::new(*g).strong()); }
                        MenuEntry::Hint(h) => { ui.weak(*h); }
                        MenuEntry::Choice { value, label } => {
                            if ui.selectable_label(*value == cur_method, label.as_str()).clicked() {
                                picked_method = Some(*value);
                            }
                        }
                    }
                }
            });

        let area_text = cur_area
            .as_deref()
            .map(display::area_label)
            .unwrap_or_else(|| s!(ALL_AREAS_LABEL));
        egui::ComboBox::from_id_salt("area_filter")
            .width(240.0)
            .selected_text(area_text)
            .show_ui(ui, |ui| {
                egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                    for entry in &area_menu {
                        match entry {
                            MenuEntry::Group(g) => { ui.label(RichText::new(*g).strong()); }
                            MenuEntry::Hint(h) => { ui.weak(*h); }
                            MenuEntry::Choice { value, label } => {
                                if ui.selectable_label(*value == cur_area, label.as_str()).clicked() {
                                    picked_area = Some(value.clone());
                                }
                            }
                        }
                    }
                });
            });

        ui.separator();

        let any = app.filter.any_active();
        let fill = if any { CLEAR_READY_FILL } else { CLEAR_IDLE_FILL };
        let btn = egui::Button::new(RichText::new(clear_label(any)).color(Color32::WHITE)).fill(fill);
        if ui.add_enabled(any, btn).clicked() {
            clear = true;
        }

        ui.separator();

        let gui = &mut app.state.gui;
        if ui.small_button("A−").on_hover_text("Smaller text").clicked() && gui.decrease_text() {
            logf!("UI: Text size → {}", gui.text_size());
        }
        if ui.small_button("A").on_hover_text("Reset text size").clicked() && gui.reset_text() {
            logf!("UI: Text size → {}", gui.text_size());
        }
        if ui.small_button("A+").on_hover_text("Larger text").clicked() && gui.increase_text() {
            logf!("UI: Text size → {}", gui.text_size());
        }
    });

    if let Some(m) = picked_method {
        logf!("UI: Method → {}", m.label());
        app.filter.set_method_selection(m);
    }
    if let Some(a) = picked_area {
        logf!("UI: Area → {}", a.as_deref().unwrap_or("(all)"));
        app.filter.set_area_selection(a.as_deref());
    }
    if clear {
        app.clear_filters();
    }
}

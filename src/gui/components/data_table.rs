// src/gui/components/data_table.rs
//
// Draws the visible records. Purely a view over `app.table`; a click selects
// the record for the details panel. The last row is the end marker.

use eframe::egui::{self, Align, Label, Layout, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::END_OF_RECORDS;
use crate::gui::{app::App, table_model::HEADERS};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    app.refresh_view();

    if app.filter.dataset().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak(if app.is_loading() { "Loading…" } else { "No records loaded" });
        });
        return;
    }

    // Match the scroll bar used elsewhere
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let row_h = (app.state.gui.text_size() * 1.6).round();
    let selected = app.selected;
    let table = &app.table;
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .id_salt("records_table")
        .striped(true)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(60.0).at_least(40.0).resizable(true))
        .column(Column::initial(150.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::initial(260.0).at_least(120.0).resizable(true).clip(true))
        .min_scrolled_height(0.0)
        .header(row_h, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(row_h, table.nrows() + 1, |mut row| {
                let i = row.index();
                let Some(r) = table.rows.get(i) else {
                    row.col(|ui| {
                        ui.weak(END_OF_RECORDS);
                    });
                    for _ in 1..HEADERS.len() {
                        row.col(|_| {});
                    }
                    return;
                };

                row.set_selected(selected == Some(r.source_ix));
                row.col(|ui| {
                    ui.label(r.id.as_str());
                });
                row.col(|ui| {
                    ui.add(Label::new(r.method.as_str()).truncate());
                });
                row.col(|ui| {
                    ui.add(Label::new(RichText::new(r.title.as_str()).strong()).truncate());
                });
                row.col(|ui| {
                    ui.add(Label::new(r.areas.as_str()).truncate());
                });
                if row.response().clicked() {
                    clicked = Some(r.source_ix);
                }
            });
        });

    if let Some(ix) = clicked {
        app.selected = if selected == Some(ix) { None } else { Some(ix) };
        logd!("UI: selected record {:?}", app.selected);
    }
}

// src/gui/app.rs
use std::{
    cell::Cell,
    error::Error,
    rc::Rc,
    sync::{
        mpsc::{self, Receiver, TryRecvError},
        Arc,
    },
    thread,
};

use eframe::egui::{self, FontId, TextStyle};

use crate::{
    config::state::AppState,
    csv::records_to_string,
    data::Dataset,
    error::LoadError,
    filter::FilterState,
    store,
};

use super::{components, table_model::TableModel};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Thesis Abstracts",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // options + gui prefs (UI thread only)
    pub state: AppState,

    // facet values, visible rows and counts
    pub filter: FilterState,

    // search box contents (pushed into `filter` on every edit)
    pub search_buf: String,

    // projection of the visible rows for the table
    pub table: TableModel,
    // set by the filter listener, cleared when `table` is rebuilt
    view_dirty: Rc<Cell<bool>>,

    /// Source index of the record shown in the details panel
    pub selected: Option<usize>,

    pub status: String,
    loading: Option<Receiver<Result<Dataset, LoadError>>>,

    applied_text_level: Option<i8>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let mut filter = FilterState::default();

        let view_dirty = Rc::new(Cell::new(true));
        let flag = view_dirty.clone();
        filter.subscribe(move |snap| {
            logd!(
                "UI: filters changed (rev={}, visible={})",
                snap.revision,
                snap.visible.len()
            );
            flag.set(true);
        });

        let mut app = Self {
            state,
            filter,
            search_buf: s!(),
            table: TableModel::default(),
            view_dirty,
            selected: None,
            status: s!("Idle"),
            loading: None,
            applied_text_level: None,
        };
        app.start_load(ctx);
        app
    }

    /* ---------- loading ---------- */

    #[inline]
    pub fn is_loading(&self) -> bool { self.loading.is_some() }

    /// Read the configured dataset on a worker thread. The filters keep the
    /// current dataset until the new one arrives.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.loading.is_some() { return; }

        let opts = self.state.options.load.clone();
        self.status = format!("Loading {}…", opts.path.display());

        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let res = store::load_dataset(&opts);
            let _ = tx.send(res);
            ctx.request_repaint();
        });
        self.loading = Some(rx);
    }

    fn poll_load(&mut self) {
        let msg = match &self.loading {
            Some(rx) => rx.try_recv(),
            None => return,
        };

        match msg {
            Ok(Ok(ds)) => {
                self.loading = None;
                self.status = format!(
                    "Loaded {} record(s) from {}",
                    ds.len(),
                    ds.source().map(|p| p.display().to_string()).unwrap_or_default()
                );
                self.selected = None;
                self.filter.replace_dataset(Arc::new(ds));
            }
            Ok(Err(e)) => {
                self.loading = None;
                loge!("Load: {}", e);
                self.status = format!("Load error: {}", e);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.loading = None;
                loge!("Load: worker exited without a result");
                self.status = s!("Load failed");
            }
        }
    }

    /* ---------- filters ---------- */

    /// Clear all three facets (and the search box) in one transition.
    pub fn clear_filters(&mut self) {
        self.search_buf.clear();
        if self.filter.clear_all() {
            logf!("UI: Cleared all filters");
        }
    }

    /// Rebuild the table projection if the filters changed since last time.
    pub fn refresh_view(&mut self) {
        if !self.view_dirty.get() { return; }
        self.table = TableModel::from_state(&self.filter);
        if let Some(ix) = self.selected {
            if self.table.position_of(ix).is_none() {
                self.selected = None;
            }
        }
        self.view_dirty.set(false);
    }

    /// Put the visible records on the clipboard in the export format.
    pub fn copy_visible(&mut self, ctx: &egui::Context) {
        let n = self.filter.visible().len();
        if n == 0 {
            self.status = s!("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        }

        let ds = self.filter.dataset().clone();
        let txt = records_to_string(ds.headers(), self.filter.visible_records(), &self.state.options.export);
        logf!("Copy: {} record(s), format={:?}", n, self.state.options.export.format);
        ctx.copy_text(txt);
        self.status = format!("Copied {} record(s)", n);
    }

    /* ---------- text size ---------- */

    fn apply_text_size(&mut self, ctx: &egui::Context) {
        let level = self.state.gui.text_level;
        if self.applied_text_level == Some(level) { return; }

        let size = self.state.gui.text_size();
        ctx.style_mut(|style| {
            style.text_styles = [
                (TextStyle::Heading, FontId::proportional(size * 1.35)),
                (TextStyle::Body, FontId::proportional(size)),
                (TextStyle::Button, FontId::proportional(size)),
                (TextStyle::Small, FontId::proportional(size * 0.8)),
                (TextStyle::Monospace, FontId::monospace(size * 0.9)),
            ]
            .into();
        });
        logd!("UI: text size {} (level {})", size, level);
        self.applied_text_level = Some(level);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        self.apply_text_size(ctx);

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            components::filter_bar::draw(ui, self);
            components::notice::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        if self.state.gui.show_abstracts {
            egui::TopBottomPanel::bottom("details")
                .resizable(true)
                .min_height(120.0)
                .show(ctx, |ui| {
                    components::details::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, self);
        });
    }
}

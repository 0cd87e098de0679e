// src/config/state.rs
use super::consts::*;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text size step relative to the base size, clamped to
    /// `TEXT_LEVEL_MIN..=TEXT_LEVEL_MAX`.
    pub text_level: i8,

    pub window_w: f32,
    pub window_h: f32,

    /// Show the abstract of the selected record under the table
    pub show_abstracts: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            text_level: 0,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            show_abstracts: true,
        }
    }
}

impl GuiState {
    /// Body text size in points for the current level.
    pub fn text_size(&self) -> f32 {
        TEXT_SIZE_BASE + self.text_level as f32 * TEXT_SIZE_STEP
    }

    /// Returns `false` when already at the largest size.
    pub fn increase_text(&mut self) -> bool {
        if self.text_level >= TEXT_LEVEL_MAX { return false; }
        self.text_level += 1;
        true
    }

    /// Returns `false` when already at the smallest size.
    pub fn decrease_text(&mut self) -> bool {
        if self.text_level <= TEXT_LEVEL_MIN { return false; }
        self.text_level -= 1;
        true
    }

    pub fn reset_text(&mut self) -> bool {
        let changed = self.text_level != 0;
        self.text_level = 0;
        changed
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

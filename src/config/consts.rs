// src/config/consts.rs

// Source columns (0-based)
pub const COL_ID: usize = 0;
pub const COL_METHOD: usize = 1;
pub const COL_METHOD_DETAIL: usize = 2;
pub const COL_TITLE: usize = 3;
pub const COL_ABSTRACT: usize = 4;
pub const COL_AREA_FIRST: usize = 5;
pub const AREA_COLUMNS: usize = 6; // 5..=10

// Input
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DATA_FILE: &str = "thesis_abstracts.xlsx";

// Display
pub const AREA_SEPARATOR: &str = "; ";
pub const END_OF_RECORDS: &str = "End of records";

// Text size (px), in steps from the base
pub const TEXT_SIZE_BASE: f32 = 15.0;
pub const TEXT_SIZE_STEP: f32 = 1.5;
pub const TEXT_LEVEL_MIN: i8 = -2;
pub const TEXT_LEVEL_MAX: i8 = 4;

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;

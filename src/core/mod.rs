// src/core/mod.rs

pub mod text;

pub use text::{fold_key, normalize_ws, title_case};

// src/gui/components/mod.rs
pub mod data_table;
pub mod details;
pub mod filter_bar;
pub mod notice;
pub mod status_bar;

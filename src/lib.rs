// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod model;
pub mod filter;

pub mod csv;
pub mod data;
pub mod display;
pub mod error;
pub mod store;
pub mod workbook;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use data::{Dataset, VisibleView};
pub use error::LoadError;
pub use filter::{
    FacetCounts, FacetSelection, FilterSnapshot, FilterState, MethodOption, MethodSelection,
};
pub use model::{AreaTags, Family, Method, Record};

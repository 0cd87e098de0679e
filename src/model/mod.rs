// src/model/mod.rs

pub mod area;
pub mod method;
pub mod record;

pub use area::{normalize_tag, AreaTags};
pub use method::{classify, family_of, Family, Method, ALL_METHODS};
pub use record::Record;

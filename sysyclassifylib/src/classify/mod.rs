//! Classification: turn grammar counters into per-category flags.
//!
//! - **Categories**: the fixed, ordered table of named predicates
//! - **Options**: label language and missing-field policy

pub mod category;
pub mod options;

pub use category::{evaluate_categories, lead_label, Category, Counters, CATEGORIES};
pub use options::{ClassifyOptions, Language, Strictness};

//! # sysyclassifylib
//!
//! Classifies SysY compiler test cases by the language features they exercise.
//!
//! ## Overview
//!
//! An external analyzer parses each test case and emits grammar-construct
//! counters (unary expressions, `while` loops, function definitions, array
//! accesses, ...). This library reads those counters and decides, for each of
//! 15 fixed categories, whether a file exercises it. The result is a presence
//! table with one row per file and one column per category.
//!
//! The pipeline has three stages:
//!
//! 1. **data**: load the `{"statistics": [...]}` document into a `Dataset`
//! 2. **classify**: evaluate the ordered `CATEGORIES` table against each record
//! 3. **output**: render delimited lines or a serializable `ClassTable`
//!
//! ## Example
//!
//! ```rust
//! use sysyclassifylib::{parse_dataset, print_report, ClassifyOptions};
//!
//! let json = r#"{"statistics": [
//!     {"file": "a.sy", "stat": {"grammar": {"while_stmts": 2}}}
//! ]}"#;
//!
//! let dataset = parse_dataset(json, "inline").unwrap();
//! let mut out = Vec::new();
//! print_report(&dataset, &ClassifyOptions::new().lenient(), &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text.lines().count(), 2);
//! ```

pub mod classify;
pub mod data;
pub mod error;
pub mod output;

pub use classify::{
    evaluate_categories, lead_label, Category, ClassifyOptions, Counters, Language, Strictness,
    CATEGORIES,
};
pub use data::{
    load_dataset, parse_dataset, read_dataset, Dataset, FileEntry, GrammarStats, InputSource,
    LexicalStats, StatRecord,
};
pub use error::ClassifyError;
pub use output::{
    print_report, render_header, render_row, write_json, ClassTable, TableRow, BLANK, DELIMITER,
    MARK,
};

/// Result type for sysyclassifylib operations
pub type Result<T> = std::result::Result<T, ClassifyError>;

//! Output formatting: present classification results as tables.
//!
//! - **Delimited lines**: `render_header`, `render_row` and `print_report`
//!   produce the comma-separated presence table
//! - **ClassTable**: serializable headers/rows/footer, written by `write_json`

pub mod table;

pub use table::{
    print_report, render_header, render_row, write_json, ClassTable, TableRow, BLANK, DELIMITER,
    MARK,
};

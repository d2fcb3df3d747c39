//! Input data: per-file grammar statistics and the dataset that holds them.
//!
//! - **Statistics**: typed counters (`GrammarStats`, `LexicalStats`) wrapped in
//!   a `StatRecord` that remembers which counters the input carried
//! - **Dataset**: ordered `FileEntry` list loaded from a file or stdin

pub mod dataset;
pub mod stats;

pub use dataset::{load_dataset, parse_dataset, read_dataset, Dataset, FileEntry, InputSource};
pub use stats::{GrammarStats, LexicalStats, StatRecord};

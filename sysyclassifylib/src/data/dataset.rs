//! Loading the statistics dataset.
//!
//! The input is read eagerly and parsed as one JSON document:
//!
//! ```json
//! { "statistics": [ { "file": "a.sy", "stat": { "grammar": { ... } } } ] }
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use super::stats::StatRecord;
use crate::error::ClassifyError;
use crate::Result;

/// Where to read the dataset from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    Path(PathBuf),
}

impl InputSource {
    /// Map the optional positional argument to a source. `-` means stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::Path(PathBuf::from(path)),
        }
    }

    /// Human-readable origin used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Path(path) => path.display().to_string(),
        }
    }
}

/// One file and its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File identifier as emitted by the analyzer
    pub file: String,
    /// Statistics for the file
    pub stat: StatRecord,
}

/// All entries of an input document, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub entries: Vec<FileEntry>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Deserialize)]
struct RawDataset {
    statistics: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    file: String,
    stat: Value,
}

/// Read and parse the dataset from `source`.
pub fn load_dataset(source: &InputSource) -> Result<Dataset> {
    let text = match source {
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
        InputSource::Path(path) => {
            fs::read_to_string(path).map_err(|e| ClassifyError::FileRead {
                path: path.clone(),
                source: e,
            })?
        }
    };

    parse_dataset(&text, &source.describe())
}

/// Read a dataset from any reader.
pub fn read_dataset<R: Read>(mut reader: R, origin: &str) -> Result<Dataset> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_dataset(&text, origin)
}

/// Parse a dataset from JSON text. `origin` only labels error messages.
pub fn parse_dataset(text: &str, origin: &str) -> Result<Dataset> {
    let raw: RawDataset = serde_json::from_str(text).map_err(|e| ClassifyError::Parse {
        origin: origin.to_string(),
        source: e,
    })?;

    let entries = raw
        .statistics
        .into_iter()
        .map(|entry| {
            let stat = StatRecord::from_value(&entry.file, entry.stat)?;
            Ok(FileEntry {
                file: entry.file,
                stat,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("loaded {} entries from {}", entries.len(), origin);

    Ok(Dataset { entries })
}

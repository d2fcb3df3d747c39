//! Rendering the presence table.
//!
//! Two presentations share the same column order:
//!
//! - **Delimited lines**: a header line, then one line per file, each with
//!   `CATEGORIES.len() + 1` comma-separated fields. A satisfied category is
//!   marked with `✓`, an unsatisfied one with a single space.
//! - **ClassTable**: the same data as a serializable structure with a footer
//!   counting how many files exercise each category.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::classify::{evaluate_categories, lead_label, ClassifyOptions, Language, CATEGORIES};
use crate::data::{Dataset, FileEntry};
use crate::Result;

/// Marker for a satisfied category.
pub const MARK: &str = "✓";
/// Placeholder for an unsatisfied category.
pub const BLANK: &str = " ";
/// Field delimiter.
pub const DELIMITER: &str = ",";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file name, or "Total (N files)" for the footer)
    pub label: String,
    /// One value per category column
    pub values: Vec<String>,
}

/// Table-ready classification data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable {
    /// Column headers: [lead label, category1, category2, ...]
    pub headers: Vec<String>,
    /// One row per file, in input order
    pub rows: Vec<TableRow>,
    /// Number of files that exercise each category
    pub footer: TableRow,
}

impl ClassTable {
    /// Classify every entry of `dataset`.
    pub fn from_dataset(dataset: &Dataset, options: &ClassifyOptions) -> Result<Self> {
        let mut counts = vec![0u64; CATEGORIES.len()];
        let mut rows = Vec::with_capacity(dataset.len());

        for entry in &dataset.entries {
            let flags = evaluate_categories(&entry.file, &entry.stat, options.strictness)?;
            for (count, &set) in counts.iter_mut().zip(&flags) {
                if set {
                    *count += 1;
                }
            }
            rows.push(TableRow {
                label: entry.file.clone(),
                values: marks(&flags),
            });
        }

        Ok(ClassTable {
            headers: headers(options.language),
            rows,
            footer: TableRow {
                label: format!("Total ({} files)", dataset.len()),
                values: counts.iter().map(|c| c.to_string()).collect(),
            },
        })
    }
}

fn headers(language: Language) -> Vec<String> {
    std::iter::once(lead_label(language))
        .chain(CATEGORIES.iter().map(|c| c.label(language)))
        .map(str::to_string)
        .collect()
}

fn marks(flags: &[bool]) -> Vec<String> {
    flags
        .iter()
        .map(|&set| (if set { MARK } else { BLANK }).to_string())
        .collect()
}

/// Header line: lead label followed by every category label.
pub fn render_header(language: Language) -> String {
    headers(language).join(DELIMITER)
}

/// Data line for one entry: file identifier followed by one marker per category.
pub fn render_row(entry: &FileEntry, options: &ClassifyOptions) -> Result<String> {
    let flags = evaluate_categories(&entry.file, &entry.stat, options.strictness)?;
    log::trace!("{}: {:?}", entry.file, flags);

    let mut line = entry.file.clone();
    for mark in marks(&flags) {
        line.push_str(DELIMITER);
        line.push_str(&mark);
    }
    Ok(line)
}

/// Write the header and one line per entry, in input order.
///
/// Every row is rendered before anything is written, so a record that fails
/// classification produces no output at all.
pub fn print_report<W: Write>(
    dataset: &Dataset,
    options: &ClassifyOptions,
    out: &mut W,
) -> Result<()> {
    let rows = dataset
        .entries
        .iter()
        .map(|entry| render_row(entry, options))
        .collect::<Result<Vec<_>>>()?;

    writeln!(out, "{}", render_header(options.language))?;
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the classification as pretty-printed JSON.
pub fn write_json<W: Write>(table: &ClassTable, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, table).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{parse_dataset, GrammarStats, StatRecord};
    use crate::error::ClassifyError;

    fn entry(file: &str, grammar: GrammarStats) -> FileEntry {
        FileEntry {
            file: file.to_string(),
            stat: StatRecord::from_grammar(grammar),
        }
    }

    fn scenario() -> FileEntry {
        entry(
            "a.sy",
            GrammarStats {
                unary_exprs: 1,
                if_stmts: 1,
                int_func_defs: 1,
                var_decls: 1,
                local_decls: 1,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_header_fields() {
        let header = render_header(Language::Chinese);
        let fields: Vec<&str> = header.split(',').collect();
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], "文件名");
        assert_eq!(fields[1], "一元运算");
        assert_eq!(fields[15], "数组");
        assert_eq!(header, render_header(Language::Chinese));
    }

    #[test]
    fn test_header_english() {
        let header = render_header(Language::English);
        assert!(header.starts_with("File,Unary,MulDivMod,"));
        assert!(header.ends_with(",Array"));
    }

    #[test]
    fn test_row_scenario() {
        let row = render_row(&scenario(), &ClassifyOptions::new()).unwrap();
        assert_eq!(row, "a.sy,✓, , , , , ,✓, , ,✓, , , , , ");
        assert_eq!(row.split(',').count(), 16);
    }

    #[test]
    fn test_empty_program_row_is_blank() {
        let row = render_row(&entry("e.sy", GrammarStats::default()), &ClassifyOptions::new())
            .unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], "e.sy");
        assert!(fields[1..].iter().all(|f| *f == BLANK));
    }

    #[test]
    fn test_report_line_count() {
        let dataset = Dataset {
            entries: vec![scenario(), entry("b.sy", GrammarStats::default())],
        };
        let mut out = Vec::new();
        print_report(&dataset, &ClassifyOptions::new(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("a.sy,"));
        assert!(lines[2].starts_with("b.sy,"));
    }

    #[test]
    fn test_report_empty_dataset() {
        let mut out = Vec::new();
        print_report(&Dataset::default(), &ClassifyOptions::new(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end(), render_header(Language::Chinese));
    }

    #[test]
    fn test_report_missing_field_writes_nothing() {
        let dataset = parse_dataset(
            r#"{"statistics": [{"file": "x.sy", "stat": {"grammar": {"unary_exprs": 1}}}]}"#,
            "test",
        )
        .unwrap();
        let mut out = Vec::new();
        let err = print_report(&dataset, &ClassifyOptions::new(), &mut out).unwrap_err();

        assert!(matches!(err, ClassifyError::FieldMissing { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_class_table_footer_counts() {
        let dataset = Dataset {
            entries: vec![
                scenario(),
                entry(
                    "b.sy",
                    GrammarStats {
                        unary_exprs: 3,
                        ..Default::default()
                    },
                ),
            ],
        };
        let table = ClassTable::from_dataset(&dataset, &ClassifyOptions::new()).unwrap();

        assert_eq!(table.headers.len(), 16);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].values[0], MARK);
        assert_eq!(table.footer.label, "Total (2 files)");
        assert_eq!(table.footer.values[0], "2");
        assert_eq!(table.footer.values[6], "1");
        assert_eq!(table.footer.values[14], "0");
    }

    #[test]
    fn test_write_json() {
        let table = ClassTable::from_dataset(&Dataset::default(), &ClassifyOptions::new()).unwrap();
        let mut out = Vec::new();
        write_json(&table, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["headers"][0], "文件名");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["footer"]["label"], "Total (0 files)");
    }
}

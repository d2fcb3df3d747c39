//! # sysyclassify
//!
//! A CLI tool that renders a feature-coverage table for SysY test cases.
//!
//! ## Overview
//!
//! sysyclassify is built on top of sysyclassifylib. It reads the grammar
//! statistics produced by the SysY analyzer and prints one row per test case,
//! with a `✓` under every language-feature category the case exercises.
//!
//! ## Usage
//!
//! ```bash
//! # Read statistics from a file
//! sysyclassify stats.json
//!
//! # Read statistics from stdin
//! analyzer tests/*.sy | sysyclassify
//!
//! # English column labels
//! sysyclassify stats.json --lang en
//!
//! # Table with per-category totals as JSON
//! sysyclassify stats.json --output json
//!
//! # Treat counters missing from a record as zero
//! sysyclassify stats.json --lenient
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for loading details.

use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use sysyclassifylib::{
    load_dataset, print_report, write_json, ClassTable, ClassifyOptions, InputSource, Language,
    Strictness,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sysyclassify")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Feature-coverage table for SysY test cases from grammar statistics")
        .arg(
            Arg::new("input")
                .help("Statistics JSON file (reads stdin when omitted or '-')")
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["csv", "json"])
                .default_value("csv")
                .help("Output format"),
        )
        .arg(
            Arg::new("lang")
                .short('l')
                .long("lang")
                .value_parser(["zh", "en"])
                .default_value("zh")
                .help("Language of the column labels"),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .action(ArgAction::SetTrue)
                .help("Read counters missing from a record as zero instead of failing"),
        )
}

/// Build classify options from matches
fn extract_options(matches: &ArgMatches) -> Result<ClassifyOptions, anyhow::Error> {
    let language = matches
        .get_one::<String>("lang")
        .map(|s| Language::from_str(s))
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or_default();

    let strictness = if matches.get_flag("lenient") {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };

    Ok(ClassifyOptions::new()
        .language(language)
        .strictness(strictness))
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let options = extract_options(matches)?;
    let source = InputSource::from_arg(matches.get_one::<String>("input").map(|s| s.as_str()));
    log::debug!("reading statistics from {}", source.describe());

    let dataset = load_dataset(&source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => {
            let table = ClassTable::from_dataset(&dataset, &options)?;
            write_json(&table, &mut out)?;
        }
        _ => print_report(&dataset, &options, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{label} {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_rejects_second_positional() {
        let result = build_command().try_get_matches_from(["sysyclassify", "a.json", "b.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_options() {
        let matches = build_command()
            .try_get_matches_from(["sysyclassify"])
            .unwrap();
        let options = extract_options(&matches).unwrap();
        assert_eq!(options.language, Language::Chinese);
        assert_eq!(options.strictness, Strictness::Strict);
        assert!(matches.get_one::<String>("input").is_none());
    }

    #[test]
    fn test_english_lenient_options() {
        let matches = build_command()
            .try_get_matches_from(["sysyclassify", "stats.json", "--lang", "en", "--lenient"])
            .unwrap();
        let options = extract_options(&matches).unwrap();
        assert_eq!(options.language, Language::English);
        assert_eq!(options.strictness, Strictness::Lenient);
        assert_eq!(
            matches.get_one::<String>("input").map(|s| s.as_str()),
            Some("stats.json")
        );
    }
}

//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use didscan_lib::SplitMode;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::scan::ScanArgs;
use crate::commands::translate::TranslateArgs;

pub struct GenerateParams {
    pub source_path: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
    pub split_mode: SplitMode,
    pub placeholder: String,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: required_path(m, "source_path"),
            output: required_path(m, "output"),
            verbose: m.get_flag("verbose"),
            split_mode: parse_split_mode(m),
            placeholder: parse_placeholder(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            source_path: p.source_path,
            output: p.output,
            verbose: p.verbose,
            split_mode: p.split_mode,
            placeholder: p.placeholder,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ScanParams {
    pub source_path: PathBuf,
    pub json: bool,
    pub split_mode: SplitMode,
    pub color: ColorChoice,
}

impl ScanParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: required_path(m, "source_path"),
            json: m.get_flag("json"),
            split_mode: parse_split_mode(m),
            color: parse_color(m),
        }
    }
}

impl From<ScanParams> for ScanArgs {
    fn from(p: ScanParams) -> Self {
        Self {
            source_path: p.source_path,
            json: p.json,
            split_mode: p.split_mode,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source_path: PathBuf,
    pub strict: bool,
    pub split_mode: SplitMode,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: required_path(m, "source_path"),
            strict: m.get_flag("strict"),
            split_mode: parse_split_mode(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            strict: p.strict,
            split_mode: p.split_mode,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TranslateParams {
    pub types: Vec<String>,
    pub placeholder: String,
    pub color: ColorChoice,
}

impl TranslateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            types: m
                .get_many::<String>("types")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            placeholder: parse_placeholder(m),
            color: parse_color(m),
        }
    }
}

impl From<TranslateParams> for TranslateArgs {
    fn from(p: TranslateParams) -> Self {
        Self {
            types: p.types,
            placeholder: p.placeholder,
            color: p.color.should_colorize(),
        }
    }
}

/// Required positional or option; clap rejects the command line before this is reached.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_split_mode(m: &ArgMatches) -> SplitMode {
    if m.get_flag("legacy_split") {
        SplitMode::Legacy
    } else {
        SplitMode::Nested
    }
}

fn parse_placeholder(m: &ArgMatches) -> String {
    m.get_one::<String>("placeholder")
        .cloned()
        .unwrap_or_else(|| didscan_lib::emit::DEFAULT_PLACEHOLDER.to_string())
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Annotated service source (positional, `-` for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Annotated service source file")
}

/// Descriptor destination (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Descriptor file to write (overwritten)")
}

/// Echo the descriptor (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Print the descriptor to stdout as well")
}

/// Split parameters at every comma (--legacy-split).
pub fn legacy_split_arg() -> Arg {
    Arg::new("legacy_split")
        .long("legacy-split")
        .action(ArgAction::SetTrue)
        .help("Split parameters at every comma, like older builds did")
}

/// Opaque placeholder type (--placeholder).
pub fn placeholder_arg() -> Arg {
    Arg::new("placeholder")
        .long("placeholder")
        .value_name("TYPE")
        .default_value("text")
        .value_parser(["text", "reserved", "empty"])
        .help("IDL type written for unrecognized source types")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Emit JSON instead of a listing (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print translated signatures as JSON")
}

/// Source type tokens (positional, one or more).
pub fn type_tokens_arg() -> Arg {
    Arg::new("types")
        .value_name("TYPE")
        .required(true)
        .num_args(1..)
        .help("Source type, e.g. 'Vec<u8>' or 'Option<candid::Nat>'")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

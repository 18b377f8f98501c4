//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Required arguments are enforced by clap
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Defaults for placeholder, split mode and color

use std::path::PathBuf;

use didscan_lib::SplitMode;

use super::*;
use crate::cli::commands::{check_command, generate_command, scan_command, translate_command};

#[test]
fn generate_extracts_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "src/lib.rs",
            "-o",
            "service.did",
            "-v",
            "--legacy-split",
            "--placeholder",
            "reserved",
            "--strict",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.source_path, PathBuf::from("src/lib.rs"));
    assert_eq!(params.output, PathBuf::from("service.did"));
    assert!(params.verbose);
    assert_eq!(params.split_mode, SplitMode::Legacy);
    assert_eq!(params.placeholder, "reserved");
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "lib.rs", "--output", "out.did"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert!(!params.verbose);
    assert_eq!(params.split_mode, SplitMode::Nested);
    assert_eq!(params.placeholder, "text");
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_requires_output() {
    let result = generate_command().try_get_matches_from(["generate", "lib.rs"]);
    assert!(result.is_err());
}

#[test]
fn generate_rejects_unknown_placeholder() {
    let result = generate_command().try_get_matches_from([
        "generate",
        "lib.rs",
        "-o",
        "out.did",
        "--placeholder",
        "blob",
    ]);
    assert!(result.is_err());
}

#[test]
fn scan_accepts_stdin_and_json() {
    let m = scan_command()
        .try_get_matches_from(["scan", "-", "--json", "--color", "always"])
        .unwrap();
    let params = ScanParams::from_matches(&m);

    assert_eq!(params.source_path, PathBuf::from("-"));
    assert!(params.json);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn check_extracts_strict() {
    let m = check_command()
        .try_get_matches_from(["check", "lib.rs", "--strict"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.source_path, PathBuf::from("lib.rs"));
    assert!(params.strict);
    assert_eq!(params.split_mode, SplitMode::Nested);
}

#[test]
fn check_requires_source() {
    assert!(check_command().try_get_matches_from(["check"]).is_err());
}

#[test]
fn translate_collects_every_type() {
    let m = translate_command()
        .try_get_matches_from(["translate", "Vec<u8>", "Option<u64>", "bool"])
        .unwrap();
    let params = TranslateParams::from_matches(&m);

    assert_eq!(params.types, ["Vec<u8>", "Option<u64>", "bool"]);
    assert_eq!(params.placeholder, "text");
}

#[test]
fn translate_requires_a_type() {
    assert!(
        translate_command()
            .try_get_matches_from(["translate"])
            .is_err()
    );
}

#[test]
fn color_choice_is_explicit_when_forced() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

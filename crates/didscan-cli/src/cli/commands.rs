//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("didscan")
        .about("Recover a service interface descriptor from annotated source")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(scan_command())
        .subcommand(check_command())
        .subcommand(translate_command())
}

/// Write the descriptor for a source file.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Write the service descriptor recovered from a source file")
        .override_usage("  didscan generate <SOURCE> -o <FILE>")
        .after_help(
            r#"EXAMPLES:
  didscan generate src/lib.rs -o service.did        # write the descriptor
  didscan generate src/lib.rs -o service.did -v     # and print it
  didscan generate src/lib.rs -o service.did --strict

A missing SOURCE is reported as a warning and nothing is written."#,
        )
        .arg(source_path_arg())
        .arg(output_arg())
        .arg(verbose_arg())
        .arg(legacy_split_arg())
        .arg(placeholder_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// List exported declarations.
pub fn scan_command() -> Command {
    Command::new("scan")
        .about("List exported declarations in scan order")
        .override_usage(
            "\
  didscan scan <SOURCE>
  didscan scan - < src/lib.rs",
        )
        .after_help(
            r#"EXAMPLES:
  didscan scan src/lib.rs            # raw declarations
  didscan scan src/lib.rs --json     # translated signatures"#,
        )
        .arg(source_path_arg())
        .arg(json_arg())
        .arg(legacy_split_arg())
        .arg(color_arg())
}

/// Report diagnostics without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report unrecognized types and duplicate exported names")
        .override_usage(
            "\
  didscan check <SOURCE>
  didscan check - < src/lib.rs",
        )
        .after_help(
            r#"EXAMPLES:
  didscan check src/lib.rs           # warnings only
  didscan check src/lib.rs --strict  # fail on any warning"#,
        )
        .arg(source_path_arg())
        .arg(strict_arg())
        .arg(legacy_split_arg())
        .arg(color_arg())
}

/// Show how source types translate.
pub fn translate_command() -> Command {
    Command::new("translate")
        .about("Show the IDL type for source types")
        .after_help(
            r#"EXAMPLES:
  didscan translate 'Vec<u8>'                 # blob
  didscan translate 'Option<Vec<u64>>' bool   # opt vec nat64, bool"#,
        )
        .arg(type_tokens_arg())
        .arg(placeholder_arg())
        .arg(color_arg())
}

use std::path::PathBuf;

use didscan_lib::{EmitConfig, GenerateOptions, Outcome, SplitMode, generate};

pub struct GenerateArgs {
    pub source_path: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
    pub split_mode: SplitMode,
    pub placeholder: String,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let options = GenerateOptions::new()
        .verbose(args.verbose)
        .split_mode(args.split_mode)
        .deny_warnings(args.strict)
        .emit(
            EmitConfig::new()
                .placeholder(args.placeholder)
                .colored(args.color),
        );

    let report = match generate(&args.source_path, &args.output, &options) {
        Ok(Outcome::Written(report)) => report,
        Ok(Outcome::MissingSource { path }) => {
            // Not fatal: the surrounding build carries on without a descriptor.
            eprintln!(
                "warning: {} not found, skipping descriptor generation",
                path.display()
            );
            return;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let diagnostics = &report.diagnostics;
    if !diagnostics.is_empty() {
        let path = args.source_path.to_string_lossy();
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&report.source)
                .path(&path)
                .colored(args.color)
                .render()
        );
        eprintln!();
    }

    if diagnostics.has_errors() {
        std::process::exit(1);
    }
}

use std::path::PathBuf;

use didscan_lib::{SplitMode, recover};

use super::source_loader::load_source;

pub struct CheckArgs {
    pub source_path: PathBuf,
    pub strict: bool,
    pub split_mode: SplitMode,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = match load_source(&args.source_path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let mut recovery = recover(&source.text, args.split_mode);
    if args.strict {
        recovery.diagnostics.deny_warnings();
    }

    let diagnostics = &recovery.diagnostics;
    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .source(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
        eprintln!();
    }

    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

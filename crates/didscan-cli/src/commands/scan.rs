use std::path::PathBuf;

use didscan_core::Colors;
use didscan_lib::scanner::RawDeclaration;
use didscan_lib::{SplitMode, recover, scanner};

use super::source_loader::load_source;

pub struct ScanArgs {
    pub source_path: PathBuf,
    pub json: bool,
    pub split_mode: SplitMode,
    pub color: bool,
}

pub fn run(args: ScanArgs) {
    let source = match load_source(&args.source_path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if args.json {
        let recovery = recover(&source.text, args.split_mode);
        match serde_json::to_string_pretty(&recovery.signatures) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let declarations: Vec<_> = scanner::scan(&source.text).collect();
    print!("{}", format_listing(&declarations, Colors::new(args.color)));
}

/// One line per declaration: mode, exported name, then the signature as written.
pub fn format_listing(declarations: &[RawDeclaration<'_>], c: Colors) -> String {
    let mut out = String::new();
    for decl in declarations {
        out.push_str(&format!(
            "{}{:<6}{} {}\"{}\"{} {}({}) -> ({})\n",
            c.dim,
            decl.mode.as_str(),
            c.reset,
            c.green,
            decl.exported_name,
            c.reset,
            decl.fn_name,
            decl.params.trim(),
            decl.return_text.trim()
        ));
    }
    out
}

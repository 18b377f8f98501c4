mod cli;
mod commands;

use cli::{CheckParams, GenerateParams, ScanParams, TranslateParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("scan", m)) => {
            let params = ScanParams::from_matches(m);
            commands::scan::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("translate", m)) => {
            let params = TranslateParams::from_matches(m);
            commands::translate::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr so stdout stays clean for descriptors and listings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

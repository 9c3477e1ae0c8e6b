use crate::config::AppConfig;
use crate::exports::JsonExport;
use tracing::error;

mod availability;
mod config;
mod domain;
mod errors;
mod exports;
mod filters;
mod logging;
mod reports;
mod stats;

#[cfg(test)]
mod tests;

fn main() {
    logging::setup_tracing();

    // 1️⃣ Settings from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Command and optional query
    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        eprintln!("{}", reports::USAGE);
        std::process::exit(2);
    };
    let query = args.next().unwrap_or_default();

    // 3️⃣ Run against the exported collections
    let source = JsonExport::new(&cfg.data_dir);
    match reports::run(&command, &query, &source, &cfg) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(%e, command = %command, "Report failed");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}

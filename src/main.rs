mod catalog;
mod cli;
mod contacts;
mod csv_out;
mod directory;
mod errors;
mod filter;
mod geo;
mod mcc;
mod model;
mod pipeline;
mod render;
mod report;
mod uploads;
mod xml_out;
mod zone;

use crate::errors::AppError;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<(), AppError> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);
    let cfg = args.into_config()?;
    info!("Starting: {} repeaters, {:?}", cfg.band, cfg.selection);

    let bm = directory::BrandMeister::new(cfg.insecure)?;
    let summary = pipeline::run(&cfg, &bm)?;

    if summary.write_failures > 0 {
        info!("Done with {} unwritten zone files.", summary.write_failures);
    } else {
        info!("Done.");
    }
    Ok(())
}

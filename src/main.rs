use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use grocer::core::config::{self, CliOverrides};
use grocer::core::item::Quantity;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "grocer", version, about = "Terminal grocery list")]
struct Args {
    /// Quantity the picker starts at and resets to after each add
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(Quantity::MIN as i64..=Quantity::MAX as i64))]
    quantity: Option<u8>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LevelFilter>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {raw:?} (try off, error, warn, info, debug, trace)"))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists; problems are reported once it does
    let loaded = config::load_config();
    let fallback = config::GrocerConfig::default();
    let file_config = loaded.as_ref().unwrap_or(&fallback);
    let cli = CliOverrides {
        default_quantity: args.quantity,
        log_level: args.log_level,
        log_file: args.log_file,
    };
    let resolved = config::resolve(file_config, &cli);

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Grocer starting up (default quantity {}, log level {})",
        resolved.default_quantity,
        resolved.log_level
    );

    grocer::tui::run(resolved)
}

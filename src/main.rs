use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use zzt_cli::tui;

fn main() {
    // Initialize file logger - writes to zzt.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("zzt.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("zzt-cli starting up");

    if let Err(err) = tui::run() {
        eprintln!("Captain, we have an error: {err}");
        std::process::exit(1);
    }
}

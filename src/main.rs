use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use tick::core::config;
use tick::tui;

#[derive(Parser)]
#[command(name = "tick", about = "Single-screen terminal todo list")]
struct Args {
    /// Application title shown in the top bar
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to tick.log in current directory.
    // The terminal itself belongs to the UI, so nothing logs to stderr.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("tick.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.title.as_deref());

    log::info!("tick starting up with title: {:?}", resolved.title);

    tui::run(resolved)
}

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use todolist::core::config::{self, BlankTitles, CliOverrides, Seed};

#[derive(Parser)]
#[command(name = "todolist", about = "Single-screen to-do list for the terminal")]
struct Args {
    /// What the list starts with
    #[arg(short, long, value_enum)]
    seed: Option<Seed>,

    /// What to do with titles that are empty after trimming
    #[arg(short, long, value_enum)]
    blank_titles: Option<BlankTitles>,

    /// Config file to use instead of ~/.todolist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, default_value = "todolist.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("todolist starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            warn!("{}; falling back to defaults", e);
            config::TodoConfig::default()
        }
    };
    let cli = CliOverrides {
        seed: args.seed,
        blank_titles: args.blank_titles,
    };
    let resolved = config::resolve(&file_config, &cli);

    todolist::tui::run(resolved)
}

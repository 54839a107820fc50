use anyhow::Result;
use chislo_core::{DEFAULT_SAVE_FILE, GameConfig, GameSession};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod confirm;
mod driver;
mod prompter;
mod text;

use driver::Driver;
use prompter::ConsolePrompter;

#[derive(Parser)]
#[command(name = "chislo")]
#[command(about = "Console number guessing game")]
struct Args {
    /// Path to the save file
    #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
    save: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chislo=info".parse()?))
        .init();

    let args = Args::parse();
    info!("chislo starting, save file {:?}", args.save);

    let config = GameConfig::with_save_path(&args.save);
    let session = GameSession::new(config);
    let mut driver = Driver::new(session, ConsolePrompter);
    driver.run()
}

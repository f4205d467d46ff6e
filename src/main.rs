use anyhow::Result;

use listkeeper::config::Config;
use listkeeper::{logger, ui};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init_file_logging(&config.logging)?;

    ui::run_app(config)?;

    Ok(())
}

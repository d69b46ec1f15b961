mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use draughts_driver::DraughtsEngine;
use tracing::info;

use crate::settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("draughts starting");

    let settings = match config_path(std::env::args().skip(1))? {
        Some(path) => {
            info!(path = %path.display(), "loading settings");
            Settings::load(&path)?
        }
        None => Settings::default(),
    };
    let config = settings.into_bot_config().context("invalid settings")?;

    DraughtsEngine::new(config).run()?;
    Ok(())
}

/// Extract the `--config <path>` argument.
fn config_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config needs a path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(path)
}

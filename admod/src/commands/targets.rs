use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TargetsCommand {
    /// Path to admod.toml (defaults to ./admod.toml)
    #[arg(short, long, default_value = admod_config::CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        let config = admod_config::load_or_default(&self.config).unwrap_or_exit();

        let report = ops::targets(&config);

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

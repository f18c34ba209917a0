use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{
    UnwrapOrExit,
    generate::{generate_options, select_catalog},
};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    /// Template directory (defaults to generate.templates or the bundled set)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Path to admod.toml (defaults to ./admod.toml)
    #[arg(short, long, default_value = admod_config::CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let config = admod_config::load_or_default(&self.config).unwrap_or_exit();
        let catalog = select_catalog(self.templates.as_deref(), &config);

        let report = ops::templates(&catalog, &generate_options(&config)).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, eyre};

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for (detected from $SHELL when omitted)
    shell: Option<Shell>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let shell = self
            .shell
            .or_else(Shell::from_env)
            .ok_or_else(|| eyre!("cannot detect the current shell, pass one explicitly"))?;

        let mut command = Cli::command();
        let bin_name = command.get_name().to_string();
        let mut out = io::stdout().lock();
        clap_complete::generate(shell, &mut command, bin_name, &mut out);
        out.flush()?;
        Ok(())
    }
}

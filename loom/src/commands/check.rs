use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use loom_dom::Declared;
use loom_templates::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let namespace = manifest.generate().unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        println!("  namespace {}", namespace.name());

        let classes: Vec<_> = namespace.classes().collect();
        println!(
            "  {} class{}:",
            classes.len(),
            if classes.len() == 1 { "" } else { "es" }
        );
        for class in classes {
            let members = class.fields().len() + class.members().len();
            println!(
                "    {} ({} member{})",
                class.full_name(),
                members,
                if members == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }
}

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use loom_dom::{render::CSharpRenderer, target::CodeNamespace};
use loom_templates::Manifest;
use tracing::info;

use super::UnwrapOrExit;

/// Output format of the generated code model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// C# source
    #[default]
    Csharp,
    /// The lowered code model as JSON
    Json,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csharp)]
    pub format: Format,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let namespace = manifest.generate().unwrap_or_exit();
        let lowered = namespace.lower();
        let content = self.render(&lowered)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &content)
                    .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
                info!(path = %path.display(), bytes = content.len(), "wrote output");

                let count = lowered.types.len();
                println!(
                    "✓ Generated {} class{} into {}",
                    count,
                    if count == 1 { "" } else { "es" },
                    path.display()
                );
            }
            None => print!("{}", content),
        }
        Ok(())
    }

    fn render(&self, namespace: &CodeNamespace) -> Result<String> {
        match self.format {
            Format::Csharp => Ok(CSharpRenderer::default().render_namespace(namespace)),
            Format::Json => {
                let mut json = serde_json::to_string_pretty(namespace)
                    .wrap_err("Failed to serialize code model")?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

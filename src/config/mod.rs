pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BindMode {
    /// Lower-cased field names
    Names,
    /// Explicit tag values
    Tags,
    /// Domain types per property
    Types,
    /// Structural safety check only
    Check,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "resbind")]
#[command(about = "Inspect property bindings of resource kinds")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Resource kind to inspect; lists kinds when omitted
    #[arg(short, long)]
    pub kind: Option<String>,

    #[arg(short, long, value_enum, default_value = "names")]
    pub mode: BindMode,

    /// Output format (json or toml); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(kind) = &self.kind {
            validate_non_empty_string("--kind", kind)?;
        }
        if let Some(format) = &self.format {
            crate::utils::validation::validate_one_of(
                "--format",
                format,
                &toml_config::OUTPUT_FORMATS,
            )?;
        }
        Ok(())
    }
}

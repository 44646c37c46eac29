use crate::core::type_mapper::DEFAULT_TAG_KEY;
use crate::utils::error::{BindError, Result};
use crate::utils::validation::{validate_identifier, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["json", "toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BinderConfig {
    #[serde(default)]
    pub binding: BindingConfig,
    pub logging: Option<LoggingConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    #[serde(default = "default_tag_key")]
    pub tag_key: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            tag_key: default_tag_key(),
        }
    }
}

fn default_tag_key() -> String {
    DEFAULT_TAG_KEY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl BinderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BindError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BindError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BindError::ConfigError {
            message: format!("substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_identifier("binding.tag_key", &self.binding.tag_key)?;

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }

    pub fn tag_key(&self) -> &str {
        &self.binding.tag_key
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("json")
    }
}

impl Validate for BinderConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

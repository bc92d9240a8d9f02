//! Configuration loading
//!
//! `defaults/flashml.default.toml` is embedded in the binary so the documented defaults and the
//! runtime defaults cannot drift. [Loader] layers user files and overrides on top of them before
//! deserializing into [FlashmlConfig].

use crate::flashml::formats::{HtmlOptions, IntermediateOptions};
use crate::flashml::pipeline::Compiler;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/flashml.default.toml");

/// Name of the optional per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "flashml.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct FlashmlConfig {
    pub html: HtmlConfig,
    pub intermediate: IntermediateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub lang: String,
    pub title: String,
    pub indent: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntermediateConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub filter: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl FlashmlConfig {
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            lang: self.html.lang.clone(),
            title: self.html.title.clone(),
            indent: self.html.indent,
        }
    }

    pub fn intermediate_options(&self) -> IntermediateOptions {
        IntermediateOptions {
            pretty: self.intermediate.pretty,
        }
    }

    /// A compiler configured with these settings
    pub fn compiler(&self) -> Compiler {
        Compiler::with_options(self.html_options(), self.intermediate_options())
    }
}

/// Helper for layering user overrides over the built-in defaults
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent)
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("html.lang", "en")`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration
    pub fn build(self) -> Result<FlashmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<FlashmlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.html.lang, "es");
        assert_eq!(config.html.title, "Documento FlashML");
        assert_eq!(config.html.indent, 2);
        assert!(config.intermediate.pretty);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn defaults_match_option_defaults() {
        let config = load_defaults().unwrap();
        assert_eq!(config.html_options(), HtmlOptions::default());
        assert_eq!(config.intermediate_options(), IntermediateOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("html.lang", "en")
            .unwrap()
            .set_override("intermediate.pretty", false)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.html.lang, "en");
        assert!(!config.intermediate.pretty);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[html]\ntitle = \"Team Flash\"\nindent = 4").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.html.title, "Team Flash");
        assert_eq!(config.html.indent, 4);
        assert_eq!(config.html.lang, "es");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("definitely/missing/flashml.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/missing/flashml.toml")
            .build()
            .unwrap();
        assert_eq!(config.html.indent, 2);
    }
}

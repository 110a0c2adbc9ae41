/*!
 * Configuration file handling.
 *
 * `Config` groups the segmentation budget, the prompt settings and the
 * output defaults. It is loaded from JSON (written with defaults when the
 * file is missing), overridden by command line flags and validated before
 * an engine is built from it.
 */

use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::output::OutputFormat;
use crate::segmentation::SegmentationConfig;
use crate::synthesis::{PromptTemplate, SynthesisConfig, MIN_PROMPT_CHARS};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "scenesmith.json";

/// Settings read from `scenesmith.json`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Scene length budget
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Prompt rendering settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,

    /// Inserted between the script name and the extension of output files
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

fn default_output_suffix() -> String {
    "scenes".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load the configuration from a JSON file.
    ///
    /// When the file does not exist, the default configuration is written to
    /// it and returned.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let segmentation = &self.segmentation;
        if segmentation.max_words_per_scene == 0 {
            return Err(ConfigError::InvalidValue {
                field: "segmentation.max_words_per_scene",
                reason: "must be at least 1".to_string(),
            });
        }
        if segmentation.max_sentences_per_scene == 0 {
            return Err(ConfigError::InvalidValue {
                field: "segmentation.max_sentences_per_scene",
                reason: "must be at least 1".to_string(),
            });
        }
        if segmentation.min_words_per_scene > segmentation.max_words_per_scene {
            return Err(ConfigError::InvalidValue {
                field: "segmentation.min_words_per_scene",
                reason: format!(
                    "{} is above max_words_per_scene ({})",
                    segmentation.min_words_per_scene, segmentation.max_words_per_scene
                ),
            });
        }

        if self.synthesis.max_prompt_chars < MIN_PROMPT_CHARS {
            return Err(ConfigError::InvalidValue {
                field: "synthesis.max_prompt_chars",
                reason: format!("must be at least {}", MIN_PROMPT_CHARS),
            });
        }

        let template = PromptTemplate::new(&self.synthesis.prompt_template);
        if let Some(placeholder) = template.missing_placeholders().first().copied() {
            return Err(ConfigError::MissingPlaceholder(placeholder));
        }

        if self.output.suffix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.suffix",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

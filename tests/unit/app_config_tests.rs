/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use scenesmith::app_config::{Config, LogLevel, OutputConfig};
use scenesmith::segmentation::{
    DEFAULT_MAX_SENTENCES_PER_SCENE, DEFAULT_MAX_WORDS_PER_SCENE, DEFAULT_MIN_WORDS_PER_SCENE,
};
use scenesmith::synthesis::DEFAULT_MAX_PROMPT_CHARS;
use scenesmith::{ConfigError, OutputFormat, VisualStyle};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.segmentation.max_words_per_scene, DEFAULT_MAX_WORDS_PER_SCENE);
    assert_eq!(config.segmentation.max_sentences_per_scene, DEFAULT_MAX_SENTENCES_PER_SCENE);
    assert_eq!(config.segmentation.min_words_per_scene, DEFAULT_MIN_WORDS_PER_SCENE);
    assert_eq!(config.synthesis.max_prompt_chars, DEFAULT_MAX_PROMPT_CHARS);
    assert_eq!(config.synthesis.fixed_style, None);
    assert_eq!(config.output, OutputConfig::default());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("scenesmith.json");

    let config = Config::load_or_create(&config_path)?;

    assert_eq!(config, Config::default());
    assert!(config_path.exists());
    assert_eq!(Config::from_file(&config_path)?, Config::default());

    Ok(())
}

/// Test loading a hand-written config file
#[test]
fn test_load_or_create_withExistingFile_shouldReadValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "custom.json",
        r#"{
            "segmentation": { "max_words_per_scene": 22, "max_sentences_per_scene": 2 },
            "synthesis": { "fixed_style": "documentary" },
            "output": { "format": "markdown" },
            "log_level": "warn"
        }"#,
    )?;

    let config = Config::load_or_create(&config_path)?;

    assert_eq!(config.segmentation.max_words_per_scene, 22);
    assert_eq!(config.segmentation.max_sentences_per_scene, 2);
    assert_eq!(config.segmentation.min_words_per_scene, DEFAULT_MIN_WORDS_PER_SCENE);
    assert_eq!(config.synthesis.fixed_style, Some(VisualStyle::Documentary));
    assert_eq!(config.output.format, OutputFormat::Markdown);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(config.validate().is_ok());

    Ok(())
}

/// Test that malformed JSON is reported with the file name
#[test]
fn test_from_file_withInvalidJson_shouldFailWithContext() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;

    let error = Config::from_file(&config_path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.segmentation.max_words_per_scene = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));
    config.segmentation.max_words_per_scene = DEFAULT_MAX_WORDS_PER_SCENE;

    config.synthesis.max_prompt_chars = 50;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "synthesis.max_prompt_chars", .. })
    ));
    config.synthesis.max_prompt_chars = DEFAULT_MAX_PROMPT_CHARS;

    config.synthesis.prompt_template = "{content} {mood} {lighting} {movement}".to_string();
    assert_eq!(config.validate(), Err(ConfigError::MissingPlaceholder("{style}")));
    config.synthesis.prompt_template = scenesmith::synthesis::PromptTemplate::SCENE_PROMPT.to_string();

    config.output.suffix = " ".to_string();
    assert!(config.validate().is_err());
}

/*!
 * Tests for application configuration functionality
 */

use std::fs;
use anyhow::Result;
use log::LevelFilter;
use archdocx::app_config::{Config, LogLevel, ProjectInfo};
use archdocx::errors::AppError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output_file, "ChatBot_RAG_Flutter_Arquitectura.docx");
    assert!(config.open_after_generate);
    assert_eq!(config.log_level, LogLevel::Info);

    assert_eq!(config.project.name, "ChatBot RAG Flutter");
    assert_eq!(config.project.architecture, "Clean Architecture + Provider");
    assert_eq!(config.project.technology, "Flutter 3.9+ / Dart");
    assert_eq!(config.project.version, "v1.0.0");
    assert_eq!(config.project.author, "Equipo de Desarrollo");
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Blank output name
    config.output_file = "   ".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    // Wrong extension
    config.output_file = "arquitectura.pdf".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    // Extension check is case-insensitive
    config.output_file = "docs/ARQUITECTURA.DOCX".to_string();
    assert!(config.validate().is_ok());

    // Blank project name
    config.project.name = "".to_string();
    assert!(config.validate().is_err());
}

/// Test that a partial config file keeps defaults for missing fields
#[test]
fn test_load_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("archdocx.json");
    fs::write(&config_path, r#"{
        "output_file": "salida.docx",
        "log_level": "debug",
        "project": { "version": "v2.1.0" }
    }"#)?;

    let config = Config::load(&config_path)?;

    assert_eq!(config.output_file, "salida.docx");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.open_after_generate);
    assert_eq!(config.project.version, "v2.1.0");
    assert_eq!(config.project.name, ProjectInfo::default().name);
    Ok(())
}

/// Test that a malformed config file is reported as a configuration error
#[test]
fn test_load_withMalformedFile_shouldReturnConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("broken.json");
    fs::write(&config_path, "{ not json")?;

    assert!(matches!(Config::load(&config_path), Err(AppError::Config(_))));
    Ok(())
}

/// Test that a missing config file is reported as a file error
#[test]
fn test_load_withMissingFile_shouldReturnFileError() {
    let result = Config::load("definitely_missing_archdocx.json");
    assert!(matches!(result, Err(AppError::File(_))));
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEveryLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

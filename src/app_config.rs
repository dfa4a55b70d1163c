use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the generator configuration: where the document is
/// written, whether it is opened afterwards, and the project facts shown on
/// the cover page.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output file name or path of the generated document
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Open the document with the system default application once written
    #[serde(default = "default_true")]
    pub open_after_generate: bool,

    /// Project facts for the cover page
    #[serde(default)]
    pub project: ProjectInfo,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Project facts listed in the cover page table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectInfo {
    // @field: Project name
    #[serde(default = "default_project_name")]
    pub name: String,

    // @field: Architecture summary
    #[serde(default = "default_architecture")]
    pub architecture: String,

    // @field: Technology stack
    #[serde(default = "default_technology")]
    pub technology: String,

    // @field: Documented version
    #[serde(default = "default_version")]
    pub version: String,

    // @field: Document author
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            architecture: default_architecture(),
            technology: default_technology(),
            version: default_version(),
            author: default_author(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
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
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_output_file() -> String {
    "ChatBot_RAG_Flutter_Arquitectura.docx".to_string()
}

fn default_true() -> bool {
    true
}

fn default_project_name() -> String {
    "ChatBot RAG Flutter".to_string()
}

fn default_architecture() -> String {
    "Clean Architecture + Provider".to_string()
}

fn default_technology() -> String {
    "Flutter 3.9+ / Dart".to_string()
}

fn default_version() -> String {
    "v1.0.0".to_string()
}

fn default_author() -> String {
    "Equipo de Desarrollo".to_string()
}

impl Config {
    /// Load a configuration file; missing fields fall back to their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::File(format!("Failed to open config file {:?}: {}", path, e)))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        let output_file = self.output_file.trim();
        if output_file.is_empty() {
            return Err(AppError::Config("Output file name must not be empty".to_string()));
        }

        let has_docx_extension = Path::new(output_file)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
        if !has_docx_extension {
            return Err(AppError::Config(format!(
                "Output file must have a .docx extension: {}",
                self.output_file
            )));
        }

        if self.project.name.trim().is_empty() {
            return Err(AppError::Config("Project name must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_file: default_output_file(),
            open_after_generate: default_true(),
            project: ProjectInfo::default(),
            log_level: LogLevel::default(),
        }
    }
}

use anyhow::{Result, Context};
use chrono::{Local, NaiveDate};
use log::{info, debug};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::content;
use crate::file_utils::FileManager;

// @module: Application controller for document generation

/// Main application controller for architecture document generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()
            .context("Configuration validation failed")?;

        Ok(Self { config })
    }

    /// Path the document is written to
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.config.output_file.trim())
    }

    /// Build and save the document dated today
    pub fn generate(&self) -> Result<PathBuf> {
        self.generate_dated(Local::now().date_naive())
    }

    /// Build and save the document with an explicit cover date
    pub fn generate_dated(&self, date: NaiveDate) -> Result<PathBuf> {
        let start_time = std::time::Instant::now();
        let output_path = self.output_path();

        FileManager::ensure_parent_dir(&output_path)?;

        let doc = content::build_document(&self.config.project, date)
            .context("Failed to build document content")?;
        debug!("Document assembled with {} blocks", doc.blocks().len());

        doc.save(&output_path)
            .with_context(|| format!("Failed to save document: {:?}", output_path))?;

        info!("Documento generado: {} ({:.2?})", output_path.display(), start_time.elapsed());
        Ok(output_path)
    }

    /// Run the main workflow: generate, report and optionally open the document
    pub fn run(&self) -> Result<PathBuf> {
        info!("Generando documentación de {}...", self.config.project.name);

        let output_path = self.generate()?;
        let absolute = FileManager::absolute_path(&output_path)?;

        info!("¡Documentación generada exitosamente!");
        info!("Archivo: {}", output_path.display());
        info!("Ubicación: {}", absolute.display());

        if self.config.open_after_generate {
            FileManager::open_with_default_app(&absolute)?;
        } else {
            debug!("Skipping viewer, open_after_generate is disabled");
        }

        Ok(output_path)
    }
}

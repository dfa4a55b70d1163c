use anyhow::{Result, Context};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Ensure the directory that will hold `file` exists
    pub fn ensure_parent_dir<P: AsRef<Path>>(file: P) -> Result<()> {
        match file.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::ensure_dir(parent),
            _ => Ok(()),
        }
    }

    /// Absolute form of `path`, resolved against the working directory
    pub fn absolute_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(cwd.join(path))
    }

    /// Command that opens a file with the desktop's default handler
    pub fn opener_command<P: AsRef<Path>>(path: P) -> Command {
        let path = path.as_ref();
        let mut command = if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            // Empty window title, otherwise a quoted path is taken as the title
            command.args(["/C", "start", ""]);
            command
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };
        command.arg(path);
        command
    }

    /// Open a file with the default application.
    ///
    /// On Windows a viewer that cannot be started is an error. Elsewhere it is
    /// only a warning, as is a non-zero exit status from the opener.
    pub fn open_with_default_app<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let mut command = Self::opener_command(path);
        debug!("Opening {:?} with {:?}", path, command.get_program());

        let status = match command.status() {
            Ok(status) => status,
            Err(e) if cfg!(target_os = "windows") => {
                return Err(anyhow::Error::new(e).context(format!("Failed to launch viewer for {:?}", path)));
            }
            Err(e) => {
                warn!("Could not launch {:?} to open {:?}: {}", command.get_program(), path, e);
                return Ok(());
            }
        };

        if !status.success() {
            warn!("Viewer exited with {} while opening {:?}", status, path);
        }

        Ok(())
    }
}

/*!
 * # archdocx - Architecture document generator
 *
 * A Rust library and CLI that writes the architecture documentation of the
 * ChatBot RAG Flutter application as a Word (.docx) document.
 *
 * ## Features
 *
 * - Self-contained .docx writer (styles, paragraphs, runs, tables, page breaks)
 * - Cover page with project facts and a Spanish long-form date
 * - Table of contents and ten literal content sections
 * - Text diagrams and code blocks in a monospaced style
 * - Optional JSON configuration with CLI overrides
 * - Opens the result with the system default application
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `docx`: Document model and OPC package writer:
 *   - `docx::model`: Styles, paragraphs, runs and tables
 *   - `docx::writer`: Serialization to the zip container
 * - `content`: The document content:
 *   - `content::styles`: Custom paragraph styles
 *   - `content::cover`: Cover page and table of contents
 *   - `content::body`: Main sections
 *   - `content::blocks`: Shared section helpers
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod content;
pub mod docx;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::{Config, ProjectInfo};
pub use app_controller::Controller;
pub use docx::Document;
pub use errors::{AppError, DocxError};

/*!
 * Tests driving the archdocx binary
 */

use std::fs;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

fn archdocx(args: &[&str], dir: &std::path::Path) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_archdocx"))
        .args(args)
        .current_dir(dir)
        .env_remove("ARCHDOCX_OUTPUT")
        .env_remove("ARCHDOCX_CONFIG")
        .output()?)
}

/// Test that the default file name lands in the working directory
#[test]
fn test_cli_withNoOpen_shouldWriteDefaultFileInWorkingDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = archdocx(&["--no-open"], temp_dir.path())?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(temp_dir.path().join("ChatBot_RAG_Flutter_Arquitectura.docx").is_file());
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 1);
    Ok(())
}

/// Test the explicit generate subcommand with an output override
#[test]
fn test_cli_generateSubcommand_withOutput_shouldWriteRequestedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = archdocx(&["generate", "--no-open", "-o", "salida.docx"], temp_dir.path())?;

    assert!(output.status.success());
    let parts = common::read_package(temp_dir.path().join("salida.docx"))?;
    common::assert_well_formed(&parts[archdocx::docx::writer::DOCUMENT_PART])?;
    Ok(())
}

/// Test that top-level flags are not silently dropped in front of a subcommand
#[test]
fn test_cli_withFlagsBeforeGenerate_shouldRejectMixAndWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = archdocx(&["--no-open", "-o", "salida.docx", "generate"], temp_dir.path())?;

    assert!(!output.status.success());
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

/// Test that a missing desktop opener only warns after the document is written
#[cfg(not(target_os = "windows"))]
#[test]
fn test_cli_withoutOpenerOnPath_shouldStillSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let work_dir = temp_dir.path().join("work");
    fs::create_dir(&work_dir)?;

    let output = Command::new(env!("CARGO_BIN_EXE_archdocx"))
        .current_dir(&work_dir)
        .env("PATH", temp_dir.path().join("no-such-bin"))
        .env_remove("ARCHDOCX_OUTPUT")
        .env_remove("ARCHDOCX_CONFIG")
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stderr.contains("Could not launch"), "stderr: {}", stderr);
    assert!(stderr.contains("Generando documentación de ChatBot RAG Flutter..."), "stderr: {}", stderr);
    assert_eq!(fs::read_dir(&work_dir)?.count(), 1);
    assert!(work_dir.join("ChatBot_RAG_Flutter_Arquitectura.docx").is_file());
    Ok(())
}

/// Test that config file values are applied and CLI flags still win
#[test]
fn test_cli_withConfigFile_shouldApplyProjectFacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    fs::write(temp_dir.path().join("archdocx.json"), r#"{
        "output_file": "desde_config.docx",
        "open_after_generate": false,
        "project": { "author": "Equipo QA" }
    }"#)?;

    let output = archdocx(&["-c", "archdocx.json"], temp_dir.path())?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let parts = common::read_package(temp_dir.path().join("desde_config.docx"))?;
    let texts = common::document_texts(&parts[archdocx::docx::writer::DOCUMENT_PART])?;
    assert!(texts.iter().any(|t| t == "Equipo QA"));
    Ok(())
}

/// Test that a failing run prints an error and exits with status 1
#[test]
fn test_cli_withUnwritableOutput_shouldExitWithStatusOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    fs::write(temp_dir.path().join("blocker"), "")?;

    let output = archdocx(&["--no-open", "-o", "blocker/arquitectura.docx"], temp_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error generando documentación"), "stderr: {}", stderr);
    Ok(())
}

/// Test that a bad output extension is rejected before anything is written
#[test]
fn test_cli_withWrongExtension_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = archdocx(&["--no-open", "-o", "arquitectura.pdf"], temp_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

/// Test shell completion output
#[test]
fn test_cli_completions_shouldPrintScript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = archdocx(&["completions", "bash"], temp_dir.path())?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("archdocx"));
    Ok(())
}

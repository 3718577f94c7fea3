//! External editor integration.
//!
//! The editor is just another process: launch it against a file path, let it
//! inherit the terminal, wait, and report how it exited. Whatever it wrote is
//! picked up by the next store read.

use crate::error::{Result, SnipzError};
use log::debug;
use std::env;
use std::path::Path;
use std::process::Command;

const FALLBACK_EDITORS: &[&str] = &["vim", "vi", "nano"];

/// Picks the editor command: the configured one, then `$EDITOR`, then
/// `$VISUAL`, then the first common editor found on `PATH`.
pub fn resolve_editor(configured: Option<&str>) -> Result<String> {
    resolve_from(configured, |key| env::var(key).ok(), on_path)
}

fn resolve_from(
    configured: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
    available: impl Fn(&str) -> bool,
) -> Result<String> {
    if let Some(editor) = configured.map(str::trim).filter(|e| !e.is_empty()) {
        return Ok(editor.to_string());
    }

    for key in ["EDITOR", "VISUAL"] {
        if let Some(editor) = lookup_env(key).filter(|e| !e.trim().is_empty()) {
            return Ok(editor.trim().to_string());
        }
    }

    FALLBACK_EDITORS
        .iter()
        .find(|candidate| available(candidate))
        .map(|candidate| candidate.to_string())
        .ok_or_else(|| {
            SnipzError::Editor(
                "no editor found; set editor_binary in the config or $EDITOR".to_string(),
            )
        })
}

fn on_path(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Splits a command string such as `"code --wait"` into program and args.
pub(crate) fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Opens `path` in `editor` and waits for it to exit.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let (program, args) = split_command(editor)
        .ok_or_else(|| SnipzError::Editor("empty editor command".to_string()))?;

    debug!("launching editor {} on {}", editor, path.display());
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| SnipzError::Editor(format!("failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Editor(format!(
            "'{}' exited with {}",
            editor, status
        )));
    }
    Ok(())
}

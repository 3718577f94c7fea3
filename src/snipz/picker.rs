//! Interactive selection through an external fuzzy finder (`fzf` by default).
//!
//! Each snippet becomes one line, `title | tags | uid`. The finder gets the
//! lines on stdin and prints the chosen one; the identifier is its last field.

use crate::editor::split_command;
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use log::debug;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

pub const DEFAULT_PICKER: &str = "fzf";

/// One line per snippet, newline terminated.
pub fn render_candidates(snippets: &[Snippet]) -> String {
    let mut out = String::new();
    for snippet in snippets {
        let title = snippet.title().replace(['\n', '\r'], " ");
        out.push_str(&format!(
            "{} | {} | {}\n",
            title,
            snippet.tags().join(","),
            snippet.uid
        ));
    }
    out
}

/// Pulls the identifier out of a selected line.
pub fn parse_selection(output: &str) -> Result<String> {
    let fields: Vec<&str> = output.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(SnipzError::Picker(format!(
            "unexpected selection: '{}'",
            output.trim()
        )));
    }
    Ok(fields[fields.len() - 1].to_string())
}

/// Runs `program` with `input` on stdin and returns the selected identifier.
pub fn pick(program: &str, input: &str) -> Result<String> {
    let (bin, args) = split_command(program)
        .ok_or_else(|| SnipzError::Picker("empty picker command".to_string()))?;

    debug!("launching picker {}", program);
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| SnipzError::Picker(format!("failed to launch '{}': {}", program, e)))?;

    // Fed from its own thread so a full stdout pipe cannot stall the write.
    let feeder = child.stdin.take().map(|mut stdin| {
        let input = input.to_owned();
        thread::spawn(move || stdin.write_all(input.as_bytes()))
    });

    let output = child
        .wait_with_output()
        .map_err(|e| SnipzError::Picker(format!("'{}' failed: {}", program, e)))?;

    if let Some(feeder) = feeder {
        match feeder.join() {
            Ok(Ok(())) => {}
            // the picker may exit once it has its answer
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("picker closed its input early");
            }
            Ok(Err(e)) => {
                return Err(SnipzError::Picker(format!(
                    "failed to feed '{}': {}",
                    program, e
                )));
            }
            Err(_) => {
                return Err(SnipzError::Picker(format!("failed to feed '{}'", program)));
            }
        }
    }

    if !output.status.success() {
        return Err(SnipzError::Picker(format!(
            "no snippet selected ('{}' exited with {})",
            program, output.status
        )));
    }

    parse_selection(&String::from_utf8_lossy(&output.stdout))
}

/// Lets the user choose one of `snippets`.
pub fn select_snippet(program: &str, snippets: &[Snippet]) -> Result<String> {
    if snippets.is_empty() {
        return Err(SnipzError::Picker("no snippets to choose from".to_string()));
    }
    pick(program, &render_candidates(snippets))
}

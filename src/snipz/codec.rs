//! # Snippet Codec
//!
//! Converts a [`Snippet`] to and from its on-disk text form:
//!
//! ```text
//! ---
//! title: Kernel version
//! tags:
//! - linux
//! - kernel
//! ---
//! uname -a
//! ```
//!
//! The block between the two `---` lines is YAML. `tags` is left out when
//! empty. Everything after the closing marker line is the body, byte for byte.
//!
//! Decoding is strict about the markers and lenient about the block: a file
//! whose markers are in place but whose metadata is empty, partial or
//! unreadable still decodes. Each field is read on its own; missing or
//! unusable ones are defaulted, and `tags: one` counts as a single tag.
//! Only a broken marker structure (or non UTF-8 input) is rejected.

use crate::error::{Result, SnipzError};
use crate::model::{Metadata, Snippet};
use log::warn;
use serde_yaml::Value;

pub const MARKER: &str = "---";

/// Encodes a snippet. The `uid` is not part of the output.
pub fn encode(snippet: &Snippet) -> Result<Vec<u8>> {
    let block = serde_yaml::to_string(&snippet.meta)?;

    let mut out = String::with_capacity(block.len() + snippet.body.len() + 2 * MARKER.len() + 2);
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&block);
    if !block.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&snippet.body);

    Ok(out.into_bytes())
}

/// Decodes a buffer into a snippet with an empty `uid`.
pub fn decode(buf: &[u8]) -> Result<Snippet> {
    let text = std::str::from_utf8(buf)
        .map_err(|e| SnipzError::malformed(format!("not valid UTF-8: {}", e)))?;

    let rest = strip_opening_marker(text)
        .ok_or_else(|| SnipzError::malformed("missing opening '---' marker"))?;
    let (block, body) = split_at_closing_marker(rest)
        .ok_or_else(|| SnipzError::malformed("missing closing '---' marker"))?;

    Ok(Snippet {
        uid: String::new(),
        meta: parse_metadata(block),
        body: body.to_string(),
    })
}

fn strip_opening_marker(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(MARKER)?;
    rest.strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
}

/// Finds the first line that is exactly the marker. Returns the text before
/// that line and the text after its line terminator.
fn split_at_closing_marker(rest: &str) -> Option<(&str, &str)> {
    let mut start = 0;
    loop {
        let newline = rest[start..].find('\n').map(|i| start + i);
        let line = match newline {
            Some(end) => &rest[start..end],
            None => &rest[start..],
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line == MARKER {
            let body = match newline {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            return Some((&rest[..start], body));
        }

        start = newline? + 1;
    }
}

/// Reads the block one field at a time, so a bad `tags` entry does not cost
/// the title. Missing or unusable fields fall back to their defaults.
fn parse_metadata(block: &str) -> Metadata {
    if block.trim().is_empty() {
        return Metadata::default();
    }
    let value: Value = match serde_yaml::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            warn!("unreadable snippet metadata, using defaults: {}", e);
            return Metadata::default();
        }
    };
    let Value::Mapping(map) = value else {
        warn!("snippet metadata is not a mapping, using defaults");
        return Metadata::default();
    };

    let title = match map.get("title") {
        None | Some(Value::Null) => String::new(),
        Some(value) => scalar_to_string(value).unwrap_or_else(|| {
            warn!("ignoring non-scalar snippet title");
            String::new()
        }),
    };

    let tags = match map.get("tags") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => {
            let tags: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
            if tags.len() != items.len() {
                warn!("ignoring non-scalar snippet tags");
            }
            tags
        }
        // `tags: linux` is read as a single tag
        Some(value) => match scalar_to_string(value) {
            Some(tag) => vec![tag],
            None => {
                warn!("ignoring unreadable snippet tags");
                Vec::new()
            }
        },
    };

    Metadata { title, tags }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

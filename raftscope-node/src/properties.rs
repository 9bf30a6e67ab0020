// src/properties.rs

//! Reader for the node's `key=value` properties file.
//!
//! Accepted separators are `=`, `:` or whitespace. Blank lines and lines
//! starting with `#` or `!` are skipped. Keys and values are trimmed. A line
//! ending in an odd number of backslashes continues on the next line, whose
//! leading whitespace is dropped. Other escape sequences are kept verbatim.

use crate::{NodeError, Result};
use std::collections::HashMap;

/// Parsed properties
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Parses properties from text; later keys override earlier ones
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();
        let mut pending = String::new();

        for line in contents.lines() {
            let line = line.trim();
            if pending.is_empty()
                && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
            {
                continue;
            }

            match continued(line) {
                Some(head) => {
                    pending.push_str(head);
                    continue;
                }
                None => pending.push_str(line),
            }

            insert_entry(&mut entries, &pending);
            pending.clear();
        }

        if !pending.is_empty() {
            insert_entry(&mut entries, &pending);
        }

        Self { entries }
    }

    /// Looks up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up a key that must be present
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| NodeError::PropertyError(format!("missing key {}", key)))
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys were parsed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips the continuation backslash; an escaped `\\` does not continue
fn continued(line: &str) -> Option<&str> {
    let trailing = line.len() - line.trim_end_matches('\\').len();
    (trailing % 2 == 1).then(|| &line[..line.len() - 1])
}

fn insert_entry(entries: &mut HashMap<String, String>, line: &str) {
    let split = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let key = line[..split].trim_end();
    let rest = line[split..].trim_start();
    let value = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest)
        .trim();

    entries.insert(key.to_string(), value.to_string());
}

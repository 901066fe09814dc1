//! Minimal dotenv reader used as a configuration fallback.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Variables parsed from a dotenv file.
///
/// Read-only: figsync consults the values as a fallback behind the process
/// environment and never writes them back.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Read and parse `path`. A missing file yields an empty set of variables.
    pub fn read(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read dotenv file {}: {err}", path.display()))?;
        Self::parse(&contents).map_err(|err| format!("{err} in dotenv file {}", path.display()))
    }

    /// Parse dotenv contents.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let mut seen_keys = HashSet::new();
        let mut vars = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let Some((key, value)) =
                parse_line(line).map_err(|err| format!("{err} at line {}", index + 1))?
            else {
                continue;
            };

            if !seen_keys.insert(key.clone()) {
                return Err(format!("Duplicate variable '{key}'"));
            }
            vars.insert(key, value);
        }

        Ok(Self { vars })
    }

    /// Consume the file into its variables.
    pub fn into_vars(self) -> HashMap<String, String> {
        self.vars
    }
}

/// `Ok(None)` for blank lines and comments.
fn parse_line(line: &str) -> Result<Option<(String, String)>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let assignment = trimmed.strip_prefix("export ").unwrap_or(trimmed);

    let (key, raw_value) = assignment
        .split_once('=')
        .ok_or_else(|| "Invalid dotenv line, missing '='".to_string())?;

    if key.is_empty() {
        return Err("Invalid dotenv line, missing key".to_string());
    }
    if key.ends_with(char::is_whitespace) || raw_value.starts_with(char::is_whitespace) {
        return Err("Whitespace around '=' is not allowed".to_string());
    }
    if !is_valid_key(key) {
        return Err(format!("Invalid dotenv variable name '{key}'"));
    }

    Ok(Some((key.to_string(), unquote(raw_value)?.to_string())))
}

fn unquote(value: &str) -> Result<&str, String> {
    let Some(quote) = value.chars().next().filter(|ch| *ch == '"' || *ch == '\'') else {
        return Ok(value);
    };
    if value.len() == 1 || !value.ends_with(quote) {
        return Err("Invalid quoted value".to_string());
    }
    Ok(&value[1..value.len() - 1])
}

fn is_valid_key(key: &str) -> bool {
    key.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn now_utc_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Reads a UTF-8 text document, returning its content and SHA-256 digest.
pub fn read_text_document(path: &Path) -> Result<(String, String)> {
    let raw =
        fs::read(path).with_context(|| format!("failed to read input: {}", path.display()))?;
    let digest = format!("{:x}", Sha256::digest(&raw));
    let text = String::from_utf8(raw)
        .with_context(|| format!("input is not valid UTF-8: {}", path.display()))?;

    Ok((text, digest))
}

pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let data = serde_json::to_vec_pretty(value)
        .with_context(|| format!("failed to serialize json: {}", path.display()))?;

    let mut file = File::create(path)
        .with_context(|| format!("failed to create json file: {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("failed to write json file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize json file: {}", path.display()))?;

    Ok(())
}

/// Shortens text to `max_chars` characters for log output.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<&str>>().join(" ");
    if flat.chars().count() > max_chars {
        flat.chars().take(max_chars).collect::<String>() + "..."
    } else {
        flat
    }
}

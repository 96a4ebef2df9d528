use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{parse_context, with_store_context};

/// A pretty-printed JSON document on disk, written with a trailing newline
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document, or `None` if the file doesn't exist.
    pub fn read_opt(&self, data_type: &str) -> Result<Option<Value>> {
        if !self.exists() {
            return Ok(None);
        }

        let json = with_store_context(fs::read_to_string(&self.path), "read", &self.path)?;
        let value = serde_json::from_str(&json).with_context(|| {
            format!(
                "{}. First 200 chars: {}",
                parse_context(data_type, &self.path),
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(value))
    }

    pub fn read(&self, data_type: &str) -> Result<Value> {
        self.read_opt(data_type)?
            .with_context(|| format!("Missing {} file: {}", data_type, self.path.display()))
    }

    pub fn write<T: Serialize>(&self, data: &T) -> Result<()> {
        let mut json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            with_store_context(fs::create_dir_all(parent), "create directory for", &self.path)?;
        }
        with_store_context(fs::write(&self.path, json), "write", &self.path)?;

        info!("Saved {}", self.path.display());
        Ok(())
    }
}

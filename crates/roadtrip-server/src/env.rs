//! Snapshot of the process environment, optionally overlaid with a `.env`
//! file. Lookups made by the server (listener selection, `{{env}}` in
//! templates) go through this snapshot rather than `std::env`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Empty string for unset keys.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Apply `KEY=VALUE` lines. Each line is split on its first `=`; a line
    /// without one sets the key to the empty string. Blank lines and `#`
    /// comments are skipped.
    pub fn apply_dotenv(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            self.set(key, value);
        }
    }

    /// Find the nearest `.env` walking up from `start` and apply it.
    /// Returns the file used, if any.
    pub fn load_dotenv(&mut self, start: &Path) -> io::Result<Option<PathBuf>> {
        let Some(path) = locate_dotenv(start) else {
            return Ok(None);
        };
        let contents = std::fs::read_to_string(&path)?;
        self.apply_dotenv(&contents);
        Ok(Some(path))
    }
}

fn locate_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

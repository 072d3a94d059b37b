//! Minimal page templates.
//!
//! A page is `templates/<name>`, preceded by every file in
//! `templates/_layout/` in file-name order. Directives:
//!
//! - `{{title}}`, `{{content}}`: page data, HTML-escaped
//! - `{{env "NAME"}}`: variable from the server environment, HTML-escaped
//! - `{{static "path"}}`: `/static/path?t=<content hash>`
//!
//! Template sources and static URLs are cached until [`TemplateEngine::clear_cache`]
//! unless the engine runs in debug mode.

use crate::env::Environment;
use fnv::FnvHasher;
use std::collections::HashMap;
use std::hash::Hasher;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

const TEMPLATES_DIR: &str = "templates";
const LAYOUTS_DIR: &str = "_layout";
const STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {name}: unknown directive `{directive}`")]
    UnknownDirective { name: String, directive: String },
    #[error("template {name}: unterminated directive")]
    Unterminated { name: String },
    #[error("invalid path {0:?}")]
    InvalidPath(String),
}

/// Data a page is rendered with.
#[derive(Clone, Debug, Default)]
pub struct PageData {
    pub title: String,
    pub content: String,
}

pub struct TemplateEngine {
    root: PathBuf,
    debug: bool,
    env: Environment,
    sources: Mutex<HashMap<String, String>>,
    static_urls: Mutex<HashMap<String, String>>,
}

impl TemplateEngine {
    pub fn new(root: impl Into<PathBuf>, debug: bool, env: Environment) -> Self {
        Self {
            root: root.into(),
            debug,
            env,
            sources: Mutex::new(HashMap::new()),
            static_urls: Mutex::new(HashMap::new()),
        }
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(STATIC_DIR)
    }

    pub fn render(&self, name: &str, data: &PageData) -> Result<String, TemplateError> {
        let source = self.source(name)?;
        let mut out = String::with_capacity(source.len());
        let mut rest = source.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| TemplateError::Unterminated {
                name: name.to_string(),
            })?;
            self.expand(name, after[..end].trim(), data, &mut out)?;
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Cache-busting URL for a file under `static/`.
    pub fn static_url(&self, name: &str) -> Result<String, TemplateError> {
        let name = name.trim_start_matches('/');
        if !self.debug {
            if let Some(url) = lock(&self.static_urls).get(name) {
                return Ok(url.clone());
            }
        }
        let path = safe_join(&self.static_dir(), name)?;
        let bytes = std::fs::read(&path).map_err(|source| TemplateError::Io { path, source })?;
        let mut hasher = FnvHasher::default();
        hasher.write(&bytes);
        let url = format!("/{}/{}?t={:016x}", STATIC_DIR, name, hasher.finish());
        if !self.debug {
            lock(&self.static_urls).insert(name.to_string(), url.clone());
        }
        Ok(url)
    }

    pub fn clear_cache(&self) {
        lock(&self.sources).clear();
        lock(&self.static_urls).clear();
        log::info!("[templates] cache cleared");
    }

    fn source(&self, name: &str) -> Result<String, TemplateError> {
        if !self.debug {
            if let Some(src) = lock(&self.sources).get(name) {
                return Ok(src.clone());
            }
        }
        let src = self.load(name)?;
        if !self.debug {
            lock(&self.sources).insert(name.to_string(), src.clone());
        }
        Ok(src)
    }

    fn load(&self, name: &str) -> Result<String, TemplateError> {
        let templates = self.root.join(TEMPLATES_DIR);
        let mut src = String::new();

        let layouts = templates.join(LAYOUTS_DIR);
        if layouts.is_dir() {
            let read_dir = std::fs::read_dir(&layouts).map_err(|source| TemplateError::Io {
                path: layouts.clone(),
                source,
            })?;
            let mut files: Vec<PathBuf> = read_dir
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            files.sort();
            for path in files {
                src.push_str(&read(&path)?);
            }
        }

        let page = safe_join(&templates, name)?;
        src.push_str(&read(&page)?);
        Ok(src)
    }

    fn expand(
        &self,
        name: &str,
        directive: &str,
        data: &PageData,
        out: &mut String,
    ) -> Result<(), TemplateError> {
        let unknown = || TemplateError::UnknownDirective {
            name: name.to_string(),
            directive: directive.to_string(),
        };
        let (func, arg) = match directive.split_once(char::is_whitespace) {
            Some((func, arg)) => (func, Some(unquote(arg.trim()).ok_or_else(unknown)?)),
            None => (directive, None),
        };
        match (func, arg) {
            ("title", None) => escape_into(&data.title, out),
            ("content", None) => escape_into(&data.content, out),
            ("env", Some(key)) => escape_into(self.env.get_or_empty(key), out),
            ("static", Some(path)) => out.push_str(&self.static_url(path)?),
            _ => return Err(unknown()),
        }
        Ok(())
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn read(path: &Path) -> Result<String, TemplateError> {
    std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn unquote(s: &str) -> Option<&str> {
    s.strip_prefix('"')?.strip_suffix('"')
}

// Only plain relative components; no `..`, no absolute paths.
fn safe_join(base: &Path, name: &str) -> Result<PathBuf, TemplateError> {
    let rel = Path::new(name);
    let plain = !name.is_empty() && rel.components().all(|c| matches!(c, Component::Normal(_)));
    if !plain {
        return Err(TemplateError::InvalidPath(name.to_string()));
    }
    Ok(base.join(rel))
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

//! Placeholder substitution
//!
//! Scans materialized files for `<=TOKEN>`-style markers and replaces each
//! distinct marker with an operator-supplied value. A file is rewritten at
//! most once, and only after every prompt for it has resolved.

use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use walkdir::WalkDir;

use crate::error::Result;
use crate::prompt::{InputConfig, PromptProvider};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"<=[^<>\n]*>").unwrap())
}

pub struct PlaceholderSubstitutor<'a> {
    prompt: &'a dyn PromptProvider,
    /// Extension allow-list, entries carry the leading dot
    exts: Vec<String>,
    /// When non-empty, only these file names are eligible
    files: Vec<String>,
}

impl<'a> PlaceholderSubstitutor<'a> {
    pub fn new(
        prompt: &'a dyn PromptProvider,
        exts: Vec<String>,
        files: Vec<String>,
    ) -> Self {
        Self { prompt, exts, files }
    }

    /// Substitutes placeholders in every eligible file reachable from the
    /// given paths, strictly sequentially.
    pub fn substitute(&self, paths: &[&Path]) -> Result<()> {
        for path in paths {
            self.substitute_entry(path)?;
        }
        Ok(())
    }

    fn substitute_entry(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    std::io::Error::other(format!(
                        "cannot walk '{}': {e}",
                        path.display()
                    ))
                })?;
                if entry.file_type().is_file() && self.is_eligible(entry.path()) {
                    self.substitute_file(entry.path())?;
                }
            }
            Ok(())
        } else if self.is_eligible(path) {
            self.substitute_file(path)
        } else {
            Ok(())
        }
    }

    fn is_eligible(&self, path: &Path) -> bool {
        let by_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| self.exts.iter().any(|allowed| allowed.trim_start_matches('.') == e))
            .unwrap_or(false);
        if !by_ext {
            return false;
        }
        if self.files.is_empty() {
            return true;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.files.iter().any(|f| f == n))
            .unwrap_or(false)
    }

    /// Collects every distinct marker in the file, asks for a replacement
    /// value per marker, then rewrites the file once. Files without markers
    /// are never rewritten.
    fn substitute_file(&self, path: &Path) -> Result<()> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                log::debug!("Skipping non-text file '{}'", path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut replacements: IndexMap<String, String> = IndexMap::new();
        for matched in placeholder_regex().find_iter(&content) {
            let marker = matched.as_str().to_string();
            if replacements.contains_key(&marker) {
                continue;
            }
            let suggested = inner_token(&marker);
            let value = self.prompt.prompt_input(&InputConfig {
                prompt: format!("[{suggested}] replace to"),
                default: Some(suggested),
            })?;
            replacements.insert(marker, value);
        }

        if replacements.is_empty() {
            return Ok(());
        }

        let mut updated = content;
        for (marker, value) in &replacements {
            updated = updated.replace(marker, value);
        }
        log::info!("Substituting {} placeholder(s) in '{}'", replacements.len(), path.display());
        std::fs::write(path, updated)?;
        Ok(())
    }
}

/// Trimmed inner text of a marker: `<= NAME >` yields `NAME`.
fn inner_token(marker: &str) -> String {
    marker
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '='))
        .collect::<String>()
        .trim()
        .to_string()
}

//! Template catalog construction
//!
//! Merges a directory listing of templates with optional descriptor metadata
//! into canonical `TemplateDescriptor` records. Filesystem presence
//! determines ordering; configuration annotates matching entries or appends
//! package-backed ones.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::{load_config_file, ConfigDescriptor};
use crate::constants::CONFIG_BASENAME;
use crate::error::Result;
use crate::ioutils::read_dir_sorted;

/// A named unit of scaffolding content, either a local directory or a
/// registry package.
///
/// Identified by exactly one of `name` (filesystem-backed) or `npm_name`
/// (package-backed); `path` is populated once a filesystem source is known.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDescriptor {
    pub name: Option<String>,
    pub npm_name: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    /// Pins the installed package version for package-backed templates
    pub version: Option<String>,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl TemplateDescriptor {
    /// Key used to match a config entry against a directory entry.
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().or(self.npm_name.as_deref())
    }

    /// Name shown in the selection prompt: label over name over package name.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.name.as_deref())
            .or(self.npm_name.as_deref())
            .unwrap_or("<unnamed>")
    }

    /// Merges config metadata into a directory-derived descriptor. Config
    /// fields win where set; the filesystem identity (`name`, `path`) stays.
    fn merge_config(&mut self, config_entry: TemplateDescriptor) {
        if config_entry.npm_name.is_some() {
            self.npm_name = config_entry.npm_name;
        }
        if config_entry.label.is_some() {
            self.label = config_entry.label;
        }
        if config_entry.description.is_some() {
            self.description = config_entry.description;
        }
        if config_entry.version.is_some() {
            self.version = config_entry.version;
        }
    }
}

/// Builds canonical descriptors from a directory listing and optional config.
///
/// Directory entries come first, in scan order, each annotated by the config
/// entry sharing its key. Config entries that matched are consumed; the
/// remaining ones that declare a package name are appended afterwards with
/// `name = npm_name`, so package-only templates show up exactly once.
pub fn get_template_infos(
    entries: &[String],
    current_path: &Path,
    config: Option<&ConfigDescriptor>,
) -> Vec<TemplateDescriptor> {
    let mut config_by_key: IndexMap<String, TemplateDescriptor> = IndexMap::new();
    if let Some(config) = config {
        for entry in &config.templates {
            if let Some(key) = entry.key() {
                config_by_key.insert(key.to_string(), entry.clone());
            }
        }
    }

    let mut result = Vec::new();
    for file_name in entries {
        let mut descriptor = TemplateDescriptor {
            name: Some(file_name.clone()),
            path: Some(current_path.join(file_name)),
            ..Default::default()
        };
        if let Some(config_entry) = config_by_key.shift_remove(file_name.as_str()) {
            descriptor.merge_config(config_entry);
        }
        result.push(descriptor);
    }

    for (_, config_entry) in config_by_key {
        if let Some(npm_name) = config_entry.npm_name.clone() {
            result.push(TemplateDescriptor {
                name: Some(npm_name),
                path: None,
                ..config_entry
            });
        }
    }

    result
}

/// Scans one template source directory: discovers and loads the config entry
/// (by substring match against the fixed basename token), excludes it from
/// the listing, and merges the rest into descriptors.
///
/// Returns the descriptors plus the loaded config, which downstream
/// substitution needs for its allow-lists. A config that fails to load is
/// demoted to "no metadata" with a warning.
pub fn scan_source(
    root: &Path,
    config_override: Option<&Path>,
) -> Result<(Vec<TemplateDescriptor>, Option<ConfigDescriptor>)> {
    if !root.is_dir() {
        return Ok((Vec::new(), None));
    }

    let mut entries = read_dir_sorted(root)?;

    let config_path = match config_override {
        Some(path) if path.is_absolute() => Some(path.to_path_buf()),
        Some(path) => Some(root.join(path)),
        None => entries
            .iter()
            .position(|name| name.contains(CONFIG_BASENAME))
            .map(|index| root.join(entries.remove(index))),
    };
    // An overridden config may still sit inside the listing; drop it there too.
    if let Some(override_path) = config_override {
        let override_name =
            override_path.file_name().and_then(|n| n.to_str()).map(String::from);
        entries.retain(|name| {
            !name.contains(CONFIG_BASENAME) && Some(name) != override_name.as_ref()
        });
    }

    let config = match config_path {
        Some(path) => match load_config_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring template config: {e}");
                None
            }
        },
        None => None,
    };

    let descriptors = get_template_infos(&entries, root, config.as_ref());
    Ok((descriptors, config))
}

/// Root of the built-in template collection: the `STAMP_TEMPLATES`
/// environment override, else a `template` directory beside the executable.
pub fn builtin_template_root() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(crate::constants::TEMPLATES_ENV_VAR) {
        return Some(PathBuf::from(dir));
    }
    std::env::current_exe()
        .ok()?
        .parent()
        .map(|dir| dir.join(crate::constants::TEMPLATE_DIR_NAME))
}

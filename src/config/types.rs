//! Configuration descriptor schema

use serde::Deserialize;

use crate::catalog::TemplateDescriptor;

/// Optional configuration descriptor discovered in a template root.
///
/// Field names on the wire are camelCase so that descriptors written for the
/// original tool keep loading unchanged.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigDescriptor {
    /// Extensions eligible for placeholder substitution; empty means the
    /// built-in allow-list applies
    pub parse_file_exts: Vec<String>,
    /// When non-empty, restricts substitution to these file names
    pub parse_files: Vec<String>,
    /// Metadata entries merged over the directory listing, and package-backed
    /// templates with no local directory presence
    pub templates: Vec<TemplateDescriptor>,
}

impl ConfigDescriptor {
    /// Extension allow-list with the built-in default applied.
    pub fn parse_exts(&self) -> Vec<String> {
        if self.parse_file_exts.is_empty() {
            crate::constants::DEFAULT_PARSE_EXTS.iter().map(|e| e.to_string()).collect()
        } else {
            self.parse_file_exts.clone()
        }
    }
}

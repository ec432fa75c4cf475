//! Configuration loading
//!
//! Two artifact forms are supported, decided by file extension:
//! - data form: `.json`, `.yaml`, `.yml` parsed directly
//! - rendered form: `.j2` files are rendered through an isolated MiniJinja
//!   environment into a uniquely named temporary artifact, parsed from there
//!   by the inner extension, and the artifact is removed on every exit path

use std::io::Write;
use std::path::Path;

use minijinja::Environment;
use serde_json::json;

use crate::config::types::ConfigDescriptor;
use crate::error::{Error, Result};

/// Loads a configuration descriptor from the given path.
///
/// # Returns
/// * `Ok(Some(config))` - the file parsed into a descriptor
/// * `Ok(None)` - the extension is not a recognized config form
/// * `Err(ConfigLoadError)` - a recognized form failed to load
///
/// Callers treat a load failure as "no metadata": they log a warning and
/// continue without descriptor data.
pub fn load_config_file(config_path: &Path) -> Result<Option<ConfigDescriptor>> {
    match config_path.extension().and_then(|e| e.to_str()) {
        Some(extension @ ("json" | "yaml" | "yml")) => {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| load_error(config_path, e))?;
            parse_by_extension(config_path, extension, &content).map(Some)
        }
        Some("j2") => load_rendered_config(config_path).map(Some),
        _ => Ok(None),
    }
}

/// Loads a `.j2` config: render, persist to a temporary artifact, parse the
/// artifact, delete it. `NamedTempFile` guarantees deletion on every exit
/// path, including parse failures.
fn load_rendered_config(config_path: &Path) -> Result<ConfigDescriptor> {
    let template = std::fs::read_to_string(config_path)
        .map_err(|e| load_error(config_path, e))?;

    // Isolated environment: platform facts are the only ambient context.
    let mut env = Environment::new();
    env.add_template("config", &template).map_err(|e| load_error(config_path, e))?;
    let context = json!({
        "platform": {
            "os": std::env::consts::OS,
            "family": std::env::consts::FAMILY,
            "arch": std::env::consts::ARCH,
        }
    });
    let rendered = env
        .get_template("config")
        .and_then(|t| t.render(&context))
        .map_err(|e| load_error(config_path, e))?;

    // The inner extension names the data form: stamp.config.yaml.j2 -> yaml
    let inner_ext = config_path
        .file_stem()
        .map(Path::new)
        .and_then(|stem| stem.extension())
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::ConfigLoadError {
            path: config_path.display().to_string(),
            reason: "rendered config has no inner data extension".to_string(),
        })?
        .to_string();

    let mut artifact = tempfile::Builder::new()
        .prefix("stamp-config-")
        .suffix(&format!(".{inner_ext}"))
        .tempfile()
        .map_err(|e| load_error(config_path, e))?;
    artifact.write_all(rendered.as_bytes()).map_err(|e| load_error(config_path, e))?;

    let content = std::fs::read_to_string(artifact.path())
        .map_err(|e| load_error(config_path, e))?;
    parse_by_extension(config_path, &inner_ext, &content)
}

fn parse_by_extension(
    config_path: &Path,
    extension: &str,
    content: &str,
) -> Result<ConfigDescriptor> {
    match extension {
        "json" => serde_json::from_str(content).map_err(|e| load_error(config_path, e)),
        "yaml" | "yml" => {
            serde_yaml::from_str(content).map_err(|e| load_error(config_path, e))
        }
        other => Err(Error::ConfigLoadError {
            path: config_path.display().to_string(),
            reason: format!("unsupported config data form '.{other}'"),
        }),
    }
}

fn load_error<E: std::fmt::Display>(config_path: &Path, e: E) -> Error {
    Error::ConfigLoadError {
        path: config_path.display().to_string(),
        reason: e.to_string(),
    }
}

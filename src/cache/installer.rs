//! Package installation through the external package manager

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Trait for installing a package into the cache directory.
pub trait PackageInstaller {
    /// Installs `package` at `version` (latest when absent) with `cache_dir`
    /// as working directory. The installed tree must land under
    /// `<cache_dir>/node_modules/<package>` and the cache manifest must
    /// record the version.
    fn install(&self, cache_dir: &Path, package: &str, version: Option<&str>)
        -> Result<()>;
}

/// Installer shelling out to npm.
#[derive(Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }

    fn run_npm(cache_dir: &Path, package: &str, args: &[&str]) -> Result<Output> {
        log::debug!("Running 'npm {}' in '{}'", args.join(" "), cache_dir.display());
        Command::new("npm").args(args).current_dir(cache_dir).output().map_err(|e| {
            Error::PackageInstallError {
                package: package.to_string(),
                detail: format!("failed to spawn npm: {e}"),
            }
        })
    }

    fn check(package: &str, output: Output) -> Result<()> {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() || !stderr.trim().is_empty() {
            return Err(Error::PackageInstallError {
                package: package.to_string(),
                detail: if stderr.trim().is_empty() {
                    format!("npm exited with {}", output.status)
                } else {
                    stderr.trim().to_string()
                },
            });
        }
        Ok(())
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(
        &self,
        cache_dir: &Path,
        package: &str,
        version: Option<&str>,
    ) -> Result<()> {
        // A fresh cache directory needs a manifest before the first install.
        if !cache_dir.join("package.json").exists() {
            let output = Self::run_npm(cache_dir, package, &["init", "-y"])?;
            Self::check(package, output)?;
        }

        let spec = format!("{package}@{}", version.unwrap_or("latest"));
        let output = Self::run_npm(cache_dir, package, &["install", &spec])?;
        Self::check(package, output)
    }
}

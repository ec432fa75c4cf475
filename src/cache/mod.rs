//! Version-aware on-disk package cache
//!
//! Package-backed templates resolve through a persistent cache directory
//! under the OS temp dir. The cache manifest records installed versions;
//! version drift triggers a reinstall. Registry unavailability is never
//! fatal: resolution degrades to whatever version is cached.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ioutils;

pub mod installer;
pub mod registry;

pub use installer::{NpmInstaller, PackageInstaller};
pub use registry::{HttpRegistry, RegistryClient};

/// Persistent package cache keyed by package name.
///
/// The cache directory, registry client and installer are injected, so tests
/// run against a scratch directory with scripted fakes.
pub struct PackageCache<'a> {
    cache_dir: PathBuf,
    registry: &'a dyn RegistryClient,
    installer: &'a dyn PackageInstaller,
}

impl<'a> PackageCache<'a> {
    pub fn new(
        cache_dir: PathBuf,
        registry: &'a dyn RegistryClient,
        installer: &'a dyn PackageInstaller,
    ) -> Self {
        Self { cache_dir, registry, installer }
    }

    /// Default cache location: `<tmp-dir>/stamp-cache`.
    pub fn default_dir() -> PathBuf {
        std::env::temp_dir().join(crate::constants::CACHE_DIR_NAME)
    }

    /// Resolves a package-backed template to a local filesystem path,
    /// installing or upgrading when needed.
    pub fn resolve(&self, package: &str, version: Option<&str>) -> Result<PathBuf> {
        let package_path = self.cache_dir.join("node_modules").join(package);

        if !self.cache_dir.exists() {
            log::debug!("Initializing package cache at '{}'", self.cache_dir.display());
            ioutils::create_dir_all(&self.cache_dir)?;
            self.installer.install(&self.cache_dir, package, version)?;
            return Ok(package_path);
        }

        match self.installed_version(package) {
            Some(current) => self.refresh(package, version, &current)?,
            None => self.installer.install(&self.cache_dir, package, version)?,
        }

        Ok(package_path)
    }

    /// Reinstalls when the requested or latest version differs from the
    /// recorded one.
    fn refresh(&self, package: &str, version: Option<&str>, current: &str) -> Result<()> {
        if let Some(requested) = version {
            if requested != current {
                log::info!(
                    "Cached '{package}' is {current}, reinstalling at {requested}"
                );
                self.installer.install(&self.cache_dir, package, Some(requested))?;
            }
            return Ok(());
        }

        match self.registry.latest_version(package) {
            Ok(Some(latest)) if latest != current => {
                log::info!("Cached '{package}' is {current}, upgrading to {latest}");
                self.installer.install(&self.cache_dir, package, None)
            }
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                log::warn!(
                    "Could not determine the latest version of '{package}', using cached {current}"
                );
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}; using cached {current}");
                Ok(())
            }
        }
    }

    /// Version recorded for the package in the cache manifest, if any.
    fn installed_version(&self, package: &str) -> Option<String> {
        let manifest_path = self.cache_dir.join("package.json");
        let content = std::fs::read_to_string(manifest_path).ok()?;
        let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
        manifest
            .get("dependencies")
            .and_then(|dependencies| dependencies.get(package))
            .and_then(|version| version.as_str())
            .map(String::from)
    }
}

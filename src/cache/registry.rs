//! Registry metadata lookup

use crate::error::{Error, Result};

/// Trait for querying a package registry for version metadata.
pub trait RegistryClient {
    /// Latest published version of a package.
    ///
    /// # Returns
    /// * `Ok(Some(version))` - the registry reported a latest dist-tag
    /// * `Ok(None)` - the package has no latest dist-tag
    /// * `Err(RegistryLookupError)` - the registry was unreachable
    ///
    /// Callers degrade both `Ok(None)` and `Err` to the cached version.
    fn latest_version(&self, package: &str) -> Result<Option<String>>;
}

/// Registry client backed by the package registry's HTTP metadata endpoint.
pub struct HttpRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRegistry {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self { base_url: base_url.into(), client: reqwest::blocking::Client::new() }
    }

    fn lookup_error<E: std::fmt::Display>(package: &str, e: E) -> Error {
        Error::RegistryLookupError { package: package.to_string(), reason: e.to_string() }
    }
}

impl Default for HttpRegistry {
    fn default() -> Self {
        Self::new(crate::constants::REGISTRY_BASE_URL)
    }
}

impl RegistryClient for HttpRegistry {
    fn latest_version(&self, package: &str) -> Result<Option<String>> {
        let url = format!("{}/{package}", self.base_url.trim_end_matches('/'));
        log::debug!("Querying registry metadata at '{url}'");

        let metadata: serde_json::Value = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| Self::lookup_error(package, e))?
            .json()
            .map_err(|e| Self::lookup_error(package, e))?;

        Ok(metadata
            .get("dist-tags")
            .and_then(|tags| tags.get("latest"))
            .and_then(|latest| latest.as_str())
            .map(String::from))
    }
}

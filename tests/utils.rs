use std::cell::RefCell;
use std::path::Path;

use stamp::cache::{PackageInstaller, RegistryClient};
use stamp::error::{Error, Result};
use stamp::prompt::{
    ConfirmConfig, ConfirmPrompter, InputConfig, InputPrompter, SelectConfig,
    SelectPrompter,
};

/// One scripted answer for the next prompt, whatever its kind.
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Input(String),
    Confirm(bool),
}

/// Prompt provider that replays a fixed script of answers. Panics when the
/// engine asks a question the script did not anticipate, which is exactly
/// what an integration test wants to catch.
pub struct ScriptedPrompter {
    answers: RefCell<Vec<Answer>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers) }
    }

    fn next(&self, kind: &str) -> Answer {
        let mut answers = self.answers.borrow_mut();
        assert!(!answers.is_empty(), "unexpected extra {kind} prompt");
        answers.remove(0)
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }
}

impl SelectPrompter for ScriptedPrompter {
    fn prompt_select(&self, _config: &SelectConfig) -> Result<usize> {
        match self.next("select") {
            Answer::Select(index) => Ok(index),
            other => panic!("expected a Select answer, script had {other:?}"),
        }
    }
}

impl InputPrompter for ScriptedPrompter {
    fn prompt_input(&self, config: &InputConfig) -> Result<String> {
        match self.next("input") {
            Answer::Input(value) => Ok(value),
            Answer::Confirm(_) => panic!("expected an Input answer for '{}'", config.prompt),
            Answer::Select(_) => panic!("expected an Input answer for '{}'", config.prompt),
        }
    }
}

impl ConfirmPrompter for ScriptedPrompter {
    fn prompt_confirm(&self, _config: &ConfirmConfig) -> Result<bool> {
        match self.next("confirm") {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected a Confirm answer, script had {other:?}"),
        }
    }
}

/// Registry fake reporting a fixed latest version.
pub struct FixedRegistry {
    pub latest: Option<String>,
}

impl RegistryClient for FixedRegistry {
    fn latest_version(&self, _package: &str) -> Result<Option<String>> {
        Ok(self.latest.clone())
    }
}

/// Installer fake that lays out a package the way npm would: cache manifest
/// plus `node_modules/<package>/template` populated with the given files.
pub struct FakeNpmInstaller {
    pub version: String,
    pub template_files: Vec<(String, String)>,
    pub installs: RefCell<usize>,
}

impl FakeNpmInstaller {
    pub fn new(version: &str, template_files: &[(&str, &str)]) -> Self {
        Self {
            version: version.to_string(),
            template_files: template_files
                .iter()
                .map(|(name, content)| (name.to_string(), content.to_string()))
                .collect(),
            installs: RefCell::new(0),
        }
    }
}

impl PackageInstaller for FakeNpmInstaller {
    fn install(
        &self,
        cache_dir: &Path,
        package: &str,
        version: Option<&str>,
    ) -> Result<()> {
        *self.installs.borrow_mut() += 1;
        let installed = version.unwrap_or(self.version.as_str());
        let manifest = serde_json::json!({ "dependencies": { package: installed } });
        std::fs::write(cache_dir.join("package.json"), manifest.to_string())
            .map_err(Error::IoError)?;

        let template_dir = cache_dir.join("node_modules").join(package).join("template");
        std::fs::create_dir_all(&template_dir).map_err(Error::IoError)?;
        for (name, content) in &self.template_files {
            std::fs::write(template_dir.join(name), content).map_err(Error::IoError)?;
        }
        Ok(())
    }
}

/// Installer that refuses every install.
pub struct BrokenInstaller;

impl PackageInstaller for BrokenInstaller {
    fn install(&self, _cache_dir: &Path, package: &str, _version: Option<&str>) -> Result<()> {
        Err(Error::PackageInstallError {
            package: package.to_string(),
            detail: "simulated npm failure".to_string(),
        })
    }
}

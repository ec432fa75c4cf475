//! Template selection and generation workflow
//!
//! Data flow is strictly linear per invocation: catalog -> selection ->
//! resolution -> materialization -> substitution. Every interactive step
//! happens one at a time; nothing is parallelized across templates or cache
//! installs.

use std::path::{Path, PathBuf};

use crate::{
    cache::{HttpRegistry, NpmInstaller, PackageCache, PackageInstaller, RegistryClient},
    catalog::{self, scan_source, TemplateDescriptor},
    cli::TemplateArgs,
    config::ConfigDescriptor,
    constants::{PACKAGE_TEMPLATE_DIR, TEMPLATE_DIR_NAME},
    error::{Error, Result},
    ioutils,
    prompt::{get_prompt_provider, InputConfig, PromptProvider, SelectConfig},
    template::{CopyOptions, Materializer, PlaceholderSubstitutor},
};

pub struct Runner<'a> {
    args: TemplateArgs,
    prompt: &'a dyn PromptProvider,
    registry: &'a dyn RegistryClient,
    installer: &'a dyn PackageInstaller,
    builtin_root: Option<PathBuf>,
    cache_dir: PathBuf,
}

impl<'a> Runner<'a> {
    pub fn new(
        args: TemplateArgs,
        prompt: &'a dyn PromptProvider,
        registry: &'a dyn RegistryClient,
        installer: &'a dyn PackageInstaller,
        builtin_root: Option<PathBuf>,
        cache_dir: PathBuf,
    ) -> Self {
        Self { args, prompt, registry, installer, builtin_root, cache_dir }
    }

    /// Executes the complete template generation workflow.
    pub fn run(self) -> Result<()> {
        let (builtin, builtin_config) = match &self.builtin_root {
            Some(root) => scan_source(root, None)?,
            None => (Vec::new(), None),
        };

        let custom_root = match &self.args.template {
            Some(dir) => ioutils::absolutize(dir),
            None => ioutils::absolutize(TEMPLATE_DIR_NAME),
        };
        let (custom, custom_config) =
            scan_source(&custom_root, self.args.config.as_deref())?;

        if builtin.is_empty() && custom.is_empty() {
            return Err(Error::TemplateNotFound {
                selection: "no template source has any entries".to_string(),
            });
        }

        let (descriptor, config) =
            self.select_template(&builtin, &builtin_config, &custom, &custom_config)?;

        let target_dir = self.ask_target_dir()?;
        let source_path = self.resolve_source(descriptor)?;

        let materializer =
            Materializer::new(self.prompt, self.args.should_skip_overwrite_prompts());
        ioutils::create_dir_all(&target_dir)?;
        let written = materializer.copy(
            &source_path,
            &target_dir,
            CopyOptions { contents: source_path.is_dir() },
        )?;

        if written.is_empty() {
            println!("Nothing was materialized, command ends without writing.");
            return Ok(());
        }

        let (exts, files) = substitution_lists(config);
        let substitutor = PlaceholderSubstitutor::new(self.prompt, exts, files);
        let written_paths: Vec<&Path> =
            written.iter().map(|entry| entry.target.as_path()).collect();
        substitutor.substitute(&written_paths)?;

        println!(
            "Template generation completed successfully in '{}'.",
            target_dir.display()
        );
        Ok(())
    }

    /// Prompts for one template across both sources. Built-in entries come
    /// first, project entries after, each annotated with its origin.
    fn select_template<'b>(
        &self,
        builtin: &'b [TemplateDescriptor],
        builtin_config: &'b Option<ConfigDescriptor>,
        custom: &'b [TemplateDescriptor],
        custom_config: &'b Option<ConfigDescriptor>,
    ) -> Result<(&'b TemplateDescriptor, &'b Option<ConfigDescriptor>)> {
        let mut items: Vec<String> = Vec::new();
        for descriptor in builtin {
            items.push(selection_item(descriptor, "built-in"));
        }
        for descriptor in custom {
            items.push(selection_item(descriptor, "project"));
        }

        let index = self.prompt.prompt_select(&SelectConfig {
            prompt: "Select a template".to_string(),
            items,
            default_index: 0,
        })?;

        if index < builtin.len() {
            Ok((&builtin[index], builtin_config))
        } else {
            Ok((&custom[index - builtin.len()], custom_config))
        }
    }

    fn ask_target_dir(&self) -> Result<PathBuf> {
        let current_dir = std::env::current_dir().unwrap_or_default();
        let answer = self.prompt.prompt_input(&InputConfig {
            prompt: "Please enter the template generation path".to_string(),
            default: Some(current_dir.display().to_string()),
        })?;
        Ok(ioutils::absolutize(answer))
    }

    /// Resolves the selected descriptor to a filesystem path: the local
    /// directory when present, otherwise the package cache plus the
    /// package-contents subdirectory.
    fn resolve_source(&self, descriptor: &TemplateDescriptor) -> Result<PathBuf> {
        if let Some(path) = &descriptor.path {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(Error::TemplateNotFound {
                selection: path.display().to_string(),
            });
        }

        if let Some(package) = &descriptor.npm_name {
            let cache =
                PackageCache::new(self.cache_dir.clone(), self.registry, self.installer);
            let package_path = cache.resolve(package, descriptor.version.as_deref())?;
            let template_path = package_path.join(PACKAGE_TEMPLATE_DIR);
            if !template_path.is_dir() {
                return Err(Error::TemplateNotFound {
                    selection: format!(
                        "package '{package}' has no '{PACKAGE_TEMPLATE_DIR}' directory"
                    ),
                });
            }
            return Ok(template_path);
        }

        Err(Error::TemplateNotFound {
            selection: descriptor.display_label().to_string(),
        })
    }
}

fn selection_item(descriptor: &TemplateDescriptor, origin: &str) -> String {
    match &descriptor.description {
        Some(description) => {
            format!("{} ({origin}) - {description}", descriptor.display_label())
        }
        None => format!("{} ({origin})", descriptor.display_label()),
    }
}

/// Extension and file-name allow-lists for substitution, from the selected
/// source's config when present.
fn substitution_lists(config: &Option<ConfigDescriptor>) -> (Vec<String>, Vec<String>) {
    match config {
        Some(config) => (config.parse_exts(), config.parse_files.clone()),
        None => (ConfigDescriptor::default().parse_exts(), Vec::new()),
    }
}

/// Main entry point for CLI execution with production wiring.
pub fn run(args: TemplateArgs) -> Result<()> {
    let prompt = get_prompt_provider();
    let registry = HttpRegistry::default();
    let installer = NpmInstaller::new();
    let runner = Runner::new(
        args,
        &prompt,
        &registry,
        &installer,
        catalog::builtin_template_root(),
        PackageCache::default_dir(),
    );
    runner.run()
}

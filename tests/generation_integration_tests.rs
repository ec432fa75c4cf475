//! End-to-end tests for the template generation workflow, driven through
//! `Runner` with scripted prompts and fake registry/installer backends.

mod utils;

use std::fs;
use std::path::{Path, PathBuf};

use test_log::test;

use stamp::cli::runner::Runner;
use stamp::cli::TemplateArgs;
use stamp::error::Error;
use tempfile::TempDir;
use utils::{Answer, BrokenInstaller, FakeNpmInstaller, FixedRegistry, ScriptedPrompter};

fn args_with_template(template_root: &Path) -> TemplateArgs {
    TemplateArgs { template: Some(template_root.to_path_buf()), ..Default::default() }
}

fn fixed_registry() -> FixedRegistry {
    FixedRegistry { latest: Some("1.0.0".to_string()) }
}

fn run_runner(
    args: TemplateArgs,
    prompter: &ScriptedPrompter,
    registry: &FixedRegistry,
    installer: &FakeNpmInstaller,
    cache_dir: PathBuf,
) -> stamp::error::Result<()> {
    Runner::new(args, prompter, registry, installer, None, cache_dir).run()
}

#[test]
fn local_template_generation_end_to_end() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    let starter = template_root.join("starter");
    fs::create_dir_all(&starter).unwrap();
    fs::write(starter.join("index.ts"), "export const name = '<=PROJECT_NAME>'\n")
        .unwrap();

    let target = workspace.path().join("out");
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
        Answer::Input("demo".to_string()),
    ]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    run_runner(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &installer,
        workspace.path().join("cache"),
    )
    .unwrap();

    let generated = fs::read_to_string(target.join("index.ts")).unwrap();
    assert_eq!(generated, "export const name = 'demo'\n");
    assert!(prompter.is_exhausted());

    // Nothing besides index.ts was created in the target.
    let entries: Vec<_> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["index.ts"]);
    assert_eq!(*installer.installs.borrow(), 0);
}

#[test]
fn repeated_token_is_prompted_once_across_the_generated_tree() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    let starter = template_root.join("starter");
    fs::create_dir_all(starter.join("src")).unwrap();
    fs::write(starter.join("src/main.ts"), "<=APP>\n<=APP>\n").unwrap();

    let target = workspace.path().join("out");
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
        Answer::Input("shop".to_string()),
    ]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    run_runner(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &installer,
        workspace.path().join("cache"),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(target.join("src/main.ts")).unwrap(),
        "shop\nshop\n"
    );
    assert!(prompter.is_exhausted());
}

#[test]
fn config_metadata_annotates_the_local_listing() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    let widget = template_root.join("widget");
    fs::create_dir_all(&widget).unwrap();
    fs::write(widget.join("widget.ts"), "plain content\n").unwrap();
    fs::write(
        template_root.join("stamp.config.json"),
        r#"{"templates": [{"name": "widget", "label": "Widget", "description": "a widget"}]}"#,
    )
    .unwrap();

    let target = workspace.path().join("out");
    // Only one selectable entry: the config file itself is not a template.
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
    ]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    run_runner(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &installer,
        workspace.path().join("cache"),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(target.join("widget.ts")).unwrap(),
        "plain content\n"
    );
}

#[test]
fn package_backed_template_installs_once_and_reuses_the_cache() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    fs::create_dir_all(&template_root).unwrap();
    fs::write(
        template_root.join("stamp.config.json"),
        r#"{"templates": [{"npmName": "widget-pack"}]}"#,
    )
    .unwrap();

    let registry = fixed_registry();
    let installer =
        FakeNpmInstaller::new("1.0.0", &[("component.ts", "name: <=NAME>\n")]);
    let cache_dir = workspace.path().join("cache");

    for (round, value) in ["demo", "again"].iter().enumerate() {
        let target = workspace.path().join(format!("out-{round}"));
        let prompter = ScriptedPrompter::new(vec![
            Answer::Select(0),
            Answer::Input(target.display().to_string()),
            Answer::Input(value.to_string()),
        ]);

        run_runner(
            args_with_template(&template_root),
            &prompter,
            &registry,
            &installer,
            cache_dir.clone(),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(target.join("component.ts")).unwrap(),
            format!("name: {value}\n")
        );
        assert!(prompter.is_exhausted());
    }

    // Same reported latest both times: the second resolution reuses the cache.
    assert_eq!(*installer.installs.borrow(), 1);
}

#[test]
fn declined_overwrite_ends_without_writing_or_substituting() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    let starter = template_root.join("starter");
    fs::create_dir_all(&starter).unwrap();
    fs::write(starter.join("index.ts"), "new <=NAME>\n").unwrap();

    let target = workspace.path().join("out");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("index.ts"), "old\n").unwrap();

    // Select, target, decline the conflict; no substitution prompt follows.
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
        Answer::Select(1),
    ]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    run_runner(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &installer,
        workspace.path().join("cache"),
    )
    .unwrap();

    assert_eq!(fs::read_to_string(target.join("index.ts")).unwrap(), "old\n");
    assert!(prompter.is_exhausted());
}

#[test]
fn package_install_failure_aborts_that_resolution() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    fs::create_dir_all(&template_root).unwrap();
    fs::write(
        template_root.join("stamp.config.json"),
        r#"{"templates": [{"npmName": "widget-pack"}]}"#,
    )
    .unwrap();

    let target = workspace.path().join("out");
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
    ]);
    let registry = fixed_registry();

    let result = Runner::new(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &BrokenInstaller,
        None,
        workspace.path().join("cache"),
    )
    .run();

    assert!(matches!(result, Err(Error::PackageInstallError { .. })));
    assert!(!target.exists() || fs::read_dir(&target).unwrap().next().is_none());
}

#[test]
fn empty_sources_report_template_not_found() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    fs::create_dir_all(&template_root).unwrap();

    let prompter = ScriptedPrompter::new(vec![]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    let result = run_runner(
        args_with_template(&template_root),
        &prompter,
        &registry,
        &installer,
        workspace.path().join("cache"),
    );

    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
}

#[test]
fn config_override_flag_replaces_discovery() {
    let workspace = TempDir::new().unwrap();
    let template_root = workspace.path().join("template");
    let widget = template_root.join("widget");
    fs::create_dir_all(&widget).unwrap();
    fs::write(widget.join("widget.ts"), "x\n").unwrap();
    // Config under a name discovery would never match.
    fs::write(
        template_root.join("meta.json"),
        r#"{"templates": [{"name": "widget", "label": "Annotated"}]}"#,
    )
    .unwrap();

    let target = workspace.path().join("out");
    let prompter = ScriptedPrompter::new(vec![
        Answer::Select(0),
        Answer::Input(target.display().to_string()),
    ]);
    let registry = fixed_registry();
    let installer = FakeNpmInstaller::new("1.0.0", &[]);

    let args = TemplateArgs {
        template: Some(template_root.clone()),
        config: Some(PathBuf::from("meta.json")),
        ..Default::default()
    };
    run_runner(args, &prompter, &registry, &installer, workspace.path().join("cache"))
        .unwrap();

    assert!(target.join("widget.ts").is_file());
    assert!(prompter.is_exhausted());
}

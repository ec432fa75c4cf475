//! Template materialization
//!
//! Copies a resolved template tree into the target directory under the
//! overwrite policy. Directory contents are materialized as a batch of
//! immediate children, iterated strictly sequentially so that prompts stay
//! ordered and the sticky decision propagates deterministically from one
//! sibling to the next.

use std::path::Path;

use crate::error::Result;
use crate::ioutils::{self, file_name_of, read_dir_sorted};
use crate::prompt::{PromptProvider, SelectConfig};
use crate::template::decision::{CopiedEntry, CopyDecision};

/// Copy mode selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOptions {
    /// Materialize the contents of a directory rather than the directory
    /// itself (the "package contents" layout)
    pub contents: bool,
}

const OVERWRITE_CHOICES: [(&str, CopyDecision); 4] = [
    ("Yes", CopyDecision::Yes),
    ("No", CopyDecision::No),
    ("Yes to all", CopyDecision::AllYes),
    ("No to all", CopyDecision::AllNo),
];

pub struct Materializer<'a> {
    prompt: &'a dyn PromptProvider,
    /// Start every batch with a carried `AllYes` (--skip-confirms)
    skip_overwrite_prompts: bool,
}

impl<'a> Materializer<'a> {
    pub fn new(prompt: &'a dyn PromptProvider, skip_overwrite_prompts: bool) -> Self {
        Self { prompt, skip_overwrite_prompts }
    }

    /// Copies `source` under `target_dir`, returning the entries actually
    /// written. Skipped conflicts are excluded; downstream substitution uses
    /// the returned list as its exact input set.
    pub fn copy(
        &self,
        source: &Path,
        target_dir: &Path,
        options: CopyOptions,
    ) -> Result<Vec<CopiedEntry>> {
        let initial = if self.skip_overwrite_prompts {
            CopyDecision::AllYes
        } else {
            CopyDecision::Default
        };

        if options.contents && source.is_dir() {
            let mut written = Vec::new();
            let mut carried = initial;
            for child_name in read_dir_sorted(source)? {
                let (entry, next) =
                    self.copy_entry(&source.join(child_name), target_dir, carried)?;
                written.extend(entry);
                carried = next;
            }
            Ok(written)
        } else {
            let (entry, _) = self.copy_entry(source, target_dir, initial)?;
            Ok(entry.into_iter().collect())
        }
    }

    /// Copies one entry, threading the carried decision through as an
    /// explicit parameter/return pair. Returns the written entry (None when
    /// skipped) and the decision the next sibling inherits.
    fn copy_entry(
        &self,
        source: &Path,
        target_dir: &Path,
        inherited: CopyDecision,
    ) -> Result<(Option<CopiedEntry>, CopyDecision)> {
        let target = target_dir.join(file_name_of(source)?);

        let mut carried = inherited;
        let decision = if target.exists() {
            match inherited.allows_overwrite() {
                // Sticky decision in effect: honored without prompting.
                Some(_) => inherited,
                None => {
                    let decision = self.ask_overwrite(&target)?;
                    if decision.is_sticky() {
                        carried = decision;
                    }
                    decision
                }
            }
        } else {
            CopyDecision::Default
        };

        if decision.allows_overwrite() == Some(false) {
            log::info!("Skipping '{}' (target already exists)", target.display());
            return Ok((None, carried));
        }

        if source.is_dir() {
            ioutils::copy_dir_all(source, target.as_path())?;
        } else {
            ioutils::copy_file(source, target.as_path())?;
        }
        log::info!("Copying '{}' to '{}'", source.display(), target.display());

        Ok((Some(CopiedEntry { target, decision }), carried))
    }

    fn ask_overwrite(&self, target: &Path) -> Result<CopyDecision> {
        let selection = self.prompt.prompt_select(&SelectConfig {
            prompt: format!("'{}' already exists. Overwrite?", target.display()),
            items: OVERWRITE_CHOICES.iter().map(|(label, _)| label.to_string()).collect(),
            // Declining is the safe default.
            default_index: 1,
        })?;
        Ok(OVERWRITE_CHOICES[selection].1)
    }
}

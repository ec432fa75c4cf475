//! Concrete prompt implementation using the dialoguer library

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::prompt::interface::{
    ConfirmConfig, ConfirmPrompter, InputConfig, InputPrompter, SelectConfig,
    SelectPrompter,
};

/// Terminal prompter backed by dialoguer.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl SelectPrompter for DialoguerPrompter {
    fn prompt_select(&self, config: &SelectConfig) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(&config.prompt)
            .items(&config.items)
            .default(config.default_index)
            .interact()?;
        Ok(selection)
    }
}

impl InputPrompter for DialoguerPrompter {
    fn prompt_input(&self, config: &InputConfig) -> Result<String> {
        let mut input = Input::new().with_prompt(&config.prompt);
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        Ok(input.interact_text()?)
    }
}

impl ConfirmPrompter for DialoguerPrompter {
    fn prompt_confirm(&self, config: &ConfirmConfig) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?)
    }
}

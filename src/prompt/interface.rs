//! Pure interfaces for prompting without external dependencies
//!
//! The engine only ever asks three kinds of questions: pick an item from a
//! list, enter a line of text, confirm yes/no. These interfaces keep the
//! engine independent of any specific terminal library.

use crate::error::Result;

/// Configuration for list selection prompts
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub prompt: String,
    pub items: Vec<String>,
    pub default_index: usize,
}

/// Configuration for free-text input prompts
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub prompt: String,
    pub default: Option<String>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for list selection
pub trait SelectPrompter {
    fn prompt_select(&self, config: &SelectConfig) -> Result<usize>;
}

/// Abstract interface for text input
pub trait InputPrompter {
    fn prompt_input(&self, config: &InputConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmPrompter {
    fn prompt_confirm(&self, config: &ConfirmConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: SelectPrompter + InputPrompter + ConfirmPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: SelectPrompter + InputPrompter + ConfirmPrompter {}

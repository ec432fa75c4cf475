//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: pure abstract interfaces independent of any UI library
//! - `dialoguer`: concrete implementation using the dialoguer library
//!
//! The engine components take `&dyn PromptProvider`, so tests substitute
//! scripted implementations without touching a terminal.

pub mod dialoguer;
pub mod interface;

pub use interface::*;

use self::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

//! Configuration handling for Stamp template sources
//!
//! - `types`: the descriptor schema
//! - `loader`: file loading for the data and rendered artifact forms

pub mod loader;
pub mod types;

pub use loader::load_config_file;
pub use types::ConfigDescriptor;

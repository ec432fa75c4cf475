/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Template catalog construction from directory listings and config data.
pub mod catalog;

/// Version-aware on-disk package cache for registry-backed templates.
pub mod cache;

/// Configuration descriptor loading.
pub mod config;

/// User input and interaction handling.
pub mod prompt;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Core template materialization and placeholder substitution.
pub mod template;

/// Constants shared across the application.
pub mod constants;

//! Core template materialization and substitution

pub mod decision;
pub mod materializer;
pub mod substitute;

pub use decision::{CopiedEntry, CopyDecision};
pub use materializer::{CopyOptions, Materializer};
pub use substitute::PlaceholderSubstitutor;

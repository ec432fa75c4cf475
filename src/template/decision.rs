//! Overwrite conflict policy

use std::path::PathBuf;

/// Operator decision for an overwrite conflict.
///
/// `AllYes` and `AllNo` are sticky: once given, they carry over to the
/// remaining siblings of the same materialization batch and suppress further
/// prompting. The carried decision is threaded explicitly between sibling
/// copy steps, never held in shared state, and resets only at the start of a
/// new top-level copy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyDecision {
    /// No decision yet: a conflict asks the operator
    #[default]
    Default,
    No,
    AllNo,
    Yes,
    AllYes,
}

impl CopyDecision {
    /// Whether this decision carries over to subsequent siblings.
    pub fn is_sticky(self) -> bool {
        matches!(self, CopyDecision::AllYes | CopyDecision::AllNo)
    }

    /// What this decision says about overwriting, if anything.
    pub fn allows_overwrite(self) -> Option<bool> {
        match self {
            CopyDecision::Default => None,
            CopyDecision::Yes | CopyDecision::AllYes => Some(true),
            CopyDecision::No | CopyDecision::AllNo => Some(false),
        }
    }
}

/// One materialized entry: where it was written and under which decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedEntry {
    pub target: PathBuf,
    pub decision: CopyDecision,
}

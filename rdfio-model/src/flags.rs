//! Structural flags attached to parsed statements
//!
//! Readers annotate each emitted statement with the syntactic context it
//! came from, so handlers that re-serialize can reproduce anonymous blank
//! node and collection shorthands instead of falling back to labeled
//! blank nodes.

use serde::{Deserialize, Serialize};

/// Syntactic-context flags for a single statement
///
/// All flags default to false; a statement parsed from plain
/// subject-predicate-object text carries none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFlags {
    /// First statement of an anonymous `[...]` subject
    pub anon_subject_begin: bool,
    /// Later statement of an anonymous `[...]` subject
    pub anon_subject_continue: bool,
    /// Object is an anonymous `[...]` node being opened
    pub anon_object: bool,
    /// First statement of a `(...)` collection
    pub list_begin: bool,
    /// Later statement of a `(...)` collection
    pub list_continue: bool,
    /// Subject is the empty anonymous node `[]`
    pub empty_anon_subject: bool,
    /// Object is the empty anonymous node `[]`
    pub empty_anon_object: bool,
}

impl StatementFlags {
    /// Flags for a statement with no special syntactic context
    pub fn plain() -> Self {
        Self::default()
    }

    /// True if any flag is set
    pub fn any(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain() {
        assert!(!StatementFlags::plain().any());
    }

    #[test]
    fn test_any_detects_set_flag() {
        let flags = StatementFlags {
            anon_object: true,
            ..Default::default()
        };
        assert!(flags.any());
    }
}

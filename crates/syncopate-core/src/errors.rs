//! Domain error taxonomy
//!
//! Storage failures live in `syncopate-store`; execution failures in
//! `syncopate-engine`. This module holds the errors the kernel itself can
//! raise.

use thiserror::Error;

use crate::source::Source;

/// Validation failures raised while constructing a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command requires a non-empty target guid")]
    EmptyGuid,
    #[error("command requires a non-empty title")]
    EmptyTitle,
}

/// Violations of the one-variant-per-guid collection invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("guid {guid} is already present in this collection")]
    DuplicateGuid { guid: String },
}

/// Post-commit reconciliation failures.
///
/// The durable mutation has already committed when one of these is
/// raised: it signals divergence between the store and the live view,
/// repaired by an out-of-band resync rather than a rollback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("no live catalog entry for guid {guid} under {source}")]
    EntityNotFound { source: Source, guid: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceId;

    #[test]
    fn test_entity_not_found_names_the_scope() {
        let err = ReconcileError::EntityNotFound {
            source: Source::Remote(SourceId(7)),
            guid: "guid-2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no live catalog entry for guid guid-2 under source 7"
        );
    }
}

//! Extraction failures.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::LocationRef;
use crate::syntax::NodeShape;

/// Why a single traversal stopped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A node shape we recognize but do not (or may not) traverse.
    #[error("unsupported construct {shape} at {location}")]
    UnsupportedConstruct {
        shape: NodeShape,
        location: LocationRef,
    },
    /// An identifier occurrence without a real source span.
    #[error("identifier '{name}' has no precise location ({description})")]
    ImpreciseLocation { name: SmolStr, description: SmolStr },
    /// The front end used a namespace tag this crate does not know.
    #[error("unknown namespace tag '{tag}' on identifier '{name}'")]
    NamespaceMapping { tag: SmolStr, name: SmolStr },
}

impl TraversalError {
    /// Check if this error means the front end and this crate disagree on
    /// their contract. Such errors are fatal in every mode.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, TraversalError::NamespaceMapping { .. })
    }
}

/// Which tree a traversal ran over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Renamed,
    Typechecked,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Renamed => f.write_str("renamed"),
            Phase::Typechecked => f.write_str("typechecked"),
        }
    }
}

/// A failed extraction. No index is produced alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("identifier extraction failed in the {phase} tree: {source}")]
pub struct ExtractError {
    pub phase: Phase,
    #[source]
    pub source: TraversalError,
}

impl ExtractError {
    pub fn new(phase: Phase, source: TraversalError) -> Self {
        Self { phase, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SourceSpan;

    #[test]
    fn test_error_messages() {
        let err = ExtractError::new(
            Phase::Typechecked,
            TraversalError::UnsupportedConstruct {
                shape: NodeShape::Bracket,
                location: LocationRef::Precise(SourceSpan::on_line("A.hs", 3, 5, 12)),
            },
        );
        assert_eq!(
            err.to_string(),
            "identifier extraction failed in the typechecked tree: \
             unsupported construct Bracket at A.hs:3:5-12"
        );
    }

    #[test]
    fn test_contract_violation() {
        let namespace = TraversalError::NamespaceMapping {
            tag: SmolStr::new("kind"),
            name: SmolStr::new("Type"),
        };
        let location = TraversalError::ImpreciseLocation {
            name: SmolStr::new("x"),
            description: SmolStr::new("generated"),
        };
        assert!(namespace.is_contract_violation());
        assert!(!location.is_contract_violation());
    }
}

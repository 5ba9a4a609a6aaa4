//! Extraction settings: failure policy, breadcrumbing, and the node-shape
//! support matrix.

use std::env;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::syntax::NodeShape;

/// Environment variable selecting the [`Mode`] at startup.
pub const MODE_ENV: &str = "IDENTDEX_MODE";
/// Environment variable turning breadcrumbing on at startup.
pub const DIAGNOSTICS_ENV: &str = "IDENTDEX_DIAGNOSTICS";

/// What to do with constructs we cannot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Abort the whole extraction.
    Strict,
    /// Skip and keep going, recording a diagnostic.
    Lenient,
}

impl Default for Mode {
    #[cfg(feature = "strict")]
    fn default() -> Self {
        Mode::Strict
    }

    #[cfg(not(feature = "strict"))]
    fn default() -> Self {
        Mode::Lenient
    }
}

impl Mode {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Mode::Strict),
            "lenient" => Some(Mode::Lenient),
            _ => None,
        }
    }

    pub fn is_strict(self) -> bool {
        self == Mode::Strict
    }
}

/// The node shapes a given front-end version is known to produce in a form
/// the engine understands.
///
/// Shapes outside the matrix are treated as unsupported constructs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupportMatrix {
    supported: FxHashSet<NodeShape>,
}

impl Default for SupportMatrix {
    fn default() -> Self {
        Self::full()
    }
}

impl SupportMatrix {
    /// Every shape the engine has traversal code for.
    pub fn full() -> Self {
        Self {
            supported: NodeShape::IMPLEMENTED.iter().copied().collect(),
        }
    }

    /// Support nothing; build up with [`enable`](Self::enable).
    pub fn empty() -> Self {
        Self {
            supported: FxHashSet::default(),
        }
    }

    /// Enable a shape. Shapes without traversal code stay unsupported.
    pub fn enable(mut self, shape: NodeShape) -> Self {
        if shape.is_implemented() {
            self.supported.insert(shape);
        }
        self
    }

    pub fn disable(mut self, shape: NodeShape) -> Self {
        self.supported.remove(&shape);
        self
    }

    pub fn supports(&self, shape: NodeShape) -> bool {
        self.supported.contains(&shape)
    }

    pub fn len(&self) -> usize {
        self.supported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supported.is_empty()
    }
}

/// Settings for one extraction, fixed for the lifetime of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractConfig {
    pub mode: Mode,
    /// Prefix node tags onto records whose definition site is a placeholder.
    pub diagnostics: bool,
    pub support: SupportMatrix,
}

impl ExtractConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn with_support(mut self, support: SupportMatrix) -> Self {
        self.support = support;
        self
    }

    /// Build from `IDENTDEX_MODE` and `IDENTDEX_DIAGNOSTICS`, falling back
    /// to the build-time defaults for anything unset or unreadable.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(MODE_ENV).ok().as_deref(),
            env::var(DIAGNOSTICS_ENV).ok().as_deref(),
        )
    }

    fn from_vars(mode: Option<&str>, diagnostics: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(value) = mode {
            match Mode::parse(value) {
                Some(mode) => config.mode = mode,
                None => warn!(value, "ignoring unrecognized {MODE_ENV}"),
            }
        }
        if let Some(value) = diagnostics {
            config.diagnostics = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        config
    }
}

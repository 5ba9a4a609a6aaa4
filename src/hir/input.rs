//! Input types for batch extraction.

use std::sync::Arc;

use crate::syntax::{Module, ResolvedName, TypedName};

/// Both analyzed trees of one source file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileTrees<T> {
    /// Path used to key results (for display/error messages).
    pub path: Arc<str>,
    pub renamed: Module<ResolvedName>,
    pub typechecked: Module<TypedName<T>>,
}

impl<T> FileTrees<T> {
    pub fn new(
        path: impl Into<Arc<str>>,
        renamed: Module<ResolvedName>,
        typechecked: Module<TypedName<T>>,
    ) -> Self {
        Self {
            path: path.into(),
            renamed,
            typechecked,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

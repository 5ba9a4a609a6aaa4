//! Extraction driver — one pass per tree, then a type-checker-biased merge.

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

use crate::syntax::{Module, ResolvedName, TypedName};

use super::adapter::{NoTypes, TypeRenderer};
use super::config::ExtractConfig;
use super::diagnostics::Diagnostic;
use super::error::{ExtractError, Phase};
use super::index::IdentifierIndex;
use super::input::FileTrees;
use super::visit::index_tree;

/// A finished extraction plus what lenient mode skipped along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub index: IdentifierIndex,
    /// Renamed-tree diagnostics first, then type-checked-tree ones.
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the identifier index of one file.
///
/// Both trees are traversed; wherever both produced a record for the same
/// span, the type-checked tree's record wins. If either traversal fails no
/// index is produced.
pub fn extract<T, R>(
    renamed: &Module<ResolvedName>,
    typechecked: &Module<TypedName<T>>,
    renderer: &R,
    config: &ExtractConfig,
) -> Result<IdentifierIndex, ExtractError>
where
    R: TypeRenderer<T> + ?Sized,
{
    extract_with_diagnostics(renamed, typechecked, renderer, config).map(|e| e.index)
}

/// Like [`extract`], but keeps the lenient-mode diagnostics.
pub fn extract_with_diagnostics<T, R>(
    renamed: &Module<ResolvedName>,
    typechecked: &Module<TypedName<T>>,
    renderer: &R,
    config: &ExtractConfig,
) -> Result<Extraction, ExtractError>
where
    R: TypeRenderer<T> + ?Sized,
{
    let _span = debug_span!("extract", module = ?renamed.name, mode = ?config.mode).entered();

    let (renamed_index, mut diagnostics) = index_tree(renamed, &NoTypes, config, Phase::Renamed)
        .map_err(|e| ExtractError::new(Phase::Renamed, e))?;
    let (typed_index, typed_diagnostics) =
        index_tree(typechecked, renderer, config, Phase::Typechecked)
            .map_err(|e| ExtractError::new(Phase::Typechecked, e))?;

    let index = typed_index.combine(renamed_index);
    diagnostics.extend(typed_diagnostics);

    debug!(
        entries = index.len(),
        skipped = diagnostics.len(),
        "extracted identifiers"
    );
    Ok(Extraction { index, diagnostics })
}

/// Like [`extract`], for callers that must treat a failed file as having no
/// identifier information at all. The failure is logged, never swallowed
/// into an empty index.
pub fn extract_or_absent<T, R>(
    renamed: &Module<ResolvedName>,
    typechecked: &Module<TypedName<T>>,
    renderer: &R,
    config: &ExtractConfig,
) -> Option<IdentifierIndex>
where
    R: TypeRenderer<T> + ?Sized,
{
    match extract(renamed, typechecked, renderer, config) {
        Ok(index) => Some(index),
        Err(err) => {
            warn!(module = ?renamed.name, error = %err, "identifier index unavailable");
            None
        }
    }
}

/// Extract many files in parallel, one file per task.
///
/// Results are keyed by path in input order. A later file with the same
/// path replaces the earlier one's result.
pub fn extract_batch<T, R>(
    files: &[FileTrees<T>],
    renderer: &R,
    config: &ExtractConfig,
) -> IndexMap<Arc<str>, Result<IdentifierIndex, ExtractError>>
where
    T: Sync,
    R: TypeRenderer<T> + Sync + ?Sized,
{
    // Extract files in parallel
    let results: Vec<_> = files
        .par_iter()
        .map(|file| {
            let result = extract(&file.renamed, &file.typechecked, renderer, config);
            (file.path.clone(), result)
        })
        .collect();

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    debug!(files = results.len(), failed, "batch extraction finished");

    results.into_iter().collect()
}

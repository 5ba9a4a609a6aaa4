//! The identifier index — span-keyed records with a right-biased merge.
//!
//! # Merging the two passes
//!
//! The type checker knows more than the renamer (it knows types), so its
//! records win wherever both passes produced an entry for the same span.
//! Some spans are only ever visited by the renamer (e.g. type variables
//! bound in signatures the type checker discards), so the renamer's index
//! still fills the gaps:
//!
//! ```text
//! combine(typechecked, renamed)
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::base::SourceSpan;

use super::symbols::IdentifierRecord;

/// Records keyed by the span of the occurrence they describe.
///
/// Keys are unique and iterate in ascending span order. The index holds no
/// references into the tree it was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "Vec<(SourceSpan, IdentifierRecord)>",
        from = "Vec<(SourceSpan, IdentifierRecord)>"
    )
)]
pub struct IdentifierIndex {
    entries: BTreeMap<SourceSpan, IdentifierRecord>,
}

impl IdentifierIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite the record at `span`, returning the one it replaced.
    pub fn insert(
        &mut self,
        span: SourceSpan,
        record: IdentifierRecord,
    ) -> Option<IdentifierRecord> {
        self.entries.insert(span, record)
    }

    pub fn get(&self, span: &SourceSpan) -> Option<&IdentifierRecord> {
        self.entries.get(span)
    }

    pub fn contains_span(&self, span: &SourceSpan) -> bool {
        self.entries.contains_key(span)
    }

    /// Right-biased union: `self` is primary, `secondary` only fills spans
    /// `self` lacks.
    pub fn combine(mut self, secondary: IdentifierIndex) -> IdentifierIndex {
        if self.entries.len() >= secondary.entries.len() {
            for (span, record) in secondary.entries {
                self.entries.entry(span).or_insert(record);
            }
            self
        } else {
            let mut entries = secondary.entries;
            entries.extend(self.entries);
            IdentifierIndex { entries }
        }
    }

    /// Every record whose span contains `(line, col)`, in ascending span order.
    pub fn lookup_at(&self, line: u32, col: u32) -> Vec<&IdentifierRecord> {
        self.entries_at(line, col)
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Like [`lookup_at`](Self::lookup_at), but keeps the spans.
    pub fn entries_at(&self, line: u32, col: u32) -> Vec<(&SourceSpan, &IdentifierRecord)> {
        self.entries
            .iter()
            .filter(|(span, _)| span.contains(line, col))
            .collect()
    }

    /// The smallest entry containing `(line, col)`. Ties go to the first in span order.
    pub fn innermost_at(&self, line: u32, col: u32) -> Option<(&SourceSpan, &IdentifierRecord)> {
        self.entries_at(line, col)
            .into_iter()
            .min_by_key(|(span, _)| span.extent())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, SourceSpan, IdentifierRecord> {
        self.entries.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &IdentifierRecord> {
        self.entries.values()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ordered-pairs form used for persistence.
    pub fn to_pairs(&self) -> Vec<(SourceSpan, IdentifierRecord)> {
        self.entries
            .iter()
            .map(|(span, record)| (span.clone(), record.clone()))
            .collect()
    }

    pub fn into_pairs(self) -> Vec<(SourceSpan, IdentifierRecord)> {
        self.entries.into_iter().collect()
    }

    /// Rebuild from pairs. On duplicate spans the later pair wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (SourceSpan, IdentifierRecord)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// Right-biased union of two indices; see [`IdentifierIndex::combine`].
pub fn combine(primary: IdentifierIndex, secondary: IdentifierIndex) -> IdentifierIndex {
    primary.combine(secondary)
}

#[cfg(feature = "interchange")]
impl IdentifierIndex {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn write_json<W: std::io::Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(writer, self)
    }

    pub fn read_json<R: std::io::Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}

impl FromIterator<(SourceSpan, IdentifierRecord)> for IdentifierIndex {
    fn from_iter<T: IntoIterator<Item = (SourceSpan, IdentifierRecord)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(SourceSpan, IdentifierRecord)> for IdentifierIndex {
    fn extend<T: IntoIterator<Item = (SourceSpan, IdentifierRecord)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for IdentifierIndex {
    type Item = (SourceSpan, IdentifierRecord);
    type IntoIter = btree_map::IntoIter<SourceSpan, IdentifierRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdentifierIndex {
    type Item = (&'a SourceSpan, &'a IdentifierRecord);
    type IntoIter = btree_map::Iter<'a, SourceSpan, IdentifierRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<(SourceSpan, IdentifierRecord)>> for IdentifierIndex {
    fn from(pairs: Vec<(SourceSpan, IdentifierRecord)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl From<IdentifierIndex> for Vec<(SourceSpan, IdentifierRecord)> {
    fn from(index: IdentifierIndex) -> Self {
        index.into_pairs()
    }
}

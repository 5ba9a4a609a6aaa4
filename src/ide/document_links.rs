//! Document links — clickable references to generated API documentation.
//!
//! Links have the form `package/Module-Name.html#v:name`, where the anchor
//! mark is `v` for terms and data constructors and `t` for types and
//! classes.

use std::borrow::Cow;

use crate::base::SourceSpan;
use crate::hir::{IdentifierIndex, IdentifierRecord};

/// A document link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    /// The span of the link in the source file.
    pub span: SourceSpan,
    /// Documentation path relative to the documentation root.
    pub target: String,
    /// Tooltip text for the link.
    pub tooltip: Cow<'static, str>,
}

/// Documentation path for a record, if it belongs to a known module and package.
pub fn doc_link(record: &IdentifierRecord) -> Option<String> {
    let module = record.owning_module.as_ref()?;
    let package = record.owning_package.as_ref()?;
    Some(format!(
        "{package}/{}.html#{}:{}",
        module.replace('.', "-"),
        record.namespace.doc_mark(),
        record.name
    ))
}

/// Get document links for every linkable record in the index, in span order.
pub fn document_links(index: &IdentifierIndex) -> Vec<DocumentLink> {
    index
        .iter()
        .filter_map(|(span, record)| {
            let target = doc_link(record)?;
            Some(DocumentLink {
                span: span.clone(),
                target,
                tooltip: Cow::Owned(format!("Documentation for {}", record.qualified_name())),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::LocationRef;
    use crate::hir::{BindingKind, Namespace};
    use smol_str::SmolStr;

    fn record(
        name: &str,
        module: Option<&str>,
        package: Option<&str>,
        namespace: Namespace,
    ) -> IdentifierRecord {
        IdentifierRecord {
            name: SmolStr::new(name),
            owning_module: module.map(SmolStr::new),
            owning_package: package.map(SmolStr::new),
            namespace,
            resolved_type: None,
            definition: LocationRef::opaque("external"),
            binding: BindingKind::Reference,
        }
    }

    #[test]
    fn test_doc_link_value_and_type() {
        let value = record("fromMaybe", Some("Data.Maybe"), Some("base"), Namespace::Value);
        assert_eq!(
            doc_link(&value).as_deref(),
            Some("base/Data-Maybe.html#v:fromMaybe")
        );

        let con = record("Just", Some("Data.Maybe"), Some("base"), Namespace::DataConstructor);
        assert_eq!(doc_link(&con).as_deref(), Some("base/Data-Maybe.html#v:Just"));

        let ty = record("Maybe", Some("Data.Maybe"), Some("base"), Namespace::TypeOrClass);
        assert_eq!(doc_link(&ty).as_deref(), Some("base/Data-Maybe.html#t:Maybe"));
    }

    #[test]
    fn test_doc_link_requires_module_and_package() {
        assert!(doc_link(&record("x", None, None, Namespace::Value)).is_none());
        assert!(doc_link(&record("f", Some("Main"), None, Namespace::Value)).is_none());
    }

    #[test]
    fn test_document_links_in_span_order() {
        let index = IdentifierIndex::from_pairs([
            (
                SourceSpan::on_line("A.hs", 2, 1, 4),
                record("Text", Some("Data.Text"), Some("text"), Namespace::TypeOrClass),
            ),
            (
                SourceSpan::on_line("A.hs", 1, 8, 8),
                record("x", None, None, Namespace::Value),
            ),
            (
                SourceSpan::on_line("A.hs", 1, 1, 4),
                record("pack", Some("Data.Text"), Some("text"), Namespace::Value),
            ),
        ]);

        let links = document_links(&index);
        let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(
            targets,
            vec!["text/Data-Text.html#v:pack", "text/Data-Text.html#t:Text"]
        );
        assert_eq!(links[0].tooltip, "Documentation for Data.Text.pack");
    }
}

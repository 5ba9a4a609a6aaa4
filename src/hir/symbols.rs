//! Identifier records — the facts stored for each occurrence.

use std::fmt;

use smol_str::SmolStr;

use crate::base::LocationRef;
use crate::syntax::tags;

/// The syntactic category a name lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Namespace {
    Value,
    DataConstructor,
    TypeVariable,
    TypeOrClass,
}

impl Namespace {
    /// Map a front-end namespace tag. `None` means the tag is unknown to us.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::VAR | tags::FIELD => Some(Namespace::Value),
            tags::DATA => Some(Namespace::DataConstructor),
            tags::TYVAR => Some(Namespace::TypeVariable),
            tags::TYCON => Some(Namespace::TypeOrClass),
            _ => None,
        }
    }

    /// Anchor prefix used in documentation links: `v` for terms, `t` for types.
    pub fn doc_mark(self) -> char {
        match self {
            Namespace::Value | Namespace::DataConstructor => 'v',
            Namespace::TypeVariable | Namespace::TypeOrClass => 't',
        }
    }

    /// Check if names in this namespace can carry a value type.
    pub fn is_term_level(self) -> bool {
        matches!(self, Namespace::Value | Namespace::DataConstructor)
    }

    pub fn display(self) -> &'static str {
        match self {
            Namespace::Value => "value",
            Namespace::DataConstructor => "data constructor",
            Namespace::TypeVariable => "type variable",
            Namespace::TypeOrClass => "type constructor or class",
        }
    }
}

/// Whether an occurrence introduces a name or uses one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingKind {
    Binding,
    Reference,
}

impl BindingKind {
    pub fn is_binding(self) -> bool {
        self == BindingKind::Binding
    }
}

/// Everything known about one identifier occurrence.
///
/// `resolved_type` is only ever filled from the type-checked tree, and only
/// for term-level namespaces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierRecord {
    /// Unqualified name.
    pub name: SmolStr,
    pub owning_module: Option<SmolStr>,
    pub owning_package: Option<SmolStr>,
    pub namespace: Namespace,
    pub resolved_type: Option<String>,
    pub definition: LocationRef,
    pub binding: BindingKind,
}

impl IdentifierRecord {
    /// Qualified display name, e.g. `Data.Maybe.fromMaybe`.
    pub fn qualified_name(&self) -> String {
        match &self.owning_module {
            Some(module) => format!("{module}.{}", self.name),
            None => self.name.to_string(),
        }
    }

    /// Check if this record's definition site is a real location.
    pub fn is_defined_in_source(&self) -> bool {
        self.definition.is_precise()
    }
}

impl fmt::Display for IdentifierRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.binding {
            BindingKind::Binding => "binding",
            BindingKind::Reference => "reference",
        };
        write!(f, "{} ({}, {kind})", self.qualified_name(), self.namespace.display())?;
        if let Some(ty) = &self.resolved_type {
            write!(f, " :: {ty}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(module: Option<&str>) -> IdentifierRecord {
        IdentifierRecord {
            name: SmolStr::new("map"),
            owning_module: module.map(SmolStr::new),
            owning_package: None,
            namespace: Namespace::Value,
            resolved_type: Some("(a -> b) -> [a] -> [b]".to_string()),
            definition: LocationRef::opaque("built-in"),
            binding: BindingKind::Reference,
        }
    }

    #[test]
    fn test_namespace_from_known_tags() {
        assert_eq!(Namespace::from_tag(tags::VAR), Some(Namespace::Value));
        assert_eq!(Namespace::from_tag(tags::FIELD), Some(Namespace::Value));
        assert_eq!(Namespace::from_tag(tags::DATA), Some(Namespace::DataConstructor));
        assert_eq!(Namespace::from_tag(tags::TYVAR), Some(Namespace::TypeVariable));
        assert_eq!(Namespace::from_tag(tags::TYCON), Some(Namespace::TypeOrClass));
    }

    #[test]
    fn test_namespace_unknown_tag() {
        assert_eq!(Namespace::from_tag("kind"), None);
        assert_eq!(Namespace::from_tag(""), None);
    }

    #[test]
    fn test_doc_mark() {
        assert_eq!(Namespace::Value.doc_mark(), 'v');
        assert_eq!(Namespace::DataConstructor.doc_mark(), 'v');
        assert_eq!(Namespace::TypeVariable.doc_mark(), 't');
        assert_eq!(Namespace::TypeOrClass.doc_mark(), 't');
    }

    #[test]
    fn test_record_display() {
        assert_eq!(
            record(Some("GHC.Base")).to_string(),
            "GHC.Base.map (value, reference) :: (a -> b) -> [a] -> [b]"
        );
        assert_eq!(record(None).qualified_name(), "map");
    }
}

//! Resolved identifiers and locations as the front end reports them.

use std::convert::Infallible;

use smol_str::SmolStr;

use crate::base::SourceSpan;

/// Raw namespace tags attached to every resolved name by the front end.
///
/// These are the front end's strings, not ours; [`crate::hir::Namespace::from_tag`]
/// maps them.
pub mod tags {
    /// Term-level variable.
    pub const VAR: &str = "var";
    /// Record field selector.
    pub const FIELD: &str = "fld";
    /// Data constructor.
    pub const DATA: &str = "data";
    /// Type variable.
    pub const TYVAR: &str = "tv";
    /// Type constructor or class.
    pub const TYCON: &str = "tc";
}

/// A front-end source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SrcLoc {
    Real(SourceSpan),
    /// No real location; the string says why (e.g. `<no location info>`).
    Unhelpful(SmolStr),
}

impl SrcLoc {
    pub fn unhelpful(description: impl Into<SmolStr>) -> Self {
        SrcLoc::Unhelpful(description.into())
    }

    pub fn span(&self) -> Option<&SourceSpan> {
        match self {
            SrcLoc::Real(span) => Some(span),
            SrcLoc::Unhelpful(_) => None,
        }
    }
}

impl From<SourceSpan> for SrcLoc {
    fn from(span: SourceSpan) -> Self {
        SrcLoc::Real(span)
    }
}

/// A node paired with the location the front end recorded for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located<T> {
    pub loc: SrcLoc,
    pub node: T,
}

impl<T> Located<T> {
    pub fn new(loc: impl Into<SrcLoc>, node: T) -> Self {
        Self {
            loc: loc.into(),
            node,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            loc: self.loc,
            node: f(self.node),
        }
    }
}

/// The module an external name was imported from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleRef {
    pub name: SmolStr,
    pub package: Option<SmolStr>,
}

impl ModuleRef {
    pub fn new(name: impl Into<SmolStr>, package: Option<SmolStr>) -> Self {
        Self {
            name: name.into(),
            package,
        }
    }
}

/// A name after renaming: the occurrence text plus where it was defined.
///
/// Local binders carry no `module`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedName {
    pub occ: SmolStr,
    pub space: SmolStr,
    pub module: Option<ModuleRef>,
    pub def_loc: SrcLoc,
}

impl ResolvedName {
    /// A locally bound name defined at `def_loc`.
    pub fn local(occ: impl Into<SmolStr>, space: &str, def_loc: impl Into<SrcLoc>) -> Self {
        Self {
            occ: occ.into(),
            space: SmolStr::new(space),
            module: None,
            def_loc: def_loc.into(),
        }
    }

    /// A top-level name owned by `module`.
    pub fn external(
        occ: impl Into<SmolStr>,
        space: &str,
        module: ModuleRef,
        def_loc: impl Into<SrcLoc>,
    ) -> Self {
        Self {
            occ: occ.into(),
            space: SmolStr::new(space),
            module: Some(module),
            def_loc: def_loc.into(),
        }
    }
}

/// A type-checked identifier: a resolved name plus its type.
///
/// The type is the front end's own representation; only the caller-supplied
/// renderer knows how to turn it into text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedName<T> {
    pub name: ResolvedName,
    pub ty: T,
}

impl<T> TypedName<T> {
    pub fn new(name: ResolvedName, ty: T) -> Self {
        Self { name, ty }
    }
}

/// Common view over the identifiers of both passes.
pub trait Identifier {
    /// The front end's type representation; [`Infallible`] when the pass has none.
    type Ty;

    fn resolved(&self) -> &ResolvedName;

    fn ty(&self) -> Option<&Self::Ty> {
        None
    }
}

impl Identifier for ResolvedName {
    type Ty = Infallible;

    fn resolved(&self) -> &ResolvedName {
        self
    }
}

impl<T> Identifier for TypedName<T> {
    type Ty = T;

    fn resolved(&self) -> &ResolvedName {
        &self.name
    }

    fn ty(&self) -> Option<&T> {
        Some(&self.ty)
    }
}

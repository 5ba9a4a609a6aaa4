//! Turning a front-end identifier into an [`IdentifierRecord`].

use std::convert::Infallible;

use crate::base::LocationRef;
use crate::syntax::{Identifier, ResolvedName, SrcLoc, TypedName};

use super::error::TraversalError;
use super::symbols::{BindingKind, IdentifierRecord, Namespace};

/// Renders a front-end type to display text.
///
/// Assumed pure and total. Closures `Fn(&T) -> String` implement it.
pub trait TypeRenderer<T: ?Sized> {
    fn render(&self, ty: &T) -> String;
}

impl<T: ?Sized, F> TypeRenderer<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, ty: &T) -> String {
        self(ty)
    }
}

/// Renderer for the renamed tree, which has no types to render.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTypes;

impl TypeRenderer<Infallible> for NoTypes {
    fn render(&self, ty: &Infallible) -> String {
        match *ty {}
    }
}

/// Normalize a front-end location.
pub fn location_ref(loc: &SrcLoc) -> LocationRef {
    match loc {
        SrcLoc::Real(span) => LocationRef::Precise(span.clone()),
        SrcLoc::Unhelpful(description) => LocationRef::Opaque(description.clone()),
    }
}

/// Build a record from a renamed identifier. `resolved_type` stays unset.
pub fn record_from_name(
    name: &ResolvedName,
    binding: BindingKind,
) -> Result<IdentifierRecord, TraversalError> {
    let namespace =
        Namespace::from_tag(&name.space).ok_or_else(|| TraversalError::NamespaceMapping {
            tag: name.space.clone(),
            name: name.occ.clone(),
        })?;

    let (owning_module, owning_package) = match &name.module {
        Some(module) => (Some(module.name.clone()), module.package.clone()),
        None => (None, None),
    };

    Ok(IdentifierRecord {
        name: name.occ.clone(),
        owning_module,
        owning_package,
        namespace,
        resolved_type: None,
        definition: location_ref(&name.def_loc),
        binding,
    })
}

/// Build a record from a type-checked identifier.
///
/// Only term-level names carry a rendered type; type-level names keep
/// `resolved_type` unset.
pub fn record_from_typed<T, R>(
    ident: &TypedName<T>,
    binding: BindingKind,
    renderer: &R,
) -> Result<IdentifierRecord, TraversalError>
where
    R: TypeRenderer<T> + ?Sized,
{
    let mut record = record_from_name(&ident.name, binding)?;
    if record.namespace.is_term_level() {
        record.resolved_type = Some(renderer.render(&ident.ty));
    }
    Ok(record)
}

/// Build a record from either kind of identifier.
pub fn record_for<I, R>(
    ident: &I,
    binding: BindingKind,
    renderer: &R,
) -> Result<IdentifierRecord, TraversalError>
where
    I: Identifier,
    R: TypeRenderer<I::Ty> + ?Sized,
{
    let mut record = record_from_name(ident.resolved(), binding)?;
    if record.namespace.is_term_level() {
        record.resolved_type = ident.ty().map(|ty| renderer.render(ty));
    }
    Ok(record)
}

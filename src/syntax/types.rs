//! Type syntax.

use smol_str::SmolStr;

use super::name::Located;
use super::shape::NodeShape;

pub type LType<I> = Located<Type<I>>;
pub type LTyVarBndr<I> = Located<TyVarBndr<I>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Type<I> {
    /// A type variable, type constructor, or class name.
    Var(Located<I>),
    App(Box<LType<I>>, Box<LType<I>>),
    Fun(Box<LType<I>>, Box<LType<I>>),
    List(Box<LType<I>>),
    Tuple(Vec<LType<I>>),
    Par(Box<LType<I>>),
    ForAll {
        binders: Vec<LTyVarBndr<I>>,
        body: Box<LType<I>>,
    },
    /// `context => body`
    Qual {
        context: Vec<LType<I>>,
        body: Box<LType<I>>,
    },
    KindSig(Box<LType<I>>, Box<LType<I>>),
    /// Strictness annotation on a constructor field.
    Bang(Box<LType<I>>),
    /// Infix type operator application.
    Op(Box<LType<I>>, Located<I>, Box<LType<I>>),
    Lit(SmolStr),
    Wildcard,
    Splice,
}

impl<I> Type<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Type::Var(_) => NodeShape::TyVar,
            Type::App(..) => NodeShape::TyApp,
            Type::Fun(..) => NodeShape::FunTy,
            Type::List(_) => NodeShape::ListTy,
            Type::Tuple(_) => NodeShape::TupleTy,
            Type::Par(_) => NodeShape::ParTy,
            Type::ForAll { .. } => NodeShape::ForAllTy,
            Type::Qual { .. } => NodeShape::QualTy,
            Type::KindSig(..) => NodeShape::KindSigTy,
            Type::Bang(_) => NodeShape::BangTy,
            Type::Op(..) => NodeShape::OpTy,
            Type::Lit(_) => NodeShape::TyLit,
            Type::Wildcard => NodeShape::WildcardTy,
            Type::Splice => NodeShape::TySplice,
        }
    }
}

/// A type variable binder, as in `forall a (b :: k).` or a declaration head.
#[derive(Clone, Debug, PartialEq)]
pub enum TyVarBndr<I> {
    User(Located<I>),
    Kinded(Located<I>, LType<I>),
}

impl<I> TyVarBndr<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            TyVarBndr::User(_) => NodeShape::UserTyVar,
            TyVarBndr::Kinded(..) => NodeShape::KindedTyVar,
        }
    }
}

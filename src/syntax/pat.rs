//! Pattern syntax.

use super::expr::{LExpr, Literal};
use super::name::Located;
use super::shape::NodeShape;
use super::types::LType;

pub type LPat<I> = Located<Pat<I>>;

#[derive(Clone, Debug, PartialEq)]
pub enum Pat<I> {
    Wild,
    Var(Located<I>),
    /// `name@pat`
    As(Located<I>, Box<LPat<I>>),
    Lazy(Box<LPat<I>>),
    Bang(Box<LPat<I>>),
    Par(Box<LPat<I>>),
    List(Vec<LPat<I>>),
    Tuple(Vec<LPat<I>>),
    Con {
        con: Located<I>,
        args: ConPatArgs<I>,
    },
    Lit(Literal),
    /// `(expr -> pat)`
    View(Box<LExpr<I>>, Box<LPat<I>>),
    Sig(Box<LPat<I>>, LType<I>),
    NPlusK(Located<I>, Literal),
    Splice,
}

impl<I> Pat<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Pat::Wild => NodeShape::WildPat,
            Pat::Var(_) => NodeShape::VarPat,
            Pat::As(..) => NodeShape::AsPat,
            Pat::Lazy(_) => NodeShape::LazyPat,
            Pat::Bang(_) => NodeShape::BangPat,
            Pat::Par(_) => NodeShape::ParPat,
            Pat::List(_) => NodeShape::ListPat,
            Pat::Tuple(_) => NodeShape::TuplePat,
            Pat::Con { .. } => NodeShape::ConPat,
            Pat::Lit(_) => NodeShape::LitPat,
            Pat::View(..) => NodeShape::ViewPat,
            Pat::Sig(..) => NodeShape::SigPat,
            Pat::NPlusK(..) => NodeShape::NPlusKPat,
            Pat::Splice => NodeShape::PatSplice,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConPatArgs<I> {
    Prefix(Vec<LPat<I>>),
    /// `lhs `Con` rhs`
    Infix(Box<LPat<I>>, Box<LPat<I>>),
    Record(Vec<Located<PatField<I>>>),
}

/// `field = pat`, or a punned `field` when `pat` is absent.
#[derive(Clone, Debug, PartialEq)]
pub struct PatField<I> {
    pub field: Located<I>,
    pub pat: Option<LPat<I>>,
}

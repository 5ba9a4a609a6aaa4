//! Expressions, statements, and the match machinery shared by functions,
//! lambdas, and case alternatives.

use smol_str::SmolStr;

use super::decls::LocalBinds;
use super::name::Located;
use super::pat::LPat;
use super::shape::NodeShape;
use super::types::LType;

pub type LExpr<I> = Located<Expr<I>>;
pub type LStmt<I> = Located<Stmt<I>>;
pub type LMatch<I> = Located<Match<I>>;
pub type LGrhs<I> = Located<Grhs<I>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Frac(SmolStr),
    Char(char),
    Str(SmolStr),
}

/// The alternatives of a function binding, lambda, or case.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchGroup<I> {
    pub alts: Vec<LMatch<I>>,
}

impl<I> MatchGroup<I> {
    pub fn new(alts: Vec<LMatch<I>>) -> Self {
        Self { alts }
    }
}

/// One equation or alternative: argument patterns and right-hand sides.
#[derive(Clone, Debug, PartialEq)]
pub struct Match<I> {
    pub pats: Vec<LPat<I>>,
    pub rhs: Grhss<I>,
}

/// Guarded right-hand sides plus their `where` bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct Grhss<I> {
    pub grhss: Vec<LGrhs<I>>,
    pub local_binds: LocalBinds<I>,
}

impl<I> Grhss<I> {
    /// A single unguarded body without `where` bindings.
    pub fn unguarded(body: LExpr<I>) -> Self {
        let loc = body.loc.clone();
        Self {
            grhss: vec![Located::new(
                loc,
                Grhs {
                    guards: Vec::new(),
                    body,
                },
            )],
            local_binds: LocalBinds::Empty,
        }
    }
}

/// `| guards = body`; no guards for a plain right-hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct Grhs<I> {
    pub guards: Vec<LStmt<I>>,
    pub body: LExpr<I>,
}

/// `field = value` in record construction or update; `value` is absent for puns.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordField<I> {
    pub field: Located<I>,
    pub value: Option<LExpr<I>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoFlavour {
    Do,
    MDo,
    ListComp,
    MonadComp,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr<I> {
    /// A variable or data constructor occurrence.
    Var(Located<I>),
    RecordCon {
        con: Located<I>,
        fields: Vec<Located<RecordField<I>>>,
    },
    RecordUpd {
        expr: Box<LExpr<I>>,
        fields: Vec<Located<RecordField<I>>>,
    },
    Lit(Literal),
    Lam(MatchGroup<I>),
    LamCase(MatchGroup<I>),
    App(Box<LExpr<I>>, Box<LExpr<I>>),
    /// Visible type application `f @T`.
    AppType(Box<LExpr<I>>, LType<I>),
    OpApp {
        lhs: Box<LExpr<I>>,
        op: Box<LExpr<I>>,
        rhs: Box<LExpr<I>>,
    },
    Neg(Box<LExpr<I>>),
    Par(Box<LExpr<I>>),
    /// `(expr op)`
    SectionL(Box<LExpr<I>>, Box<LExpr<I>>),
    /// `(op expr)`
    SectionR(Box<LExpr<I>>, Box<LExpr<I>>),
    /// Tuple; `None` marks a missing component of a tuple section.
    Tuple(Vec<Option<LExpr<I>>>),
    Case(Box<LExpr<I>>, MatchGroup<I>),
    If {
        cond: Box<LExpr<I>>,
        then_branch: Box<LExpr<I>>,
        else_branch: Box<LExpr<I>>,
    },
    MultiIf(Vec<LGrhs<I>>),
    Let(LocalBinds<I>, Box<LExpr<I>>),
    Do(DoFlavour, Vec<LStmt<I>>),
    List(Vec<LExpr<I>>),
    ArithSeq {
        from: Box<LExpr<I>>,
        then: Option<Box<LExpr<I>>>,
        to: Option<Box<LExpr<I>>>,
    },
    /// `expr :: type`
    Sig(Box<LExpr<I>>, LType<I>),
    /// Coercion wrapper inserted by the type checker.
    Wrap(Box<LExpr<I>>),
    Splice,
    Bracket,
    Proc,
    Static(Box<LExpr<I>>),
    /// An unbound variable or typed hole.
    Hole(SmolStr),
}

impl<I> Expr<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Expr::Var(_) => NodeShape::ExprVar,
            Expr::RecordCon { .. } => NodeShape::RecordCon,
            Expr::RecordUpd { .. } => NodeShape::RecordUpd,
            Expr::Lit(_) => NodeShape::ExprLit,
            Expr::Lam(_) => NodeShape::Lambda,
            Expr::LamCase(_) => NodeShape::LambdaCase,
            Expr::App(..) => NodeShape::App,
            Expr::AppType(..) => NodeShape::TypeApp,
            Expr::OpApp { .. } => NodeShape::OpApp,
            Expr::Neg(_) => NodeShape::Negation,
            Expr::Par(_) => NodeShape::ExprPar,
            Expr::SectionL(..) => NodeShape::SectionL,
            Expr::SectionR(..) => NodeShape::SectionR,
            Expr::Tuple(_) => NodeShape::ExplicitTuple,
            Expr::Case(..) => NodeShape::Case,
            Expr::If { .. } => NodeShape::If,
            Expr::MultiIf(_) => NodeShape::MultiIf,
            Expr::Let(..) => NodeShape::LetExpr,
            Expr::Do(..) => NodeShape::DoExpr,
            Expr::List(_) => NodeShape::ExplicitList,
            Expr::ArithSeq { .. } => NodeShape::ArithSeq,
            Expr::Sig(..) => NodeShape::ExprWithSig,
            Expr::Wrap(_) => NodeShape::Wrap,
            Expr::Splice => NodeShape::ExprSplice,
            Expr::Bracket => NodeShape::Bracket,
            Expr::Proc => NodeShape::Proc,
            Expr::Static(_) => NodeShape::Static,
            Expr::Hole(_) => NodeShape::Hole,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt<I> {
    /// `pat <- expr`
    Bind(LPat<I>, LExpr<I>),
    Body(LExpr<I>),
    Let(LocalBinds<I>),
    /// Final expression of a do block or comprehension.
    Last(LExpr<I>),
    Rec(Vec<LStmt<I>>),
    Parallel,
    Applicative,
}

impl<I> Stmt<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Stmt::Bind(..) => NodeShape::BindStmt,
            Stmt::Body(_) => NodeShape::BodyStmt,
            Stmt::Let(_) => NodeShape::LetStmt,
            Stmt::Last(_) => NodeShape::LastStmt,
            Stmt::Rec(_) => NodeShape::RecStmt,
            Stmt::Parallel => NodeShape::ParStmt,
            Stmt::Applicative => NodeShape::ApplicativeStmt,
        }
    }
}

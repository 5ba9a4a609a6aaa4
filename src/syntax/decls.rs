//! Modules, declarations, bindings, and signatures.

use smol_str::SmolStr;

use super::expr::{Grhss, LExpr, MatchGroup};
use super::name::Located;
use super::pat::LPat;
use super::shape::NodeShape;
use super::types::{LTyVarBndr, LType};

pub type LDecl<I> = Located<Decl<I>>;
pub type LBind<I> = Located<Bind<I>>;
pub type LSig<I> = Located<Sig<I>>;
pub type LConDecl<I> = Located<ConDecl<I>>;

/// One analyzed source file.
#[derive(Clone, Debug, PartialEq)]
pub struct Module<I> {
    pub name: Option<SmolStr>,
    pub decls: Vec<LDecl<I>>,
}

impl<I> Module<I> {
    pub fn new(name: Option<SmolStr>, decls: Vec<LDecl<I>>) -> Self {
        Self { name, decls }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Decl<I> {
    Value(Bind<I>),
    Sig(Sig<I>),
    TyCl(TyClDecl<I>),
    Inst(InstDecl<I>),
    Deriving,
    Foreign,
    Rule,
    Splice,
}

impl<I> Decl<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Decl::Value(bind) => bind.shape(),
            Decl::Sig(sig) => sig.shape(),
            Decl::TyCl(decl) => decl.shape(),
            Decl::Inst(decl) => decl.shape(),
            Decl::Deriving => NodeShape::StandaloneDeriving,
            Decl::Foreign => NodeShape::ForeignDecl,
            Decl::Rule => NodeShape::RuleDecl,
            Decl::Splice => NodeShape::SpliceDecl,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Bind<I> {
    /// `name pats = rhs`, one match per equation.
    Fun {
        name: Located<I>,
        matches: MatchGroup<I>,
    },
    Pat {
        pat: LPat<I>,
        rhs: Grhss<I>,
    },
    /// Compiler-generated binding; the variable has no source location.
    Var {
        var: I,
        rhs: LExpr<I>,
    },
    /// Type-checker wrapper around a generalized binding group.
    Abs {
        binds: Vec<LBind<I>>,
    },
    PatSyn,
}

impl<I> Bind<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Bind::Fun { .. } => NodeShape::FunBind,
            Bind::Pat { .. } => NodeShape::PatBind,
            Bind::Var { .. } => NodeShape::VarBind,
            Bind::Abs { .. } => NodeShape::AbsBinds,
            Bind::PatSyn => NodeShape::PatSynBind,
        }
    }
}

/// A strongly connected group of bindings, as produced by dependency analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct BindGroup<I> {
    pub recursive: bool,
    pub binds: Vec<LBind<I>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValBinds<I> {
    /// After renaming: dependency-ordered groups.
    Grouped {
        groups: Vec<BindGroup<I>>,
        sigs: Vec<LSig<I>>,
    },
    /// Before renaming: a flat list.
    Ungrouped {
        binds: Vec<LBind<I>>,
        sigs: Vec<LSig<I>>,
    },
}

impl<I> ValBinds<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            ValBinds::Grouped { .. } => NodeShape::ValBindsGrouped,
            ValBinds::Ungrouped { .. } => NodeShape::ValBindsUngrouped,
        }
    }
}

/// `let` / `where` bindings.
#[derive(Clone, Debug, PartialEq)]
pub enum LocalBinds<I> {
    Empty,
    Val(ValBinds<I>),
    ImplicitParams,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Sig<I> {
    /// `f, g :: ty`
    Type { names: Vec<Located<I>>, ty: LType<I> },
    ClassOp { names: Vec<Located<I>>, ty: LType<I> },
    Fixity { names: Vec<Located<I>>, precedence: u8 },
    Inline { name: Located<I> },
    Specialise,
}

impl<I> Sig<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            Sig::Type { .. } => NodeShape::TypeSig,
            Sig::ClassOp { .. } => NodeShape::ClassOpSig,
            Sig::Fixity { .. } => NodeShape::FixitySig,
            Sig::Inline { .. } => NodeShape::InlineSig,
            Sig::Specialise => NodeShape::SpecSig,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TyClDecl<I> {
    Data {
        context: Vec<LType<I>>,
        name: Located<I>,
        tyvars: Vec<LTyVarBndr<I>>,
        cons: Vec<LConDecl<I>>,
        deriving: Vec<LType<I>>,
    },
    Synonym {
        name: Located<I>,
        tyvars: Vec<LTyVarBndr<I>>,
        rhs: LType<I>,
    },
    Class {
        context: Vec<LType<I>>,
        name: Located<I>,
        tyvars: Vec<LTyVarBndr<I>>,
        sigs: Vec<LSig<I>>,
        methods: Vec<LBind<I>>,
    },
    Family,
}

impl<I> TyClDecl<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            TyClDecl::Data { .. } => NodeShape::DataDecl,
            TyClDecl::Synonym { .. } => NodeShape::SynonymDecl,
            TyClDecl::Class { .. } => NodeShape::ClassDecl,
            TyClDecl::Family => NodeShape::FamilyDecl,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConDecl<I> {
    H98 { name: Located<I>, args: ConDeclArgs<I> },
    Gadt,
}

impl<I> ConDecl<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            ConDecl::H98 { .. } => NodeShape::ConDeclH98,
            ConDecl::Gadt => NodeShape::ConDeclGadt,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConDeclArgs<I> {
    Prefix(Vec<LType<I>>),
    Infix(LType<I>, LType<I>),
    Record(Vec<Located<ConDeclField<I>>>),
}

/// `a, b :: ty` inside a record constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct ConDeclField<I> {
    pub names: Vec<Located<I>>,
    pub ty: LType<I>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InstDecl<I> {
    Class {
        ty: LType<I>,
        sigs: Vec<LSig<I>>,
        binds: Vec<LBind<I>>,
    },
    DataFamily,
    TypeFamily,
}

impl<I> InstDecl<I> {
    pub fn shape(&self) -> NodeShape {
        match self {
            InstDecl::Class { .. } => NodeShape::ClassInstance,
            InstDecl::DataFamily => NodeShape::DataFamilyInstance,
            InstDecl::TypeFamily => NodeShape::TypeFamilyInstance,
        }
    }
}

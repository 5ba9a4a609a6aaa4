//! The analyzed syntax tree handed over by the front end.
//!
//! The same node types serve both passes: `Module<ResolvedName>` for the
//! renamer's output and `Module<TypedName<T>>` for the type checker's.
//! Every syntax category is a closed enum, so adding a node shape forces
//! the traversal in [`crate::hir`] to handle it.

mod decls;
mod expr;
mod name;
mod pat;
mod shape;
mod types;

pub use decls::{
    Bind, BindGroup, ConDecl, ConDeclArgs, ConDeclField, Decl, InstDecl, LBind, LConDecl, LDecl,
    LSig, LocalBinds, Module, Sig, TyClDecl, ValBinds,
};
pub use expr::{
    DoFlavour, Expr, Grhs, Grhss, LExpr, LGrhs, LMatch, LStmt, Literal, Match, MatchGroup,
    RecordField, Stmt,
};
pub use name::{Identifier, Located, ModuleRef, ResolvedName, SrcLoc, TypedName, tags};
pub use pat::{ConPatArgs, LPat, Pat, PatField};
pub use shape::NodeShape;
pub use types::{LTyVarBndr, LType, TyVarBndr, Type};

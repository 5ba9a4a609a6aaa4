//! Traversal engine — walks one analyzed tree and collects identifier records.
//!
//! Every node falls into one of four kinds:
//!
//! - **binders** (function heads, variable and as-patterns, type variable
//!   binders, declaration heads) emit a [`BindingKind::Binding`] record at the
//!   span of the bound name, then recurse;
//! - **references** (variables, constructors in patterns and expressions,
//!   type constructors, signature names, record fields) emit a
//!   [`BindingKind::Reference`] record, then recurse;
//! - **structural** nodes (application, `let`, `case`, `do`, match groups,
//!   guarded right-hand sides, …) only recurse;
//! - **unsupported** nodes abort the traversal in strict mode and are skipped
//!   whole, children included, in lenient mode.
//!
//! Children are visited depth-first, left to right, in source order. Records
//! are kept in visit order, so for two records on the same span the later
//! one wins when the index is built.

use std::marker::PhantomData;

use smol_str::format_smolstr;
use tracing::{debug, debug_span, trace};

use crate::base::SourceSpan;
use crate::syntax::{
    Bind, ConDecl, ConDeclArgs, ConDeclField, ConPatArgs, Decl, Expr, Grhss, Identifier, InstDecl,
    LBind, LConDecl, LDecl, LExpr, LGrhs, LMatch, LPat, LSig, LStmt, LTyVarBndr, LType,
    LocalBinds, Located, MatchGroup, Module, NodeShape, Pat, PatField, RecordField, Sig, SrcLoc,
    Stmt, TyClDecl, TyVarBndr, Type, ValBinds,
};

use super::adapter::{TypeRenderer, location_ref, record_for};
use super::config::ExtractConfig;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::error::{Phase, TraversalError};
use super::index::IdentifierIndex;
use super::symbols::{BindingKind, IdentifierRecord};

type Walk = Result<(), TraversalError>;

/// Index one tree.
///
/// Returns the index plus whatever lenient mode skipped. In strict mode the
/// first unsupported construct or imprecise occurrence is returned as an error.
pub fn index_tree<I, R>(
    module: &Module<I>,
    renderer: &R,
    config: &ExtractConfig,
    phase: Phase,
) -> Result<(IdentifierIndex, Vec<Diagnostic>), TraversalError>
where
    I: Identifier,
    R: TypeRenderer<I::Ty> + ?Sized,
{
    let _span = debug_span!("index_tree", %phase, module = ?module.name).entered();

    let mut visitor = Visitor::new(config, renderer, phase);
    visitor.visit_module(module)?;
    let (index, diagnostics) = visitor.finish();

    debug!(
        entries = index.len(),
        skipped = diagnostics.len(),
        "indexed tree"
    );
    Ok((index, diagnostics))
}

struct Visitor<'a, I, R: ?Sized> {
    config: &'a ExtractConfig,
    renderer: &'a R,
    /// Records in visit order.
    entries: Vec<(SourceSpan, IdentifierRecord)>,
    diagnostics: DiagnosticCollector,
    _ident: PhantomData<fn(&I)>,
}

impl<'a, I, R> Visitor<'a, I, R>
where
    I: Identifier,
    R: TypeRenderer<I::Ty> + ?Sized,
{
    fn new(config: &'a ExtractConfig, renderer: &'a R, phase: Phase) -> Self {
        Self {
            config,
            renderer,
            entries: Vec::new(),
            diagnostics: DiagnosticCollector::new(phase),
            _ident: PhantomData,
        }
    }

    fn finish(mut self) -> (IdentifierIndex, Vec<Diagnostic>) {
        let index = self.entries.into_iter().collect();
        (index, self.diagnostics.take())
    }

    // ------------------------------------------------------------------------
    // Emission and policy
    // ------------------------------------------------------------------------

    fn binder(&mut self, ident: &Located<I>) -> Walk {
        self.emit(ident, BindingKind::Binding)
    }

    fn reference(&mut self, ident: &Located<I>) -> Walk {
        self.emit(ident, BindingKind::Reference)
    }

    fn emit(&mut self, ident: &Located<I>, binding: BindingKind) -> Walk {
        // Namespace failures surface here, before the location policy gets a say.
        let record = record_for(&ident.node, binding, self.renderer)?;

        match &ident.loc {
            SrcLoc::Real(span) => {
                trace!(name = %record.name, %span, ?binding, "recorded identifier");
                self.entries.push((span.clone(), record));
                Ok(())
            }
            SrcLoc::Unhelpful(description) => {
                if self.config.mode.is_strict() {
                    return Err(TraversalError::ImpreciseLocation {
                        name: record.name,
                        description: description.clone(),
                    });
                }
                debug!(name = %record.name, %description, "skipping identifier without a span");
                self.diagnostics
                    .imprecise_location(&record.name, description);
                Ok(())
            }
        }
    }

    fn skip(&mut self, shape: NodeShape, loc: &SrcLoc) -> Walk {
        let location = location_ref(loc);
        if self.config.mode.is_strict() {
            return Err(TraversalError::UnsupportedConstruct { shape, location });
        }
        debug!(%shape, %location, "skipping unsupported construct");
        self.diagnostics.unsupported_construct(shape, location);
        Ok(())
    }

    /// Visit one node of `shape` with `walk`, unless the support matrix
    /// rules the shape out.
    fn node(
        &mut self,
        shape: NodeShape,
        loc: &SrcLoc,
        walk: impl FnOnce(&mut Self) -> Walk,
    ) -> Walk {
        if !self.config.support.supports(shape) {
            return self.skip(shape, loc);
        }
        let mark = self.entries.len();
        walk(self)?;
        if self.config.diagnostics {
            self.breadcrumb(shape, mark);
        }
        Ok(())
    }

    /// Prefix `shape` onto records produced since `mark` whose definition
    /// site is a placeholder. Records defined in real source are left alone.
    fn breadcrumb(&mut self, shape: NodeShape, mark: usize) {
        for (_, record) in &mut self.entries[mark..] {
            if !record.definition.is_precise() {
                record.name = format_smolstr!("{shape}/{}", record.name);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Declarations and bindings
    // ------------------------------------------------------------------------

    fn visit_module(&mut self, module: &Module<I>) -> Walk {
        for decl in &module.decls {
            self.visit_decl(decl)?;
        }
        Ok(())
    }

    fn visit_decl(&mut self, decl: &LDecl<I>) -> Walk {
        match &decl.node {
            Decl::Value(bind) => self.visit_bind(bind, &decl.loc),
            Decl::Sig(sig) => self.visit_sig(sig, &decl.loc),
            Decl::TyCl(tycl) => self.visit_tycl(tycl, &decl.loc),
            Decl::Inst(inst) => self.visit_inst(inst, &decl.loc),
            Decl::Deriving | Decl::Foreign | Decl::Rule | Decl::Splice => {
                self.skip(decl.node.shape(), &decl.loc)
            }
        }
    }

    fn visit_lbind(&mut self, bind: &LBind<I>) -> Walk {
        self.visit_bind(&bind.node, &bind.loc)
    }

    fn visit_bind(&mut self, bind: &Bind<I>, loc: &SrcLoc) -> Walk {
        self.node(bind.shape(), loc, |v| match bind {
            Bind::Fun { name, matches } => {
                v.binder(name)?;
                v.visit_match_group(matches, loc)
            }
            Bind::Pat { pat, rhs } => {
                v.visit_pat(pat)?;
                v.visit_grhss(rhs, loc)
            }
            // The generated variable has no occurrence to index.
            Bind::Var { rhs, .. } => v.visit_expr(rhs),
            Bind::Abs { binds } => binds.iter().try_for_each(|b| v.visit_lbind(b)),
            Bind::PatSyn => v.skip(NodeShape::PatSynBind, loc),
        })
    }

    fn visit_local_binds(&mut self, binds: &LocalBinds<I>, loc: &SrcLoc) -> Walk {
        match binds {
            LocalBinds::Empty => Ok(()),
            LocalBinds::Val(val) => self.visit_val_binds(val, loc),
            LocalBinds::ImplicitParams => self.skip(NodeShape::ImplicitParamBinds, loc),
        }
    }

    fn visit_val_binds(&mut self, binds: &ValBinds<I>, loc: &SrcLoc) -> Walk {
        self.node(binds.shape(), loc, |v| match binds {
            ValBinds::Grouped { groups, sigs } => {
                for group in groups {
                    group.binds.iter().try_for_each(|b| v.visit_lbind(b))?;
                }
                sigs.iter().try_for_each(|s| v.visit_lsig(s))
            }
            ValBinds::Ungrouped { binds, sigs } => {
                binds.iter().try_for_each(|b| v.visit_lbind(b))?;
                sigs.iter().try_for_each(|s| v.visit_lsig(s))
            }
        })
    }

    fn visit_lsig(&mut self, sig: &LSig<I>) -> Walk {
        self.visit_sig(&sig.node, &sig.loc)
    }

    fn visit_sig(&mut self, sig: &Sig<I>, loc: &SrcLoc) -> Walk {
        self.node(sig.shape(), loc, |v| match sig {
            Sig::Type { names, ty } => {
                names.iter().try_for_each(|n| v.reference(n))?;
                v.visit_type(ty)
            }
            // A class method is introduced by its signature.
            Sig::ClassOp { names, ty } => {
                names.iter().try_for_each(|n| v.binder(n))?;
                v.visit_type(ty)
            }
            Sig::Fixity { names, .. } => names.iter().try_for_each(|n| v.reference(n)),
            Sig::Inline { name } => v.reference(name),
            Sig::Specialise => v.skip(NodeShape::SpecSig, loc),
        })
    }

    fn visit_tycl(&mut self, decl: &TyClDecl<I>, loc: &SrcLoc) -> Walk {
        self.node(decl.shape(), loc, |v| match decl {
            TyClDecl::Data {
                context,
                name,
                tyvars,
                cons,
                deriving,
            } => {
                context.iter().try_for_each(|t| v.visit_type(t))?;
                v.binder(name)?;
                tyvars.iter().try_for_each(|b| v.visit_tyvar_bndr(b))?;
                cons.iter().try_for_each(|c| v.visit_con_decl(c))?;
                deriving.iter().try_for_each(|t| v.visit_type(t))
            }
            TyClDecl::Synonym { name, tyvars, rhs } => {
                v.binder(name)?;
                tyvars.iter().try_for_each(|b| v.visit_tyvar_bndr(b))?;
                v.visit_type(rhs)
            }
            TyClDecl::Class {
                context,
                name,
                tyvars,
                sigs,
                methods,
            } => {
                context.iter().try_for_each(|t| v.visit_type(t))?;
                v.binder(name)?;
                tyvars.iter().try_for_each(|b| v.visit_tyvar_bndr(b))?;
                sigs.iter().try_for_each(|s| v.visit_lsig(s))?;
                methods.iter().try_for_each(|b| v.visit_lbind(b))
            }
            TyClDecl::Family => v.skip(NodeShape::FamilyDecl, loc),
        })
    }

    fn visit_con_decl(&mut self, con: &LConDecl<I>) -> Walk {
        let loc = &con.loc;
        self.node(con.node.shape(), loc, |v| match &con.node {
            ConDecl::H98 { name, args } => match args {
                ConDeclArgs::Prefix(fields) => {
                    v.binder(name)?;
                    fields.iter().try_for_each(|t| v.visit_type(t))
                }
                ConDeclArgs::Infix(lhs, rhs) => {
                    v.visit_type(lhs)?;
                    v.binder(name)?;
                    v.visit_type(rhs)
                }
                ConDeclArgs::Record(fields) => {
                    v.binder(name)?;
                    fields.iter().try_for_each(|f| v.visit_con_field(f))
                }
            },
            ConDecl::Gadt => v.skip(NodeShape::ConDeclGadt, loc),
        })
    }

    fn visit_con_field(&mut self, field: &Located<ConDeclField<I>>) -> Walk {
        self.node(NodeShape::ConDeclField, &field.loc, |v| {
            field.node.names.iter().try_for_each(|n| v.binder(n))?;
            v.visit_type(&field.node.ty)
        })
    }

    fn visit_inst(&mut self, decl: &InstDecl<I>, loc: &SrcLoc) -> Walk {
        self.node(decl.shape(), loc, |v| match decl {
            InstDecl::Class { ty, sigs, binds } => {
                v.visit_type(ty)?;
                sigs.iter().try_for_each(|s| v.visit_lsig(s))?;
                binds.iter().try_for_each(|b| v.visit_lbind(b))
            }
            InstDecl::DataFamily | InstDecl::TypeFamily => v.skip(decl.shape(), loc),
        })
    }

    // ------------------------------------------------------------------------
    // Matches
    // ------------------------------------------------------------------------

    fn visit_match_group(&mut self, group: &MatchGroup<I>, loc: &SrcLoc) -> Walk {
        self.node(NodeShape::MatchGroup, loc, |v| {
            group.alts.iter().try_for_each(|m| v.visit_match(m))
        })
    }

    fn visit_match(&mut self, m: &LMatch<I>) -> Walk {
        self.node(NodeShape::Match, &m.loc, |v| {
            m.node.pats.iter().try_for_each(|p| v.visit_pat(p))?;
            v.visit_grhss(&m.node.rhs, &m.loc)
        })
    }

    fn visit_grhss(&mut self, grhss: &Grhss<I>, loc: &SrcLoc) -> Walk {
        self.node(NodeShape::GuardedRhss, loc, |v| {
            grhss.grhss.iter().try_for_each(|g| v.visit_grhs(g))?;
            v.visit_local_binds(&grhss.local_binds, loc)
        })
    }

    fn visit_grhs(&mut self, grhs: &LGrhs<I>) -> Walk {
        self.node(NodeShape::GuardedRhs, &grhs.loc, |v| {
            grhs.node.guards.iter().try_for_each(|s| v.visit_stmt(s))?;
            v.visit_expr(&grhs.node.body)
        })
    }

    // ------------------------------------------------------------------------
    // Expressions and statements
    // ------------------------------------------------------------------------

    fn visit_expr(&mut self, expr: &LExpr<I>) -> Walk {
        let loc = &expr.loc;
        self.node(expr.node.shape(), loc, |v| match &expr.node {
            Expr::Var(ident) => v.reference(ident),
            Expr::RecordCon { con, fields } => {
                v.reference(con)?;
                fields.iter().try_for_each(|f| v.visit_record_field(f))
            }
            Expr::RecordUpd { expr, fields } => {
                v.visit_expr(expr)?;
                fields.iter().try_for_each(|f| v.visit_record_field(f))
            }
            Expr::Lit(_) => Ok(()),
            Expr::Lam(group) | Expr::LamCase(group) => v.visit_match_group(group, loc),
            Expr::App(fun, arg) => {
                v.visit_expr(fun)?;
                v.visit_expr(arg)
            }
            Expr::AppType(fun, ty) => {
                v.visit_expr(fun)?;
                v.visit_type(ty)
            }
            Expr::OpApp { lhs, op, rhs } => {
                v.visit_expr(lhs)?;
                v.visit_expr(op)?;
                v.visit_expr(rhs)
            }
            Expr::Neg(inner) | Expr::Par(inner) | Expr::Wrap(inner) => v.visit_expr(inner),
            Expr::SectionL(operand, op) => {
                v.visit_expr(operand)?;
                v.visit_expr(op)
            }
            Expr::SectionR(op, operand) => {
                v.visit_expr(op)?;
                v.visit_expr(operand)
            }
            Expr::Tuple(items) => items.iter().flatten().try_for_each(|e| v.visit_expr(e)),
            Expr::Case(scrutinee, group) => {
                v.visit_expr(scrutinee)?;
                v.visit_match_group(group, loc)
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                v.visit_expr(cond)?;
                v.visit_expr(then_branch)?;
                v.visit_expr(else_branch)
            }
            Expr::MultiIf(alts) => alts.iter().try_for_each(|g| v.visit_grhs(g)),
            Expr::Let(binds, body) => {
                v.visit_local_binds(binds, loc)?;
                v.visit_expr(body)
            }
            Expr::Do(_, stmts) => stmts.iter().try_for_each(|s| v.visit_stmt(s)),
            Expr::List(items) => items.iter().try_for_each(|e| v.visit_expr(e)),
            Expr::ArithSeq { from, then, to } => {
                v.visit_expr(from)?;
                if let Some(then) = then {
                    v.visit_expr(then)?;
                }
                if let Some(to) = to {
                    v.visit_expr(to)?;
                }
                Ok(())
            }
            Expr::Sig(inner, ty) => {
                v.visit_expr(inner)?;
                v.visit_type(ty)
            }
            Expr::Splice | Expr::Bracket | Expr::Proc | Expr::Static(_) | Expr::Hole(_) => {
                v.skip(expr.node.shape(), loc)
            }
        })
    }

    fn visit_record_field(&mut self, field: &Located<RecordField<I>>) -> Walk {
        self.node(NodeShape::RecordField, &field.loc, |v| {
            v.reference(&field.node.field)?;
            match &field.node.value {
                Some(value) => v.visit_expr(value),
                None => Ok(()),
            }
        })
    }

    fn visit_stmt(&mut self, stmt: &LStmt<I>) -> Walk {
        let loc = &stmt.loc;
        self.node(stmt.node.shape(), loc, |v| match &stmt.node {
            Stmt::Bind(pat, expr) => {
                v.visit_pat(pat)?;
                v.visit_expr(expr)
            }
            Stmt::Body(expr) | Stmt::Last(expr) => v.visit_expr(expr),
            Stmt::Let(binds) => v.visit_local_binds(binds, loc),
            Stmt::Rec(stmts) => stmts.iter().try_for_each(|s| v.visit_stmt(s)),
            Stmt::Parallel | Stmt::Applicative => v.skip(stmt.node.shape(), loc),
        })
    }

    // ------------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------------

    fn visit_pat(&mut self, pat: &LPat<I>) -> Walk {
        let loc = &pat.loc;
        self.node(pat.node.shape(), loc, |v| match &pat.node {
            Pat::Wild | Pat::Lit(_) => Ok(()),
            Pat::Var(ident) => v.binder(ident),
            Pat::As(ident, inner) => {
                v.binder(ident)?;
                v.visit_pat(inner)
            }
            Pat::Lazy(inner) | Pat::Bang(inner) | Pat::Par(inner) => v.visit_pat(inner),
            Pat::List(pats) | Pat::Tuple(pats) => pats.iter().try_for_each(|p| v.visit_pat(p)),
            Pat::Con { con, args } => match args {
                ConPatArgs::Prefix(pats) => {
                    v.reference(con)?;
                    pats.iter().try_for_each(|p| v.visit_pat(p))
                }
                ConPatArgs::Infix(lhs, rhs) => {
                    v.visit_pat(lhs)?;
                    v.reference(con)?;
                    v.visit_pat(rhs)
                }
                ConPatArgs::Record(fields) => {
                    v.reference(con)?;
                    fields.iter().try_for_each(|f| v.visit_pat_field(f))
                }
            },
            Pat::View(expr, inner) => {
                v.visit_expr(expr)?;
                v.visit_pat(inner)
            }
            Pat::Sig(inner, ty) => {
                v.visit_pat(inner)?;
                v.visit_type(ty)
            }
            Pat::NPlusK(..) | Pat::Splice => v.skip(pat.node.shape(), loc),
        })
    }

    fn visit_pat_field(&mut self, field: &Located<PatField<I>>) -> Walk {
        self.node(NodeShape::PatField, &field.loc, |v| {
            v.reference(&field.node.field)?;
            match &field.node.pat {
                Some(pat) => v.visit_pat(pat),
                None => Ok(()),
            }
        })
    }

    // ------------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------------

    fn visit_type(&mut self, ty: &LType<I>) -> Walk {
        let loc = &ty.loc;
        self.node(ty.node.shape(), loc, |v| match &ty.node {
            Type::Var(ident) => v.reference(ident),
            Type::App(lhs, rhs) | Type::Fun(lhs, rhs) | Type::KindSig(lhs, rhs) => {
                v.visit_type(lhs)?;
                v.visit_type(rhs)
            }
            Type::List(inner) | Type::Par(inner) | Type::Bang(inner) => v.visit_type(inner),
            Type::Tuple(items) => items.iter().try_for_each(|t| v.visit_type(t)),
            Type::ForAll { binders, body } => {
                binders.iter().try_for_each(|b| v.visit_tyvar_bndr(b))?;
                v.visit_type(body)
            }
            Type::Qual { context, body } => {
                context.iter().try_for_each(|t| v.visit_type(t))?;
                v.visit_type(body)
            }
            Type::Op(lhs, op, rhs) => {
                v.visit_type(lhs)?;
                v.reference(op)?;
                v.visit_type(rhs)
            }
            Type::Lit(_) | Type::Wildcard => Ok(()),
            Type::Splice => v.skip(NodeShape::TySplice, loc),
        })
    }

    fn visit_tyvar_bndr(&mut self, bndr: &LTyVarBndr<I>) -> Walk {
        self.node(bndr.node.shape(), &bndr.loc, |v| match &bndr.node {
            TyVarBndr::User(ident) => v.binder(ident),
            TyVarBndr::Kinded(ident, kind) => {
                v.binder(ident)?;
                v.visit_type(kind)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::LocationRef;
    use crate::hir::adapter::NoTypes;
    use crate::hir::config::SupportMatrix;
    use crate::hir::diagnostics::codes;
    use crate::syntax::{Match, ModuleRef, ResolvedName, tags};
    use smol_str::SmolStr;

    fn span(start: u32, end: u32) -> SourceSpan {
        SourceSpan::on_line("T.hs", 1, start, end)
    }

    fn at<T>(start: u32, end: u32, node: T) -> Located<T> {
        Located::new(span(start, end), node)
    }

    /// A local name occurring at `start..end`, defined at `def`.
    fn local(
        name: &str,
        space: &str,
        start: u32,
        end: u32,
        def: SourceSpan,
    ) -> Located<ResolvedName> {
        at(start, end, ResolvedName::local(name, space, def))
    }

    fn var_expr(name: &str, start: u32, end: u32, def: SourceSpan) -> LExpr<ResolvedName> {
        at(start, end, Expr::Var(local(name, tags::VAR, start, end, def)))
    }

    fn module(decls: Vec<LDecl<ResolvedName>>) -> Module<ResolvedName> {
        Module::new(Some(SmolStr::new("T")), decls)
    }

    fn run(
        module: &Module<ResolvedName>,
        config: &ExtractConfig,
    ) -> Result<(IdentifierIndex, Vec<Diagnostic>), TraversalError> {
        index_tree(module, &NoTypes, config, Phase::Renamed)
    }

    // p@(Just y) = y
    #[test]
    fn test_pattern_binders_and_constructor_references() {
        let just = ResolvedName::external(
            "Just",
            tags::DATA,
            ModuleRef::new("GHC.Maybe", Some(SmolStr::new("base"))),
            SrcLoc::unhelpful("<wired in>"),
        );
        let pat = at(
            1,
            12,
            Pat::As(
                local("p", tags::VAR, 1, 1, span(1, 1)),
                Box::new(at(
                    3,
                    12,
                    Pat::Par(Box::new(at(
                        4,
                        11,
                        Pat::Con {
                            con: at(4, 7, just),
                            args: ConPatArgs::Prefix(vec![at(
                                9,
                                9,
                                Pat::Var(local("y", tags::VAR, 9, 9, span(9, 9))),
                            )]),
                        },
                    ))),
                )),
            ),
        );
        let rhs = Grhss::unguarded(var_expr("y", 16, 16, span(9, 9)));
        let m = module(vec![at(1, 16, Decl::Value(Bind::Pat { pat, rhs }))]);

        let (index, diagnostics) = run(&m, &ExtractConfig::strict()).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(index.len(), 4);

        let p = index.get(&span(1, 1)).unwrap();
        assert_eq!(p.binding, BindingKind::Binding);
        let con = index.get(&span(4, 7)).unwrap();
        assert_eq!(con.binding, BindingKind::Reference);
        assert_eq!(con.owning_package.as_deref(), Some("base"));
        let y_use = index.get(&span(16, 16)).unwrap();
        assert_eq!(y_use.definition, LocationRef::Precise(span(9, 9)));
    }

    #[test]
    fn test_strict_mode_aborts_on_unsupported() {
        let m = module(vec![at(1, 5, Decl::Splice)]);
        let err = run(&m, &ExtractConfig::strict()).unwrap_err();
        assert_eq!(
            err,
            TraversalError::UnsupportedConstruct {
                shape: NodeShape::SpliceDecl,
                location: LocationRef::Precise(span(1, 5)),
            }
        );
    }

    #[test]
    fn test_lenient_mode_skips_whole_subtree() {
        // f = $(splice) x
        let body = at(
            5,
            20,
            Expr::App(
                Box::new(at(5, 13, Expr::Splice)),
                Box::new(var_expr("x", 15, 15, span(30, 30))),
            ),
        );
        let bind = Bind::Fun {
            name: local("f", tags::VAR, 1, 1, span(1, 1)),
            matches: MatchGroup::new(vec![at(
                1,
                20,
                Match {
                    pats: Vec::new(),
                    rhs: Grhss::unguarded(body),
                },
            )]),
        };
        let m = module(vec![at(1, 20, Decl::Value(bind))]);

        let (index, diagnostics) = run(&m, &ExtractConfig::lenient()).unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.get(&span(15, 15)).is_some());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("ExprSplice"));
    }

    #[test]
    fn test_imprecise_occurrence_policy() {
        let ghost = Located {
            loc: SrcLoc::unhelpful("<generated>"),
            node: ResolvedName::local("g", tags::VAR, span(1, 1)),
        };
        let expr = at(1, 9, Expr::Par(Box::new(at(2, 8, Expr::Var(ghost)))));
        let bind = Bind::Var {
            var: ResolvedName::local("v", tags::VAR, span(1, 1)),
            rhs: expr,
        };
        let m = module(vec![at(1, 9, Decl::Value(bind))]);

        let err = run(&m, &ExtractConfig::strict()).unwrap_err();
        assert!(matches!(err, TraversalError::ImpreciseLocation { .. }));

        let (index, diagnostics) = run(&m, &ExtractConfig::lenient()).unwrap();
        assert!(index.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    // a@y = y, with the alias reported without a span
    #[test]
    fn test_imprecise_binder_still_visits_children() {
        let alias = Located {
            loc: SrcLoc::unhelpful("<generated>"),
            node: ResolvedName::local("a", tags::VAR, span(1, 1)),
        };
        let pat = at(
            1,
            3,
            Pat::As(
                alias,
                Box::new(at(3, 3, Pat::Var(local("y", tags::VAR, 3, 3, span(3, 3))))),
            ),
        );
        let rhs = Grhss::unguarded(var_expr("y", 7, 7, span(3, 3)));
        let m = module(vec![at(1, 7, Decl::Value(Bind::Pat { pat, rhs }))]);

        let err = run(&m, &ExtractConfig::strict()).unwrap_err();
        assert!(matches!(err, TraversalError::ImpreciseLocation { .. }));

        let (index, diagnostics) = run(&m, &ExtractConfig::lenient()).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].code.as_deref(),
            Some(codes::IMPRECISE_LOCATION)
        );
        assert!(index.records().all(|r| r.name != "a"));

        let y = index.get(&span(3, 3)).unwrap();
        assert_eq!(y.name, "y");
        assert_eq!(y.binding, BindingKind::Binding);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_namespace_fatal_even_when_lenient() {
        let expr = at(1, 3, Expr::Var(local("k", "kind", 1, 3, span(1, 3))));
        let bind = Bind::Var {
            var: ResolvedName::local("v", tags::VAR, span(1, 1)),
            rhs: expr,
        };
        let m = module(vec![at(1, 3, Decl::Value(bind))]);

        let err = run(&m, &ExtractConfig::lenient()).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_infix_constructor_visit_order() {
        // data T = Int :+ Int
        let int = || {
            at(
                0,
                0,
                ResolvedName::external(
                    "Int",
                    tags::TYCON,
                    ModuleRef::new("GHC.Types", None),
                    SrcLoc::unhelpful("<wired in>"),
                ),
            )
        };
        let int_at = |start, end| {
            let mut name = int();
            name.loc = SrcLoc::Real(span(start, end));
            at(start, end, Type::Var(name))
        };
        let con = at(
            10,
            20,
            ConDecl::H98 {
                name: local(":+", tags::DATA, 14, 15, span(14, 15)),
                args: ConDeclArgs::Infix(int_at(10, 12), int_at(17, 19)),
            },
        );
        let decl = TyClDecl::Data {
            context: Vec::new(),
            name: local("T", tags::TYCON, 6, 6, span(6, 6)),
            tyvars: Vec::new(),
            cons: vec![con],
            deriving: Vec::new(),
        };
        let m = module(vec![at(1, 20, Decl::TyCl(decl))]);
        let config = ExtractConfig::strict().with_diagnostics(true);

        let (index, _) = run(&m, &config).unwrap();
        let names: Vec<_> = index.records().map(|r| r.name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "T",
                "DataDecl/ConDeclH98/TyVar/Int",
                ":+",
                "DataDecl/ConDeclH98/TyVar/Int",
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_leave_source_defined_records_alone() {
        let expr = var_expr("x", 1, 1, span(40, 40));
        let bind = Bind::Var {
            var: ResolvedName::local("v", tags::VAR, span(1, 1)),
            rhs: expr,
        };
        let m = module(vec![at(1, 1, Decl::Value(bind))]);
        let config = ExtractConfig::strict().with_diagnostics(true);

        let (index, _) = run(&m, &config).unwrap();
        assert_eq!(index.get(&span(1, 1)).unwrap().name, "x");
    }

    #[test]
    fn test_disabled_shape_is_unsupported() {
        let binds = LocalBinds::Val(ValBinds::Ungrouped {
            binds: Vec::new(),
            sigs: Vec::new(),
        });
        let expr = at(1, 9, Expr::Let(binds, Box::new(var_expr("x", 9, 9, span(9, 9)))));
        let bind = Bind::Var {
            var: ResolvedName::local("v", tags::VAR, span(1, 1)),
            rhs: expr,
        };
        let m = module(vec![at(1, 9, Decl::Value(bind))]);

        let support = SupportMatrix::full().disable(NodeShape::ValBindsUngrouped);
        let strict = ExtractConfig::strict().with_support(support.clone());
        let err = run(&m, &strict).unwrap_err();
        assert!(matches!(
            err,
            TraversalError::UnsupportedConstruct {
                shape: NodeShape::ValBindsUngrouped,
                ..
            }
        ));

        let lenient = ExtractConfig::lenient().with_support(support);
        let (index, diagnostics) = run(&m, &lenient).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_same_span_last_visit_wins() {
        // Two occurrences reported on the same span; the later one is kept.
        let first = var_expr("a", 1, 3, span(50, 50));
        let second = var_expr("b", 1, 3, span(60, 60));
        let expr = at(1, 3, Expr::App(Box::new(first), Box::new(second)));
        let bind = Bind::Var {
            var: ResolvedName::local("v", tags::VAR, span(1, 1)),
            rhs: expr,
        };
        let m = module(vec![at(1, 3, Decl::Value(bind))]);

        let (index, _) = run(&m, &ExtractConfig::strict()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&span(1, 3)).unwrap().name, "b");
    }
}

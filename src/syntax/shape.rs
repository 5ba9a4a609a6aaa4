//! Fieldless tags naming every node shape of the analyzed tree.

use std::fmt;

macro_rules! node_shapes {
    (
        implemented { $($implemented:ident),* $(,)? }
        unimplemented { $($unimplemented:ident),* $(,)? }
    ) => {
        /// One tag per node variant the front end can hand us.
        ///
        /// Used by the support matrix, by diagnostics, and as the path
        /// segment prefixed onto placeholder-sited records when
        /// breadcrumbing is on.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
        pub enum NodeShape {
            $($implemented,)*
            $($unimplemented,)*
        }

        impl NodeShape {
            /// Shapes the traversal engine has code for.
            pub const IMPLEMENTED: &'static [NodeShape] = &[$(NodeShape::$implemented),*];

            /// Shapes that are recognized but never traversed.
            pub const UNIMPLEMENTED: &'static [NodeShape] = &[$(NodeShape::$unimplemented),*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(NodeShape::$implemented => stringify!($implemented),)*
                    $(NodeShape::$unimplemented => stringify!($unimplemented),)*
                }
            }

            pub const fn is_implemented(self) -> bool {
                match self {
                    $(NodeShape::$implemented => true,)*
                    $(NodeShape::$unimplemented => false,)*
                }
            }
        }
    };
}

node_shapes! {
    implemented {
        // bindings
        FunBind, PatBind, VarBind, AbsBinds,
        ValBindsGrouped, ValBindsUngrouped,
        // signatures
        TypeSig, ClassOpSig, FixitySig, InlineSig,
        // type and class declarations
        DataDecl, SynonymDecl, ClassDecl, ConDeclH98, ConDeclField, ClassInstance,
        // matches
        MatchGroup, Match, GuardedRhss, GuardedRhs,
        // expressions
        ExprVar, RecordCon, RecordUpd, RecordField, ExprLit, Lambda, LambdaCase,
        App, TypeApp, OpApp, Negation, ExprPar, SectionL, SectionR, ExplicitTuple,
        Case, If, MultiIf, LetExpr, DoExpr, ExplicitList, ArithSeq, ExprWithSig, Wrap,
        // statements
        BindStmt, BodyStmt, LetStmt, LastStmt, RecStmt,
        // patterns
        WildPat, VarPat, AsPat, LazyPat, BangPat, ParPat, ListPat, TuplePat, ConPat,
        PatField, LitPat, ViewPat, SigPat,
        // types
        TyVar, TyApp, FunTy, ListTy, TupleTy, ParTy, ForAllTy, QualTy, KindSigTy,
        BangTy, OpTy, TyLit, WildcardTy, UserTyVar, KindedTyVar,
    }
    unimplemented {
        StandaloneDeriving, ForeignDecl, RuleDecl, SpliceDecl,
        PatSynBind, ImplicitParamBinds, SpecSig,
        FamilyDecl, ConDeclGadt, DataFamilyInstance, TypeFamilyInstance,
        ExprSplice, Bracket, Proc, Static, Hole,
        ParStmt, ApplicativeStmt,
        NPlusKPat, PatSplice, TySplice,
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_lists_are_disjoint() {
        for shape in NodeShape::IMPLEMENTED {
            assert!(shape.is_implemented());
            assert!(!NodeShape::UNIMPLEMENTED.contains(shape));
        }
        for shape in NodeShape::UNIMPLEMENTED {
            assert!(!shape.is_implemented());
        }
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(NodeShape::FunBind.to_string(), "FunBind");
        assert_eq!(NodeShape::Bracket.as_str(), "Bracket");
    }
}

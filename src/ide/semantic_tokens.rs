//! Semantic tokens — syntax highlighting based on resolved namespaces.

use crate::hir::{IdentifierIndex, IdentifierRecord, Namespace};

/// Token type for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Variable,
    Function,
    EnumMember,
    TypeParameter,
    Type,
}

impl TokenType {
    /// Convert to LSP token type index.
    pub fn to_lsp_index(self) -> u32 {
        match self {
            TokenType::Variable => 0,
            TokenType::Function => 1,
            TokenType::EnumMember => 2,
            TokenType::TypeParameter => 3,
            TokenType::Type => 4,
        }
    }

    fn of(record: &IdentifierRecord) -> Self {
        match record.namespace {
            Namespace::Value if is_function_type(record.resolved_type.as_deref()) => {
                TokenType::Function
            }
            Namespace::Value => TokenType::Variable,
            Namespace::DataConstructor => TokenType::EnumMember,
            Namespace::TypeVariable => TokenType::TypeParameter,
            Namespace::TypeOrClass => TokenType::Type,
        }
    }
}

/// A top-level arrow, ignoring arrows nested in parentheses or brackets.
fn is_function_type(ty: Option<&str>) -> bool {
    let Some(ty) = ty else {
        return false;
    };
    let mut depth = 0i32;
    let mut prev = ' ';
    for c in ty.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            '>' if prev == '-' && depth == 0 => return true,
            _ => {}
        }
        prev = c;
    }
    false
}

/// A semantic token for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    pub line: u32,
    pub col: u32,
    /// Length of the token in characters
    pub length: u32,
    pub token_type: TokenType,
    /// Set for binders (the `declaration` modifier).
    pub declaration: bool,
}

/// Get semantic tokens for every single-line occurrence in the index.
///
/// Tokens come out in span order (file, then line, then column).
pub fn semantic_tokens(index: &IdentifierIndex) -> Vec<SemanticToken> {
    index
        .iter()
        .filter(|(span, _)| span.start_line == span.end_line)
        .map(|(span, record)| SemanticToken {
            line: span.start_line,
            col: span.start_col,
            length: span.end_col.saturating_sub(span.start_col).saturating_add(1),
            token_type: TokenType::of(record),
            declaration: record.binding.is_binding(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{LocationRef, SourceSpan};
    use crate::hir::BindingKind;
    use smol_str::SmolStr;

    fn record(namespace: Namespace, binding: BindingKind, ty: Option<&str>) -> IdentifierRecord {
        IdentifierRecord {
            name: SmolStr::new("n"),
            owning_module: None,
            owning_package: None,
            namespace,
            resolved_type: ty.map(str::to_string),
            definition: LocationRef::opaque("test"),
            binding,
        }
    }

    #[test]
    fn test_token_types_and_modifiers() {
        let index = IdentifierIndex::from_pairs([
            (
                SourceSpan::on_line("A.hs", 1, 1, 3),
                record(Namespace::Value, BindingKind::Binding, Some("Int -> Int")),
            ),
            (
                SourceSpan::on_line("A.hs", 1, 5, 5),
                record(Namespace::Value, BindingKind::Binding, Some("(Int -> Int)")),
            ),
            (
                SourceSpan::on_line("A.hs", 2, 9, 12),
                record(Namespace::DataConstructor, BindingKind::Reference, None),
            ),
            (
                SourceSpan::new("A.hs", 3, 1, 4, 2),
                record(Namespace::TypeOrClass, BindingKind::Reference, None),
            ),
        ]);

        let tokens = semantic_tokens(&index);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token_type, TokenType::Function);
        assert_eq!(tokens[0].length, 3);
        assert!(tokens[0].declaration);
        assert_eq!(tokens[1].token_type, TokenType::Variable);
        assert_eq!(tokens[2].token_type, TokenType::EnumMember);
        assert!(!tokens[2].declaration);
    }

    #[test]
    fn test_full_width_line_length_saturates() {
        let index = IdentifierIndex::from_pairs([(
            SourceSpan::on_line("A.hs", 1, 0, u32::MAX),
            record(Namespace::Value, BindingKind::Reference, None),
        )]);

        let tokens = semantic_tokens(&index);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].length, u32::MAX);
    }

    #[test]
    fn test_to_lsp_index() {
        assert_eq!(TokenType::Variable.to_lsp_index(), 0);
        assert_eq!(TokenType::Type.to_lsp_index(), 4);
    }
}

//! Property tests over generated well-formed documents.

use crate::parse;
use crate::tests::utils;
use crate::token::TokenKind;
use proptest::prelude::*;

proptest! {
    /// Parsing is idempotent: the same text yields structurally identical
    /// documents, with field order preserved.
    #[test]
    fn parse_is_idempotent(
        op_name in "[a-z][a-z0-9_]{0,6}",
        field_names in prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..8),
    ) {
        let body = field_names.join(" ");
        let source = format!("query {op_name} {{ {body} }}");

        let first = parse(&source).unwrap();
        let second = parse(&source).unwrap();
        prop_assert_eq!(&first, &second);

        let selection = first.operations[0].field.selection.as_ref().unwrap();
        prop_assert_eq!(selection.fields.len(), field_names.len());
        for (field, name) in selection.fields.iter().zip(&field_names) {
            prop_assert_eq!(field.name.as_ref(), name.as_str());
        }
    }

    /// For any well-formed document the number of `{` tokens equals the
    /// number of `}` tokens, and the parse succeeds with an empty scope
    /// stack (the document is returned at all).
    #[test]
    fn braces_balance(
        depth in 1usize..6,
        name in "[a-z][a-z0-9_]{0,6}",
    ) {
        let mut source = String::new();
        for _ in 0..depth {
            source.push('{');
            source.push_str(&name);
        }
        source.push_str(&"}".repeat(depth));

        let kinds = utils::scan_kinds(&source);
        let opens = kinds.iter().filter(|kind| **kind == TokenKind::CurlyOpen).count();
        let closes = kinds.iter().filter(|kind| **kind == TokenKind::CurlyClose).count();
        prop_assert_eq!(opens, depth);
        prop_assert_eq!(opens, closes);

        prop_assert!(parse(&source).is_ok());
    }

    /// Integer arguments round-trip their literal text.
    #[test]
    fn int_argument_text_preserved(value in -1000i64..1000) {
        let source = format!("query q: get(n: {value}) {{ f }}");
        let doc = parse(&source).unwrap();
        prop_assert_eq!(
            doc.operations[0].field.args[0].value.as_ref(),
            value.to_string(),
        );
    }
}

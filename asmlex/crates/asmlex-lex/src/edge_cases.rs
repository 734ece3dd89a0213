//! Edge case and property tests for asmlex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with, LexerOptions, TokenKind};
    use proptest::prelude::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize(line).kinds().collect()
    }

    fn without_blanks(line: &str) -> String {
        line.chars().filter(|&c| c != ' ' && c != '\t').collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_punctuation() {
        use TokenKind::*;
        assert_eq!(
            kinds(",:[]+-*"),
            [Comma, Colon, MemOpen, MemClose, Plus, Minus, Mult]
        );
    }

    #[test]
    fn test_edge_leading_and_trailing_blanks() {
        use TokenKind::*;
        assert_eq!(kinds("   \tnop\t  "), [Mnemonic]);
    }

    #[test]
    fn test_edge_punctuation_first_then_word() {
        use TokenKind::*;
        // Only the empty stream or a prefix puts a word in mnemonic position.
        assert_eq!(kinds("[eax] mov"), [MemOpen, Register, MemClose, Unknown]);
    }

    #[test]
    fn test_edge_prefix_only() {
        use TokenKind::*;
        assert_eq!(kinds("lock"), [Prefix]);
        assert_eq!(kinds("lock rep"), [Prefix, Prefix]);
    }

    #[test]
    fn test_edge_mnemonic_after_mnemonic_is_unknown() {
        use TokenKind::*;
        assert_eq!(kinds("mov mov"), [Mnemonic, Unknown]);
    }

    #[test]
    fn test_edge_carriage_return_stays_in_word() {
        let stream = tokenize("ret\r");
        assert_eq!(stream.len(), 1);
        assert_eq!(stream[0].text(), "ret\r");
    }

    #[test]
    fn test_edge_long_word() {
        let word = "a".repeat(10_000);
        let stream = tokenize(&format!("call {word}"));
        assert_eq!(stream.len(), 2);
        assert_eq!(stream[1].text.len(), 10_000);
        assert_eq!(stream[1].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_edge_uppercase_register_is_not_register() {
        use TokenKind::*;
        assert_eq!(kinds("MOV EAX, EBX"), [Mnemonic, Unknown, Comma, Unknown]);
    }

    #[test]
    fn test_edge_legacy_minus_keeps_kinds() {
        let line = "lea eax, [ebp-8]";
        let legacy: Vec<_> = tokenize_with(
            line,
            LexerOptions {
                legacy_minus_text: true,
            },
        )
        .kinds()
        .collect();
        assert_eq!(legacy, kinds(line));
    }

    #[test]
    fn test_edge_render_canonical_line() {
        let line = "lock repne mov eax, dword ptr ds:[ebx]";
        assert_eq!(tokenize(line).render(), line);
    }

    // ==================== PROPERTIES ====================

    fn instruction_like() -> impl Strategy<Value = String> {
        let known = prop::sample::select(vec![
            "lock", "repne", "mov", "eax", "dword", "ptr", "ds", "8",
        ])
        .prop_map(str::to_string);
        let piece = prop_oneof![
            known,
            "[a-z0-9._]{1,6}",
            "[ \t]{1,3}",
            "[,:\\[\\]+*-]",
        ];
        prop::collection::vec(piece, 0..16).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn prop_total_on_any_input(line in any::<String>()) {
            let stream = tokenize(&line);
            prop_assert!(stream.iter().all(|t| !t.text.is_empty()));
        }

        #[test]
        fn prop_no_character_dropped(line in any::<String>()) {
            let joined: String = tokenize(&line).iter().map(|t| t.text()).collect();
            prop_assert_eq!(joined, without_blanks(&line));
        }

        #[test]
        fn prop_spans_slice_back_to_text(line in any::<String>()) {
            for token in &tokenize(&line) {
                prop_assert_eq!(token.span.source_text(&line), Some(token.text()));
            }
        }

        #[test]
        fn prop_spans_are_ordered(line in instruction_like()) {
            let stream = tokenize(&line);
            for pair in stream.as_slice().windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
        }

        #[test]
        fn prop_render_preserves_kinds(line in instruction_like()) {
            let stream = tokenize(&line);
            let again = tokenize(&stream.render());
            prop_assert_eq!(stream.kinds().collect::<Vec<_>>(), again.kinds().collect::<Vec<_>>());
        }

        #[test]
        fn prop_punctuation_is_single_char(line in instruction_like()) {
            for token in &tokenize(&line) {
                if token.kind.is_punctuation() {
                    prop_assert_eq!(token.text.chars().count(), 1);
                    prop_assert_eq!(TokenKind::punctuation(token.text.chars().next().unwrap()), Some(token.kind));
                }
            }
        }

        #[test]
        fn prop_blank_padding_is_irrelevant(line in instruction_like()) {
            let padded = format!(" \t{line}\t ");
            prop_assert_eq!(kinds(&padded), kinds(&line));
        }
    }
}

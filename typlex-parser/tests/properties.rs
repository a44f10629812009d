//! Property-based tests for the tokenizer and the highlighting parser
//!
//! Both must accept any text: tokens tile the input exactly, and markers stay inside it on
//! character boundaries whatever the nesting.

use proptest::prelude::*;
use typlex_parser::typlex::highlighting::{CoalescingListener, HighlightingListener};
use typlex_parser::typlex::testing::{highlight_text, tokenize_string};
use typlex_parser::typlex::token::TokenType;
use typlex_parser::{Parser, Tokenizer};

/// Text dense in markup, math and code syntax
fn markup_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        r#"[a-z0-9 \n\t*_`$#@<>=+/\\\-\[\](){}"'.:;%]{0,80}"#,
        r"\PC{0,40}",
        prop::collection::vec(
            prop_oneof![
                Just("= ".to_string()),
                Just("- ".to_string()),
                Just("#let ".to_string()),
                Just("#f(".to_string()),
                Just("[".to_string()),
                Just("]".to_string()),
                Just("$".to_string()),
                Just("/*".to_string()),
                Just("*/".to_string()),
                Just("\"".to_string()),
                Just("\n".to_string()),
                Just("```".to_string()),
                "[a-z]{1,6}",
            ],
            0..30,
        )
        .prop_map(|parts| parts.concat()),
    ]
}

proptest! {
    #[test]
    fn tokens_tile_the_input(text in markup_strategy()) {
        let tokens = tokenize_string(&text);
        prop_assert_eq!(tokens.first().map(|t| t.kind), Some(TokenType::Begin));
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenType::TextEnd));

        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(rebuilt, text.clone());
        prop_assert!(tokens[1..tokens.len() - 1].iter().all(|t| t.len > 0));
    }

    #[test]
    fn tokenizer_stays_at_end(text in markup_strategy()) {
        let mut tok = Tokenizer::new(&text);
        while !tok.at_end() {
            tok.next_token();
        }
        let end = tok.next_token();
        prop_assert_eq!(end.kind, TokenType::TextEnd);
        prop_assert_eq!(end.start, text.len());
    }

    #[test]
    fn markers_stay_inside_the_text(text in markup_strategy()) {
        for m in highlight_text(&text) {
            prop_assert!(m.len > 0, "empty marker {}", m);
            prop_assert!(m.end() <= text.len(), "marker {} past the end", m);
            prop_assert!(m.text(&text).is_some(), "marker {} splits a character", m);
        }
    }

    #[test]
    fn highlighting_is_deterministic(text in markup_strategy()) {
        prop_assert_eq!(highlight_text(&text), highlight_text(&text));
    }

    #[test]
    fn coalesced_markers_never_overlap_within_a_kind(text in markup_strategy()) {
        let markers = Parser::new(&text, CoalescingListener::new()).parse().finish();
        for (i, a) in markers.iter().enumerate() {
            for b in &markers[i + 1..] {
                if a.kind == b.kind {
                    prop_assert!(a.end() < b.start || b.end() < a.start, "{} and {} touch", a, b);
                }
            }
        }
    }

    #[test]
    fn deep_nesting_does_not_overflow(depth in 1usize..4000, opener in prop_oneof![
        Just("["), Just("#("), Just("#{"), Just("$#("), Just("_*"), Just("/*"),
    ]) {
        let text = opener.repeat(depth);
        let markers = Parser::new(&text, HighlightingListener::new()).parse().sorted();
        prop_assert!(markers.iter().all(|m| m.end() <= text.len()));
    }
}

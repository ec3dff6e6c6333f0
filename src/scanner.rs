//! Single-pass template scanner
//!
//! Splits a template into literal runs and `{key}` tokens in one
//! left-to-right sweep. There is no nesting and no escaping: a key runs
//! from the opening brace to the first closing brace, and an opening
//! brace inside a key is ordinary key text.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawFragment {
    /// A run of text containing no opening brace
    #[regex(r"[^{]+")]
    Literal,

    /// An opening brace, a key, and the first closing brace after it
    #[regex(r"\{[^}]*\}")]
    Token,

    /// An opening brace whose closing brace never arrives; longest-match
    /// keeps this from firing anywhere but the end of the template
    #[regex(r"\{[^}]*")]
    Unclosed,
}

/// One piece of a template, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment<'t> {
    /// Text outside any token, emitted verbatim
    Literal(&'t str),
    /// A complete token: its key and the byte offset of its opening brace
    Token { key: &'t str, start: usize },
    /// A trailing token that was opened but never closed
    Unclosed { key: &'t str, start: usize },
}

/// Scan `template` into fragments carrying byte offsets.
pub(crate) fn scan(template: &str) -> impl Iterator<Item = Fragment<'_>> {
    RawFragment::lexer(template)
        .spanned()
        .filter_map(move |(raw, span)| {
            // The rules cover every byte, so lexing cannot fail; braces are
            // single-byte ASCII, which keeps the slice boundaries valid.
            let fragment = match raw.ok()? {
                RawFragment::Literal => Fragment::Literal(&template[span.start..span.end]),
                RawFragment::Token => Fragment::Token {
                    key: &template[span.start + 1..span.end - 1],
                    start: span.start,
                },
                RawFragment::Unclosed => Fragment::Unclosed {
                    key: &template[span.start + 1..span.end],
                    start: span.start,
                },
            };
            Some(fragment)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(template: &str) -> Vec<Fragment<'_>> {
        scan(template).collect()
    }

    #[test]
    fn test_empty_template() {
        assert!(fragments("").is_empty());
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(fragments("plain-text"), vec![Fragment::Literal("plain-text")]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(
            fragments("{adj}"),
            vec![Fragment::Token {
                key: "adj",
                start: 0
            }]
        );
    }

    #[test]
    fn test_token_between_literals() {
        assert_eq!(
            fragments("a{key}b"),
            vec![
                Fragment::Literal("a"),
                Fragment::Token {
                    key: "key",
                    start: 1
                },
                Fragment::Literal("b"),
            ]
        );
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(
            fragments("{a}{b}"),
            vec![
                Fragment::Token { key: "a", start: 0 },
                Fragment::Token { key: "b", start: 3 },
            ]
        );
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(fragments("{}"), vec![Fragment::Token { key: "", start: 0 }]);
    }

    #[test]
    fn test_open_brace_inside_key_is_key_text() {
        assert_eq!(
            fragments("{a{b}"),
            vec![Fragment::Token {
                key: "a{b",
                start: 0
            }]
        );
    }

    #[test]
    fn test_unclosed_token_at_end() {
        assert_eq!(
            fragments("pre-{adj"),
            vec![
                Fragment::Literal("pre-"),
                Fragment::Unclosed {
                    key: "adj",
                    start: 4
                },
            ]
        );
    }

    #[test]
    fn test_bare_open_brace() {
        assert_eq!(
            fragments("{"),
            vec![Fragment::Unclosed { key: "", start: 0 }]
        );
    }

    #[test]
    fn test_close_brace_is_literal() {
        assert_eq!(fragments("a}b"), vec![Fragment::Literal("a}b")]);
    }

    #[test]
    fn test_key_may_hold_spaces_and_punctuation() {
        assert_eq!(
            fragments("{two words!}"),
            vec![Fragment::Token {
                key: "two words!",
                start: 0
            }]
        );
    }

    #[test]
    fn test_offsets_count_bytes_not_chars() {
        // "héllo " is seven bytes: the accented character takes two.
        assert_eq!(
            fragments("héllo {x}"),
            vec![
                Fragment::Literal("héllo "),
                Fragment::Token { key: "x", start: 7 },
            ]
        );
    }
}

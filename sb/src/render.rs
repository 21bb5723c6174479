//! Placeholder substitution

use std::ops::Range;

/// Token marking a fill-in slot inside a template
pub const PLACEHOLDER: &str = "{content}";

/// Count non-overlapping placeholder occurrences, scanning left to right
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

/// Byte ranges of every placeholder occurrence, in order
pub fn placeholder_spans(template: &str) -> Vec<Range<usize>> {
    template
        .match_indices(PLACEHOLDER)
        .map(|(start, token)| start..start + token.len())
        .collect()
}

/// Fill placeholders one input at a time.
///
/// Each input replaces the leftmost token in the text produced so far.
/// Occurrences beyond the supplied inputs stay verbatim and surplus inputs are
/// ignored. An input that itself contains the token is filled by the next
/// input.
pub fn render<S: AsRef<str>>(template: &str, inputs: &[S]) -> String {
    let mut result = template.to_string();

    for input in inputs {
        if !result.contains(PLACEHOLDER) {
            break;
        }
        result = result.replacen(PLACEHOLDER, input.as_ref(), 1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_all_slots_filled() {
        let out = render("Hello {content}, welcome to {content}!", &["Alice", "Wonderland"]);
        assert_eq!(out, "Hello Alice, welcome to Wonderland!");
    }

    #[test]
    fn test_render_leaves_unfilled_slots() {
        assert_eq!(render("{content}-{content}-{content}", &["a", "b"]), "a-b-{content}");
    }

    #[test]
    fn test_render_ignores_extra_inputs() {
        assert_eq!(render("[{content}]", &["x", "y", "z"]), "[x]");
    }

    #[test]
    fn test_render_without_placeholders() {
        assert_eq!(render("plain text", &["ignored"]), "plain text");
        assert_eq!(render("", &["ignored"]), "");
        assert_eq!(placeholder_count(""), 0);
    }

    #[test]
    fn test_render_rescans_inserted_text() {
        let out = render("{content} and {content}", &["{content}", "second"]);
        assert_eq!(out, "second and {content}");

        let out = render("[{content}]", &["<{content}>", "inner"]);
        assert_eq!(out, "[<inner>]");
    }

    #[test]
    fn test_render_multiline_and_unicode() {
        let out = render("把下面的内容翻译成英文：\n{content}", &["你好，世界"]);
        assert_eq!(out, "把下面的内容翻译成英文：\n你好，世界");
    }

    #[test]
    fn test_placeholder_count_adjacent() {
        assert_eq!(placeholder_count("{content}{content}"), 2);
        assert_eq!(placeholder_count("{content"), 0);
        assert_eq!(placeholder_count("{{content}}"), 1);
    }

    #[test]
    fn test_placeholder_spans() {
        let spans = placeholder_spans("a{content}b{content}");
        assert_eq!(spans, vec![1..10, 11..20]);
        assert!(placeholder_spans("none").is_empty());
    }

    // Inputs are drawn without braces so they cannot form a token
    fn template_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof!["[a-z ]{0,6}", Just(PLACEHOLDER.to_string())], 0..8)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_render_consumes_one_slot_per_input(
            template in template_strategy(),
            inputs in prop::collection::vec("[a-z0-9]{0,5}", 0..10),
        ) {
            let before = placeholder_count(&template);
            let after = placeholder_count(&render(&template, &inputs));
            prop_assert_eq!(after, before.saturating_sub(inputs.len()));
        }

        #[test]
        fn prop_render_without_inputs_is_identity(template in ".*") {
            let empty: [&str; 0] = [];
            prop_assert_eq!(render(&template, &empty), template);
        }

        #[test]
        fn prop_render_empty_template(inputs in prop::collection::vec(".*", 0..5)) {
            prop_assert_eq!(render("", &inputs), "");
        }

        #[test]
        fn prop_spans_agree_with_count(template in template_strategy()) {
            prop_assert_eq!(placeholder_spans(&template).len(), placeholder_count(&template));
        }
    }
}

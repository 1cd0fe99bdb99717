//! Prompt template rendering

/// Placeholder for the source text
const TEXT_TOKEN: &str = "{text}";
/// Placeholder for the target-language description
const TARGET_LANGUAGE_TOKEN: &str = "{targetLanguage}";

/// Render a prompt template by substituting `{text}` and `{targetLanguage}`
///
/// Both tokens are replaced in a single left-to-right pass over the
/// original template. Substituted values are never re-scanned, so
/// caller-supplied text that itself contains a token is inserted
/// verbatim. All other characters of the template pass through
/// unchanged.
pub fn render(template: &str, text: &str, target_language: &str) -> String {
    let mut out = String::with_capacity(template.len() + text.len() + target_language.len());
    let mut rest = template;

    loop {
        let next_text = rest.find(TEXT_TOKEN);
        let next_target = rest.find(TARGET_LANGUAGE_TOKEN);

        let (at, token, replacement) = match (next_text, next_target) {
            (None, None) => {
                out.push_str(rest);
                return out;
            }
            (Some(t), Some(g)) if t < g => (t, TEXT_TOKEN, text),
            (Some(t), None) => (t, TEXT_TOKEN, text),
            (_, Some(g)) => (g, TARGET_LANGUAGE_TOKEN, target_language),
        };

        out.push_str(&rest[..at]);
        out.push_str(replacement);
        rest = &rest[at + token.len()..];
    }
}

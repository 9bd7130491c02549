use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:json)?\n?").unwrap());
static JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

/// Removes markdown code fences models tend to wrap JSON replies in.
pub fn strip_code_fences(content: &str) -> String {
    CODE_FENCE.replace_all(content, "").trim().to_string()
}

/// Cleans a model reply down to its JSON object: fences are stripped, then
/// everything from the first `{` to the last `}` is kept.
pub fn extract_json_object(content: &str) -> String {
    let cleaned = strip_code_fences(content);
    match JSON_OBJECT.find(&cleaned) {
        Some(found) => found.as_str().to_string(),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn extracts_the_outer_object_from_chatty_replies() {
        let reply = "Voici le résultat :\n{\"profile_category\": \"Minimaliste\", \"x\": {\"y\": 1}}\nBonne journée";
        assert_eq!(
            extract_json_object(reply),
            "{\"profile_category\": \"Minimaliste\", \"x\": {\"y\": 1}}"
        );
    }

    #[test]
    fn replies_without_braces_are_returned_cleaned() {
        assert_eq!(extract_json_object("```json\nnope\n```"), "nope");
    }
}

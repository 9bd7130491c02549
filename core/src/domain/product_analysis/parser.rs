use std::sync::LazyLock;

use regex::Regex;

static PARENTHESES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").unwrap());
static BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());
static PERCENTAGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.?\d*%").unwrap());

/// Splits a label's ingredient text into individual ingredient names.
///
/// Each comma separated segment loses its `(...)` and `[...]` groups and any
/// percentage token, then is trimmed; empty segments are dropped. Groups are
/// matched lazily, so nested parentheses leave a trailing residue
/// (`"A (b (c) d)"` becomes `"A  d)"`).
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|segment| {
            let cleaned = PARENTHESES.replace_all(segment.trim(), "");
            let cleaned = BRACKETS.replace_all(&cleaned, "");
            let cleaned = PERCENTAGES.replace_all(&cleaned, "");
            let cleaned = cleaned.trim();

            (!cleaned.is_empty()).then(|| cleaned.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_annotations_from_a_typical_label() {
        assert_eq!(
            parse_ingredients("Aqua, Glycerin (moisturizer), Parfum 2%"),
            vec!["Aqua", "Glycerin", "Parfum"]
        );
    }

    #[test]
    fn removes_every_group_and_percentage_in_a_segment() {
        assert_eq!(
            parse_ingredients("Sodium Benzoate (E211) [preservative] (0.5%) 0.25%"),
            vec!["Sodium Benzoate"]
        );
    }

    #[test]
    fn drops_segments_that_are_empty_after_cleaning() {
        assert_eq!(
            parse_ingredients(" , (water), [x], 10%, Niacinamide,,"),
            vec!["Niacinamide"]
        );
        assert!(parse_ingredients("").is_empty());
    }

    #[test]
    fn nested_parentheses_leave_residue() {
        assert_eq!(parse_ingredients("A (b (c) d)"), vec!["A  d)"]);
    }

    #[test]
    fn output_length_matches_non_empty_cleaned_segments() {
        let raw = "Aqua, (only a note), Cetearyl Alcohol [emulsifier], 5%, Tocopherol";
        let expected = raw
            .split(',')
            .filter(|segment| {
                let no_parens = PARENTHESES.replace_all(segment.trim(), "");
                let no_brackets = BRACKETS.replace_all(&no_parens, "");
                let cleaned = PERCENTAGES.replace_all(&no_brackets, "");
                !cleaned.trim().is_empty()
            })
            .count();

        assert_eq!(parse_ingredients(raw).len(), expected);
        assert_eq!(expected, 3);
    }
}

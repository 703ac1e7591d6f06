//! Comma-separated text form of an ingredient list, as typed into the recipe forms.

pub const INGREDIENT_SEPARATOR: &str = ",";

/// Splits form text into ingredients. Segments are kept verbatim: no trimming,
/// and empty segments (`"a,,b"`, a trailing comma, an empty field) survive.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(INGREDIENT_SEPARATOR).map(str::to_owned).collect()
}

pub fn format_ingredients(ingredients: &[String]) -> String {
    ingredients.join(INGREDIENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_empty_segments_and_whitespace() {
        assert_eq!(
            parse_ingredients("flour, eggs,,"),
            vec!["flour", " eggs", "", ""]
        );
    }

    #[test]
    fn empty_text_is_one_empty_ingredient() {
        assert_eq!(parse_ingredients(""), vec![String::new()]);
    }

    #[test]
    fn formats_with_bare_commas() {
        let list = vec!["oats".to_string(), "egg whites".to_string()];
        assert_eq!(format_ingredients(&list), "oats,egg whites");
        assert_eq!(format_ingredients(&[]), "");
        assert_eq!(parse_ingredients(&format_ingredients(&list)), list);
    }
}

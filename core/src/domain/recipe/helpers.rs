use tracing::{debug, warn};

use crate::domain::recipe::entities::{Recipe, RecipeDocument};

/// Lower-cased copies of every ingredient line and NER token of a recipe.
/// Both lists are scanned since NER extraction can miss ingredients.
pub fn searchable_lines(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .chain(recipe.ner.iter())
        .map(|line| line.to_lowercase())
        .collect()
}

/// Plain substring test, so "ham" is found inside "hamburger". `term` must
/// already be lower-cased.
pub fn mentions_term(lines: &[String], term: &str) -> bool {
    lines.iter().any(|line| line.contains(term))
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Adapts raw store documents into recipes. Documents that cannot be adapted
/// are logged and skipped; the rest keep their store order.
pub fn adapt_documents(documents: Vec<RecipeDocument>) -> Vec<Recipe> {
    let total = documents.len();
    let recipes: Vec<Recipe> = documents
        .iter()
        .filter_map(|document| match Recipe::try_from(document) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!(document_id = %document.id, "Skipping recipe document: {}", e);
                None
            }
        })
        .collect();

    debug!("Adapted {} of {} recipe documents", recipes.len(), total);
    recipes
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_mentions_term_is_substring_match() {
        let recipe = Recipe::new("Burger", vec![])
            .with_ingredients(vec!["1 Hamburger bun".to_string()])
            .with_ner(vec!["bun".to_string()]);
        let lines = searchable_lines(&recipe);
        assert!(mentions_term(&lines, "ham"));
        assert!(mentions_term(&lines, "bun"));
        assert!(!mentions_term(&lines, "cheese"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("1 Cup MILK", "milk"));
        assert!(!contains_ignore_case("flour", "milk"));
    }

    #[test]
    fn test_adapt_documents_skips_malformed() {
        let documents = vec![
            RecipeDocument::new("a", json!({"title": "Pancakes"})),
            RecipeDocument::new("b", json!(["not", "an", "object"])),
            RecipeDocument::new("c", json!({"title": 42})),
            RecipeDocument::new("d", json!({"title": "Waffles"})),
        ];
        let recipes = adapt_documents(documents);
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }
}

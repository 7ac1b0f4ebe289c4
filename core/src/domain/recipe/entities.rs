use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const SUMMARY_INGREDIENTS: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub directions: Vec<String>,
    pub ingredients: Vec<String>,
    pub ner: Vec<String>,
    pub link: String,
    pub site: String,
    pub match_percentage: f32, // 0.0 - 1.0
    pub is_favorite: bool,
}

// match_percentage and is_favorite are derived per catalog build and do not
// take part in equality.
impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.directions == other.directions
            && self.ingredients == other.ingredients
            && self.ner == other.ner
            && self.link == other.link
            && self.site == other.site
    }
}

impl Recipe {
    pub fn new(title: impl Into<String>, directions: Vec<String>) -> Self {
        Self {
            title: title.into(),
            directions,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_ner(mut self, ner: Vec<String>) -> Self {
        self.ner = ner;
        self
    }

    pub fn with_source(mut self, link: impl Into<String>, site: impl Into<String>) -> Self {
        self.link = link.into();
        self.site = site.into();
        self
    }

    pub fn with_match_percentage(mut self, match_percentage: f32) -> Self {
        self.match_percentage = match_percentage;
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// One-line description for recipe cards: the first few ingredients, or
    /// the first direction when the recipe lists no ingredients.
    pub fn summary(&self) -> String {
        if !self.ingredients.is_empty() {
            let shown = self
                .ingredients
                .iter()
                .take(SUMMARY_INGREDIENTS)
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(", ");
            let ellipsis = if self.ingredients.len() > SUMMARY_INGREDIENTS {
                "..."
            } else {
                ""
            };
            return format!("Ingredients: {shown}{ellipsis}");
        }

        self.directions
            .first()
            .cloned()
            .unwrap_or_else(|| "No description available".to_string())
    }

    pub fn match_label(&self) -> String {
        format!("{}% match", (self.match_percentage * 100.0) as u32)
    }

    pub fn shows_match(&self) -> bool {
        self.match_percentage > 0.0
    }
}

/// Raw record as held by the document store, before field adaptation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub id: String,
    pub data: serde_json::Value,
}

impl RecipeDocument {
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchResult {
    pub match_percentage: f32,
    pub missing_ingredients: Vec<String>,
}

impl MatchResult {
    /// The detail view only looks up nearby stores when something is missing.
    pub fn needs_shopping(&self) -> bool {
        !self.missing_ingredients.is_empty() && self.match_percentage < 1.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub result: MatchResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equality_ignores_derived_fields() {
        let recipe = Recipe::new("Pancakes", vec![]).with_id("r1");
        let scored = recipe.clone().with_match_percentage(0.5).with_favorite(true);
        assert_eq!(recipe, scored);
    }

    #[test]
    fn test_summary_truncates_after_three_ingredients() {
        let recipe = Recipe::new("Cake", vec![]).with_ingredients(lines(&[
            "2 eggs",
            "1 cup milk",
            "flour",
            "sugar",
        ]));
        assert_eq!(recipe.summary(), "Ingredients: 2 eggs, 1 cup milk, flour...");

        let short = Recipe::new("Toast", vec![]).with_ingredients(lines(&["bread"]));
        assert_eq!(short.summary(), "Ingredients: bread");
    }

    #[test]
    fn test_summary_falls_back_to_directions() {
        let recipe = Recipe::new("Water", lines(&["Boil it", "Cool it"]));
        assert_eq!(recipe.summary(), "Boil it");

        let empty = Recipe::new("Nothing", vec![]);
        assert_eq!(empty.summary(), "No description available");
    }

    #[test]
    fn test_match_label() {
        let recipe = Recipe::new("Cake", vec![]).with_match_percentage(2.0 / 3.0);
        assert_eq!(recipe.match_label(), "66% match");
        assert!(recipe.shows_match());
        assert!(!Recipe::new("Cake", vec![]).shows_match());
    }

    #[test]
    fn test_needs_shopping() {
        let complete = MatchResult {
            match_percentage: 1.0,
            missing_ingredients: vec![],
        };
        assert!(!complete.needs_shopping());

        let partial = MatchResult {
            match_percentage: 0.5,
            missing_ingredients: lines(&["flour"]),
        };
        assert!(partial.needs_shopping());
    }
}

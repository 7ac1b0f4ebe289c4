use tracing::debug;

use crate::domain::{
    favorite::FavoriteSet,
    kitchen::KitchenInventory,
    profile::{DietaryTables, UserDietProfile},
    recipe::{
        compatibility::is_compatible_with_profile, entities::Recipe, helpers::contains_ignore_case,
        scoring::score,
    },
};

/// Filters `recipes` down to those compatible with `profile`, scores each one
/// against `kitchen` and sorts them best match first.
///
/// The input is left untouched; the returned recipes are annotated copies.
/// The sort is stable, so recipes with equal scores keep their input order.
pub fn build_catalog(
    recipes: &[Recipe],
    profile: &UserDietProfile,
    kitchen: &KitchenInventory,
    tables: &DietaryTables,
) -> Vec<Recipe> {
    let mut catalog: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| is_compatible_with_profile(recipe, profile, tables))
        .map(|recipe| {
            let result = score(&recipe.ingredients, kitchen.items());
            debug!(
                title = %recipe.title,
                match_percentage = result.match_percentage,
                "Added compatible recipe"
            );
            recipe.clone().with_match_percentage(result.match_percentage)
        })
        .collect();

    catalog.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    catalog
}

/// Keeps recipes whose title or any ingredient line contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn search_recipes(recipes: Vec<Recipe>, query: &str) -> Vec<Recipe> {
    if query.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| {
            contains_ignore_case(&recipe.title, query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| contains_ignore_case(ingredient, query))
        })
        .collect()
}

pub fn mark_favorites(recipes: Vec<Recipe>, favorites: &FavoriteSet) -> Vec<Recipe> {
    recipes
        .into_iter()
        .map(|recipe| {
            let is_favorite = favorites.contains(&recipe.id);
            recipe.with_favorite(is_favorite)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DietType;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(format!("Recipe {id}"), vec![])
            .with_id(id)
            .with_ingredients(lines(ingredients))
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filters_scores_and_sorts() {
        let recipes = vec![
            recipe("steak", &["1 beef steak", "salt"]),
            recipe("bread", &["flour", "water", "salt", "yeast"]),
            recipe("pasta", &["pasta", "tomato sauce"]),
        ];
        let profile = UserDietProfile::new(DietType::Vegetarian, vec![]);
        let kitchen = KitchenInventory::new(lines(&["pasta", "tomato", "salt"]));

        let catalog = build_catalog(&recipes, &profile, &kitchen, &DietaryTables::standard());

        assert_eq!(ids(&catalog), vec!["pasta", "bread"]);
        assert_eq!(catalog[0].match_percentage, 1.0);
        assert_eq!(catalog[1].match_percentage, 0.25);
        // input untouched
        assert_eq!(recipes[2].match_percentage, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let recipes = vec![
            recipe("a", &["milk"]),
            recipe("b", &["eggs"]),
            recipe("c", &["milk", "eggs"]),
            recipe("d", &["milk"]),
        ];
        let profile = UserDietProfile::default();
        let kitchen = KitchenInventory::new(lines(&["milk"]));
        let tables = DietaryTables::standard();

        let first = build_catalog(&recipes, &profile, &kitchen, &tables);
        let second = build_catalog(&recipes, &profile, &kitchen, &tables);

        assert_eq!(ids(&first), vec!["a", "d", "c", "b"]);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_empty_kitchen_keeps_store_order() {
        let recipes = vec![recipe("x", &["milk"]), recipe("y", &["flour"])];
        let catalog = build_catalog(
            &recipes,
            &UserDietProfile::default(),
            &KitchenInventory::default(),
            &DietaryTables::standard(),
        );
        assert_eq!(ids(&catalog), vec!["x", "y"]);
        assert!(catalog.iter().all(|r| r.match_percentage == 0.0));
    }

    #[test]
    fn test_everything_filtered_is_empty_not_error() {
        let recipes = vec![recipe("omelette", &["3 eggs"])];
        let profile = UserDietProfile::new(DietType::Vegan, vec![]);
        let catalog = build_catalog(
            &recipes,
            &profile,
            &KitchenInventory::default(),
            &DietaryTables::standard(),
        );
        assert!(catalog.is_empty());

        let empty = build_catalog(
            &[],
            &profile,
            &KitchenInventory::default(),
            &DietaryTables::standard(),
        );
        assert!(empty.is_empty());
    }

    #[test]
    fn test_search_by_title_or_ingredient() {
        let recipes = vec![
            recipe("1", &["2 eggs"]),
            Recipe::new("Tomato Soup", vec![]).with_id("2"),
            recipe("3", &["basil"]),
        ];
        assert_eq!(ids(&search_recipes(recipes.clone(), "EGG")), vec!["1"]);
        assert_eq!(ids(&search_recipes(recipes.clone(), "soup")), vec!["2"]);
        assert_eq!(ids(&search_recipes(recipes.clone(), "")), vec!["1", "2", "3"]);
        assert!(search_recipes(recipes, "caviar").is_empty());
    }

    #[test]
    fn test_mark_favorites() {
        let recipes = vec![recipe("a", &[]), recipe("b", &[])];
        let favorites = FavoriteSet::new(["b"]);
        let marked = mark_favorites(recipes, &favorites);
        assert!(!marked[0].is_favorite);
        assert!(marked[1].is_favorite);
    }
}

pub mod build_catalog;
pub mod get_recipe_match;
pub mod list_recipes;

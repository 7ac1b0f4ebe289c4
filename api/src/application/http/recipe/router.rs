use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    build_catalog::{__path_build_catalog, build_catalog},
    get_recipe_match::{__path_get_recipe_match, get_recipe_match},
    list_recipes::{__path_list_recipes, list_recipes},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(build_catalog, get_recipe_match, list_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes", root_path), get(list_recipes))
        .route(
            &format!("{}/recipes/catalog", root_path),
            post(build_catalog),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/match", root_path),
            post(get_recipe_match),
        )
}

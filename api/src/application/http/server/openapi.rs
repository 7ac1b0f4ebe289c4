use utoipa::OpenApi;

use crate::application::http::{health::__path_health, recipe::router::RecipeApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CookSmart API"
    ),
    paths(health),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;

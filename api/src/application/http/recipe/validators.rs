use cooksmart_core::domain::profile::DietType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BuildCatalogValidator {
    #[serde(default)]
    pub diet: DietType,

    #[serde(default)]
    #[validate(
        length(max = 200, message = "too many allergies"),
        custom(function = "validate_entries")
    )]
    pub allergies: Vec<String>,

    #[serde(default)]
    #[validate(
        length(max = 200, message = "too many kitchen items"),
        custom(function = "validate_entries")
    )]
    pub kitchen: Vec<String>,

    #[serde(default)]
    pub favorites: Vec<String>,

    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecipeMatchValidator {
    #[serde(default)]
    #[validate(
        length(max = 200, message = "too many kitchen items"),
        custom(function = "validate_entries")
    )]
    pub kitchen: Vec<String>,
}

fn validate_entries(entries: &[String]) -> Result<(), ValidationError> {
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        let mut error = ValidationError::new("blank_entry");
        error.message = Some("entries must not be blank".into());
        return Err(error);
    }
    Ok(())
}

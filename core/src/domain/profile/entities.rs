use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Diet declared on a user profile. Unknown values read from the store fall
/// back to `Omnivore`, which carries no restriction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DietType {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Omnivore => "omnivore",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
            DietType::Pescatarian => "pescatarian",
        }
    }
}

impl From<&str> for DietType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "vegetarian" => DietType::Vegetarian,
            "vegan" => DietType::Vegan,
            "pescatarian" => DietType::Pescatarian,
            _ => DietType::Omnivore,
        }
    }
}

impl From<String> for DietType {
    fn from(value: String) -> Self {
        DietType::from(value.as_str())
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDietProfile {
    #[serde(default)]
    pub diet: DietType,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl UserDietProfile {
    pub fn new(diet: DietType, allergies: Vec<String>) -> Self {
        Self { diet, allergies }
    }

    /// Allergy tokens lower-cased and trimmed. Blank tokens are dropped since
    /// an empty term would match every ingredient line.
    pub fn normalized_allergies(&self) -> Vec<String> {
        let mut normalized: Vec<String> = Vec::with_capacity(self.allergies.len());
        for allergy in &self.allergies {
            let token = allergy.trim().to_lowercase();
            if !token.is_empty() && !normalized.contains(&token) {
                normalized.push(token);
            }
        }
        normalized
    }
}

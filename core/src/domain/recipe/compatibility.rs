use tracing::debug;

use crate::domain::{
    profile::{DietType, DietaryTables, UserDietProfile},
    recipe::{
        entities::Recipe,
        helpers::{mentions_term, searchable_lines},
    },
};

/// Why a recipe was refused by the compatibility filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// `allergy` is the user's normalized token, `term` the matching word.
    Allergy { allergy: String, term: String },
    Diet { diet: DietType, term: String },
}

/// Returns the first forbidden term found in the recipe, or `None` when the
/// recipe is admissible. Allergies are checked before the diet, and the first
/// hit wins.
///
/// An allergy token that names an allergen group (e.g. `"dairy"`) expands to
/// all the group's terms; any other token is matched as-is. Every term is a
/// case-insensitive substring test over the ingredient lines and NER tokens.
pub fn find_rejection<I, S>(
    recipe: &Recipe,
    diet: DietType,
    allergies: I,
    tables: &DietaryTables,
) -> Option<Rejection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = searchable_lines(recipe);

    for allergy in allergies {
        let allergy = allergy.as_ref().trim().to_lowercase();
        if allergy.is_empty() {
            continue;
        }

        let hit = match tables.allergen_group(&allergy) {
            Some(terms) => terms
                .iter()
                .find(|term| mentions_term(&lines, term))
                .cloned(),
            None => mentions_term(&lines, &allergy).then(|| allergy.clone()),
        };

        if let Some(term) = hit {
            return Some(Rejection::Allergy { allergy, term });
        }
    }

    tables
        .diet_exclusions(diet)
        .iter()
        .find(|term| mentions_term(&lines, term))
        .map(|term| Rejection::Diet {
            diet,
            term: term.clone(),
        })
}

pub fn is_compatible<I, S>(
    recipe: &Recipe,
    diet: DietType,
    allergies: I,
    tables: &DietaryTables,
) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match find_rejection(recipe, diet, allergies, tables) {
        Some(rejection) => {
            debug!(title = %recipe.title, ?rejection, "Filtered out incompatible recipe");
            false
        }
        None => true,
    }
}

pub fn is_compatible_with_profile(
    recipe: &Recipe,
    profile: &UserDietProfile,
    tables: &DietaryTables,
) -> bool {
    is_compatible(recipe, profile.diet, &profile.allergies, tables)
}

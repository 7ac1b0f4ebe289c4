use std::collections::HashMap;

use crate::domain::profile::entities::DietType;

const ALLERGEN_GROUPS: &[(&str, &[&str])] = &[
    (
        "nuts",
        &[
            "nut",
            "nuts",
            "almond",
            "walnut",
            "cashew",
            "pistachio",
            "pecan",
            "hazelnut",
            "macadamia",
            "peanut",
            "peanuts",
            "groundnut",
            "pine nut",
        ],
    ),
    (
        "dairy",
        &[
            "milk", "cheese", "butter", "cream", "yogurt", "whey", "casein", "lactose", "dairy",
        ],
    ),
    (
        "gluten",
        &["gluten", "wheat", "barley", "rye", "malt", "pasta", "bread"],
    ),
    (
        "fish",
        &[
            "fish", "salmon", "tuna", "cod", "tilapia", "bass", "trout", "sardine", "anchovy",
            "halibut",
        ],
    ),
    (
        "shellfish",
        &[
            "shellfish", "shrimp", "crab", "lobster", "crawfish", "prawn", "clam", "mussel",
            "oyster", "scallop",
        ],
    ),
    (
        "eggs",
        &["egg", "eggs", "mayonnaise", "albumen", "meringue", "eggnog"],
    ),
    (
        "soy",
        &["soy", "soya", "tofu", "edamame", "miso", "tempeh", "soybean"],
    ),
    (
        "wheat",
        &[
            "wheat", "bread", "flour", "pasta", "cereal", "bran", "couscous", "semolina",
        ],
    ),
];

const NON_VEGAN: &[&str] = &[
    "meat",
    "chicken",
    "beef",
    "pork",
    "fish",
    "seafood",
    "lamb",
    "turkey",
    "duck",
    "egg",
    "eggs",
    "milk",
    "cheese",
    "butter",
    "cream",
    "yogurt",
    "honey",
    "mayonnaise",
];

const NON_VEGETARIAN: &[&str] = &[
    "meat",
    "chicken",
    "beef",
    "pork",
    "fish",
    "seafood",
    "lamb",
    "turkey",
    "duck",
    "bacon",
    "prosciutto",
    "ham",
    "salami",
];

const NON_PESCATARIAN: &[&str] = &[
    "meat",
    "chicken",
    "beef",
    "pork",
    "lamb",
    "turkey",
    "duck",
    "bacon",
    "prosciutto",
    "ham",
    "salami",
];

/// Allergen groups and per-diet exclusion lists consulted by the
/// compatibility filter. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietaryTables {
    allergen_groups: HashMap<String, Vec<String>>,
    diet_exclusions: HashMap<DietType, Vec<String>>,
}

impl DietaryTables {
    pub fn new(
        allergen_groups: HashMap<String, Vec<String>>,
        diet_exclusions: HashMap<DietType, Vec<String>>,
    ) -> Self {
        let allergen_groups = allergen_groups
            .into_iter()
            .map(|(key, terms)| (key.trim().to_lowercase(), lowercase_terms(terms)))
            .collect();
        let diet_exclusions = diet_exclusions
            .into_iter()
            .map(|(diet, terms)| (diet, lowercase_terms(terms)))
            .collect();

        Self {
            allergen_groups,
            diet_exclusions,
        }
    }

    /// The tables shipped with the application.
    pub fn standard() -> Self {
        let allergen_groups = ALLERGEN_GROUPS
            .iter()
            .map(|(key, terms)| (key.to_string(), to_owned_terms(terms)))
            .collect();

        let diet_exclusions = HashMap::from([
            (DietType::Vegan, to_owned_terms(NON_VEGAN)),
            (DietType::Vegetarian, to_owned_terms(NON_VEGETARIAN)),
            (DietType::Pescatarian, to_owned_terms(NON_PESCATARIAN)),
        ]);

        Self {
            allergen_groups,
            diet_exclusions,
        }
    }

    /// Synonym terms for a normalized allergy key, if the key is a known group.
    pub fn allergen_group(&self, key: &str) -> Option<&[String]> {
        self.allergen_groups.get(key).map(Vec::as_slice)
    }

    /// Terms forbidden under `diet`. Empty for diets without an entry.
    pub fn diet_exclusions(&self, diet: DietType) -> &[String] {
        self.diet_exclusions
            .get(&diet)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn allergen_keys(&self) -> impl Iterator<Item = &str> {
        self.allergen_groups.keys().map(String::as_str)
    }
}

impl Default for DietaryTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn to_owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}

fn lowercase_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_have_every_allergen_group() {
        let tables = DietaryTables::standard();
        let mut keys: Vec<&str> = tables.allergen_keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "dairy",
                "eggs",
                "fish",
                "gluten",
                "nuts",
                "shellfish",
                "soy",
                "wheat"
            ]
        );
    }

    #[test]
    fn test_allergen_group_lookup() {
        let tables = DietaryTables::standard();
        let dairy = tables.allergen_group("dairy").unwrap();
        assert!(dairy.iter().any(|term| term == "milk"));
        assert!(tables.allergen_group("kiwi").is_none());
    }

    #[test]
    fn test_omnivore_has_no_exclusions() {
        let tables = DietaryTables::standard();
        assert!(tables.diet_exclusions(DietType::Omnivore).is_empty());
        assert!(
            tables
                .diet_exclusions(DietType::Vegan)
                .iter()
                .any(|term| term == "honey")
        );
    }

    #[test]
    fn test_pescatarian_allows_fish() {
        let tables = DietaryTables::standard();
        let terms = tables.diet_exclusions(DietType::Pescatarian);
        assert!(!terms.iter().any(|term| term == "fish"));
        assert!(terms.iter().any(|term| term == "ham"));
    }

    #[test]
    fn test_custom_tables_are_normalized() {
        let tables = DietaryTables::new(
            HashMap::from([(" Citrus ".to_string(), vec!["Lemon".to_string()])]),
            HashMap::from([(DietType::Vegan, vec![" Gelatin".to_string(), "".to_string()])]),
        );
        assert_eq!(tables.allergen_group("citrus").unwrap(), &["lemon".to_string()]);
        assert_eq!(tables.diet_exclusions(DietType::Vegan), &["gelatin".to_string()]);
    }
}

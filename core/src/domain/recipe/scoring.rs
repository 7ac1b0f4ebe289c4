use crate::domain::recipe::entities::MatchResult;

/// Scores a recipe's ingredient lines against the user's kitchen.
///
/// A line counts as owned when some kitchen item is a case-insensitive
/// substring of it. An empty kitchen scores 0 with every line missing, and a
/// recipe without ingredients scores 0 with nothing missing. Blank kitchen
/// items are ignored.
pub fn score<S>(recipe_ingredients: &[String], kitchen_items: &[S]) -> MatchResult
where
    S: AsRef<str>,
{
    let kitchen: Vec<String> = kitchen_items
        .iter()
        .map(|item| item.as_ref().to_lowercase())
        .filter(|item| !item.trim().is_empty())
        .collect();

    if kitchen.is_empty() {
        return MatchResult {
            match_percentage: 0.0,
            missing_ingredients: recipe_ingredients.to_vec(),
        };
    }

    let missing_ingredients: Vec<String> = recipe_ingredients
        .iter()
        .filter(|line| {
            let line = line.to_lowercase();
            !kitchen.iter().any(|item| line.contains(item.as_str()))
        })
        .cloned()
        .collect();

    let total = recipe_ingredients.len();
    let owned = total - missing_ingredients.len();
    let match_percentage = if total == 0 {
        0.0
    } else {
        owned as f32 / total as f32
    };

    MatchResult {
        match_percentage,
        missing_ingredients,
    }
}

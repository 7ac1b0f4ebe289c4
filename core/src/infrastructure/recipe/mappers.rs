use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeDocument},
};

const UNTITLED: &str = "Untitled";

impl TryFrom<&RecipeDocument> for Recipe {
    type Error = CoreError;

    fn try_from(document: &RecipeDocument) -> Result<Self, Self::Error> {
        let data = document.data.as_object().ok_or_else(|| {
            CoreError::InvalidRecipeDocument("document is not an object".to_string())
        })?;

        Ok(Self {
            id: document.id.clone(),
            title: string_field(data, "title", UNTITLED)?,
            directions: parse_string_list_field(data.get("directions")),
            ingredients: parse_string_list_field(data.get("ingredients")),
            ner: parse_string_list_field(data.get("NER")),
            link: string_field(data, "link", "")?,
            site: string_field(data, "site", "")?,
            match_percentage: 0.0,
            is_favorite: false,
        })
    }
}

impl TryFrom<RecipeDocument> for Recipe {
    type Error = CoreError;

    fn try_from(document: RecipeDocument) -> Result<Self, Self::Error> {
        Self::try_from(&document)
    }
}

fn string_field(data: &Map<String, Value>, key: &str, default: &str) -> Result<String, CoreError> {
    match data.get(key) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(CoreError::InvalidRecipeDocument(format!(
            "field `{key}` is not a string: {other}"
        ))),
    }
}

/// Normalizes a list field that the store holds either as a native list or as
/// a single string shaped like `["egg", "flour"]`.
///
/// Native lists keep only their string entries. Bracketed strings are split on
/// commas with no quoting rules, so an item containing a comma is cut in two.
/// Any other string becomes a one-item list; anything else is empty.
pub fn parse_string_list_field(field: Option<&Value>) -> Vec<String> {
    match field {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(raw)) => parse_bracketed_list(raw),
        _ => Vec::new(),
    }
}

fn parse_bracketed_list(raw: &str) -> Vec<String> {
    match raw.strip_prefix('[').and_then(|inner| inner.strip_suffix(']')) {
        Some(inner) if inner.trim().is_empty() => Vec::new(),
        Some(inner) => inner
            .split(',')
            .map(|piece| unquote(piece.trim()).to_string())
            .collect(),
        None => vec![raw.to_string()],
    }
}

fn unquote(piece: &str) -> &str {
    piece
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(piece)
}

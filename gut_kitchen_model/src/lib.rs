use serde::{Deserialize, Serialize};
use std::fmt;

/// `<meta name=...>` the static server writes the API base URL into and the
/// browser app reads it back from.
pub const API_BASE_URL_META: &str = "gut-kitchen:api-base-url";

/// Identifier used by the recipes API for recipes, ingredient items and insights.
///
/// The API may hand these out as JSON strings or integers; either way they are
/// kept as text and always written back out as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "RawId", into = "String")]
pub struct RecipeId(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for RecipeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => RecipeId(text),
            RawId::Signed(number) => RecipeId(number.to_string()),
            RawId::Unsigned(number) => RecipeId(number.to_string()),
        }
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        RecipeId(id)
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub title: String,
    pub category: String,
    pub cook_time: u32,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub chef: Chef,
    pub meta: RecipeMeta,
    pub ingredients: Vec<IngredientGroup>,
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub insights: Vec<Insight>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub name: String,
    pub avatar_url: String,
    pub published_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMeta {
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientGroup {
    pub group: String,
    pub items: Vec<IngredientItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct IngredientItem {
    pub id: RecipeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Insight {
    pub id: RecipeId,
    pub title: String,
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Insight>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Insight>>::deserialize(deserializer)?.unwrap_or_default())
}

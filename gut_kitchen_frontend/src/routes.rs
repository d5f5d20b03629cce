use crate::util::{decode_segment, encode_segment};
use gut_kitchen_model::RecipeId;

pub const HOME: &str = "/";
pub const RECIPE: &str = "recipe/:id";
pub const RECIPE_PARAM: &str = "id";
pub const NOT_FOUND: &str = "*any";

pub fn recipe_path(id: &RecipeId) -> String {
    format!("/recipe/{}", encode_segment(id.as_ref()))
}

/// The `:id` param may still be percent-encoded (always on a hard load).
pub fn recipe_id_from_param(param: &str) -> RecipeId {
    RecipeId::from(decode_segment(param))
}

use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

/// Skinnytaste cards carry a full nutrition panel including the serving size.
pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);
    recipe.nutrition.servings = helpers::text(
        doc,
        ".wprm-nutrition-label-text-nutrition-container-serving_size .wprm-nutrition-label-text-nutrition-value",
    );
    recipe
}

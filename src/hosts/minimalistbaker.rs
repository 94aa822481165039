use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

/// Minimalist Baker lists diet labels ("Vegan", "Gluten Free") in the card
/// header; they are the site's keywords.
pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);
    if recipe.keywords.is_empty() {
        recipe.keywords = helpers::texts(doc, ".wprm-recipe-suitablefordiet").join(", ");
    }
    recipe
}

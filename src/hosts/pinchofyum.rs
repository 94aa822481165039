use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::tasty_card(doc, url);
    if recipe.name.is_empty() {
        recipe.name = helpers::text(doc, "h1.entry-title");
    }
    // Step photos are wrapped in their own list items.
    recipe.instructions = helpers::texts(doc, ".tasty-recipes-instructions li:not(.tasty-recipes-image-step)");
    recipe
}

use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::tasty_card(doc, url);
    recipe.tools = helpers::texts(doc, ".tasty-recipes-equipment .tasty-link-card a");
    recipe
}

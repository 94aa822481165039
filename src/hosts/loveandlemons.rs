use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);
    if recipe.description.is_empty() {
        recipe.description = helpers::text(doc, ".entry-content > p");
    }
    recipe
}

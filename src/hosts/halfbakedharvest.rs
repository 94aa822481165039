use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);
    if recipe.name.is_empty() {
        recipe.name = helpers::text(doc, "h1.entry-title");
    }
    if recipe.image.is_empty() {
        recipe.image = normalize::absolute_url(&helpers::og_image(doc), url);
    }
    recipe
}

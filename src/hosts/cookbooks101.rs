//! 101 Cookbooks. Uses its own "cl-recipe" card rather than a plugin.

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut instructions = helpers::texts(doc, ".cl-recipe-instructions li");
    if instructions.is_empty() {
        instructions = helpers::lines(doc, ".cl-recipe-instructions");
    }

    let mut name = helpers::text(doc, ".cl-recipe-name");
    if name.is_empty() {
        name = helpers::text(doc, "h1");
    }

    RecipeSchema {
        name,
        description: helpers::text(doc, ".cl-recipe-summary"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".cl-recipe-image img"), url),
        ingredients: helpers::texts(doc, ".cl-ingredients li"),
        instructions,
        recipe_yield: normalize::yields(&helpers::text(doc, ".cl-yield")),
        prep_time: helpers::text(doc, ".cl-prep-time .cl-time"),
        cook_time: helpers::text(doc, ".cl-cook-time .cl-time"),
        ..Default::default()
    }
}

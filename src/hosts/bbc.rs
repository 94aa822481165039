//! BBC Food (`bbc.co.uk/food/recipes`).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let image = helpers::image_src(doc, ".recipe-media__image img");
    let image = if image.is_empty() {
        helpers::og_image(doc)
    } else {
        image
    };

    RecipeSchema {
        name: helpers::text(doc, "h1.content-title__text"),
        description: helpers::text(doc, ".recipe-description__text"),
        image: normalize::absolute_url(&image, url),
        ingredients: helpers::texts(doc, ".recipe-ingredients__list-item"),
        instructions: helpers::texts(doc, ".recipe-method__list-item-text"),
        recipe_yield: normalize::yields(&helpers::text(doc, ".recipe-metadata__serving")),
        prep_time: helpers::text(doc, ".recipe-metadata__prep-time"),
        cook_time: helpers::text(doc, ".recipe-metadata__cook-time"),
        ..Default::default()
    }
}

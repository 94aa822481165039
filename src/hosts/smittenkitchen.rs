//! Smitten Kitchen. Recent posts use the Jetpack recipe block; older ones
//! put the whole recipe in paragraphs separated by `<br>`.

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let name = helpers::text(doc, ".jetpack-recipe-title");
    let name = if name.is_empty() {
        helpers::text(doc, "h1.entry-title")
    } else {
        name
    };

    let mut instructions = helpers::lines(doc, ".jetpack-recipe-directions");
    if instructions.is_empty() {
        instructions = helpers::texts(doc, ".jetpack-recipe-directions p");
    }

    RecipeSchema {
        name,
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        ingredients: helpers::texts(doc, ".jetpack-recipe-ingredients li"),
        instructions,
        recipe_yield: normalize::yields(&helpers::text(doc, ".jetpack-recipe-servings")),
        cook_time: normalize::strip_prefixes(&helpers::text(doc, ".jetpack-recipe-time"), &["Time"]),
        date_published: helpers::attr(doc, "time.entry-date", "datetime"),
        ..Default::default()
    }
}

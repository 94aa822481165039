//! Wikibooks Cookbook (`en.wikibooks.org/wiki/Cookbook:...`).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const BODY: &str = ".mw-parser-output";
const INFOBOX: &str = ".infobox tr";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let title = helpers::text(doc, "h1#firstHeading");
    let image = helpers::image_src(doc, ".infobox img, .mw-parser-output figure img");

    RecipeSchema {
        name: normalize::strip_prefixes(&title, &["Cookbook"]),
        image: normalize::absolute_url(&image, url),
        category: helpers::labelled(doc, INFOBOX, &["Category"]),
        ingredients: helpers::section_items(doc, BODY, &["Ingredients"]),
        instructions: helpers::section_items(doc, BODY, &["Procedure", "Directions", "Method"]),
        recipe_yield: normalize::yields(&helpers::labelled(doc, INFOBOX, &["Servings", "Yield"])),
        cook_time: helpers::labelled(doc, INFOBOX, &["Time"]),
        ..Default::default()
    }
}

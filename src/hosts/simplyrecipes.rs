use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let block = |class: &str| helpers::text(doc, &format!(".{class} .meta-text__data"));

    RecipeSchema {
        name: helpers::text(doc, "h2.recipe-block__header, h1.heading__title"),
        description: helpers::text(doc, ".heading__subtitle"),
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        ingredients: helpers::texts(doc, ".structured-ingredients__list-item"),
        instructions: helpers::texts(doc, "#structured-project__steps_1-0 ol > li > p, .structured-project__steps ol > li > p"),
        recipe_yield: normalize::yields(&block("recipe-serving")),
        prep_time: block("prep-time"),
        cook_time: block("cook-time"),
        ..Default::default()
    }
}

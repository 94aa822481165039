use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    RecipeSchema {
        name: helpers::text(doc, ".single-recipe-details h1, h1.recipe-title"),
        description: helpers::text(doc, ".recipe-intro"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".hero-wrapper img"), url),
        category: helpers::text(doc, ".tags-list a"),
        ingredients: helpers::texts(doc, "ul.ingred-list > li"),
        instructions: helpers::texts(doc, "ol.recipeSteps > li"),
        recipe_yield: normalize::yields(&helpers::text(doc, ".recipe-detail.serves")),
        cook_time: normalize::strip_prefixes(&helpers::text(doc, ".recipe-detail.time"), &["Cooks In"]),
        ..Default::default()
    }
}

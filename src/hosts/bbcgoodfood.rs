use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

/// BBC Good Food publishes JSON-LD, but its yield is often the generic
/// serving count while the page sidebar states what the recipe really makes.
pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let heading = helpers::text(doc, ".post-header__title h1, h1.heading-1");
    if !heading.is_empty() {
        recipe.name = heading;
    }

    let serves = helpers::text(doc, ".post-header__servings, .recipe-details__item--servings");
    let serves = normalize::yields(&serves);
    if serves > 0 {
        recipe.recipe_yield = serves;
    }

    let times = ".post-header__cook-and-prep-time li, .recipe-details__cooking-time li";
    let prep = helpers::labelled(doc, times, &["Prep"]);
    if !prep.is_empty() {
        recipe.prep_time = prep;
    }
    let cook = helpers::labelled(doc, times, &["Cook"]);
    if !cook.is_empty() {
        recipe.cook_time = cook;
    }

    let method = helpers::texts(doc, ".recipe__method-steps li .editor-content p");
    if !method.is_empty() {
        recipe.instructions = method;
    }

    recipe
}

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

const DETAILS: &str = ".mm-recipes-details__item";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let title = helpers::text(doc, "h1.article-heading");
    if !title.is_empty() {
        recipe.name = title;
    }

    let detail = |label: &str| helpers::labelled(doc, DETAILS, &[label]);
    let prep = detail("Prep Time");
    if !prep.is_empty() {
        recipe.prep_time = prep;
    }
    let cook = detail("Cook Time");
    if !cook.is_empty() {
        recipe.cook_time = cook;
    }
    let servings = normalize::yields(&detail("Servings"));
    if servings > 0 {
        recipe.recipe_yield = servings;
    }

    let ingredients = helpers::texts(doc, ".mm-recipes-structured-ingredients__list-item");
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }
    let steps = helpers::texts(doc, ".mm-recipes-steps__content ol > li > p");
    if !steps.is_empty() {
        recipe.instructions = steps;
    }

    recipe
}

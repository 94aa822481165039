//! Chefkoch (German).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    // Amount and ingredient sit in separate table cells.
    let ingredients = helpers::joined_rows(doc, "table.ingredients tbody tr", "td");
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    let portions = helpers::attr(doc, ".recipe-servings input[name=\"portionen\"]", "value");
    let portions = normalize::yields(&portions);
    if portions > 0 {
        recipe.recipe_yield = portions;
    }

    let prep = helpers::labelled(doc, ".recipe-meta span", &["Arbeitszeit"]);
    if !prep.is_empty() {
        recipe.prep_time = normalize::strip_prefixes(&prep, &["ca."]);
    }
    recipe
}

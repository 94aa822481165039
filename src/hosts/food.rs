//! Food.com

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let ingredients = helpers::joined_rows(
        doc,
        ".ingredient-list > li",
        ".ingredient-quantity, .ingredient-text",
    );
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    let directions = helpers::texts(doc, ".direction-list .direction");
    if !directions.is_empty() {
        recipe.instructions = directions;
    }

    let facts = ".facts__item";
    let serves = normalize::yields(&helpers::labelled(doc, facts, &["Serves", "Yields"]));
    if serves > 0 {
        recipe.recipe_yield = serves;
    }
    recipe
}

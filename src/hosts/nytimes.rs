//! NYT Cooking (`cooking.nytimes.com`).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    // Class names carry a build hash suffix, so match on the stable prefix.
    let yields = helpers::labelled(doc, "[class*=\"ingredients_recipeYield\"]", &["Yield"]);
    let yields = normalize::yields(&yields);
    if yields > 0 {
        recipe.recipe_yield = yields;
    }

    let ingredients = helpers::joined_rows(doc, "[class*=\"ingredient_ingredient__\"]", "span");
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    let steps = helpers::texts(doc, "[class*=\"preparation_stepContent\"]");
    if !steps.is_empty() {
        recipe.instructions = steps;
    }
    recipe
}

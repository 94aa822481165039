//! Ricardo (Québec), published in French and English.

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

const TIMES: &str = ".recipe-metadata-wrap dl > div, .recipe-timing li";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let prep = helpers::labelled(doc, TIMES, &["Préparation", "Preparation", "Prep"]);
    if !prep.is_empty() {
        recipe.prep_time = prep;
    }
    let cook = helpers::labelled(doc, TIMES, &["Cuisson", "Cooking", "Cook"]);
    if !cook.is_empty() {
        recipe.cook_time = cook;
    }

    let portions = helpers::labelled(doc, TIMES, &["Portion(s)", "Portions", "Servings"]);
    let portions = normalize::yields(&portions);
    if portions > 0 {
        recipe.recipe_yield = portions;
    }

    // Section titles ("Pâte", "Garniture") are list headings, not ingredients.
    let ingredients = helpers::texts(doc, ".ingredients-list li label, .form-group.ingredients li");
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }
    recipe
}

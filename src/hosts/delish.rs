use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let title = helpers::text(doc, "h1[data-testid=\"ContentHeaderHed\"], h1.content-hed");
    if !title.is_empty() {
        recipe.name = title;
    }

    let ingredients = helpers::texts(doc, ".ingredient-lists li");
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    // Directions carry a leading step number in its own element.
    let directions: Vec<String> = doc
        .select(".directions li")
        .iter()
        .map(|step| {
            let number = helpers::node_text(step, ".step-number");
            let text = step.text();
            text.strip_prefix(number.as_str())
                .unwrap_or(&text)
                .trim()
                .to_string()
        })
        .filter(|step| !step.is_empty())
        .collect();
    if !directions.is_empty() {
        recipe.instructions = directions;
    }
    recipe
}

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::structured;

/// Condé Nast recipe pages render amount and description as sibling
/// elements of one ingredient list; pair them up in order.
pub(super) fn paired_ingredients(doc: &Document) -> Vec<String> {
    let Some(list) = doc.select_first("[data-testid=\"IngredientList\"]") else {
        return Vec::new();
    };
    let amounts: Vec<String> = list.select("p").iter().map(|n| n.text()).collect();
    let names: Vec<String> = list.select("div").iter().map(|n| n.text()).collect();

    names
        .iter()
        .enumerate()
        .map(|(i, name)| match amounts.get(i) {
            Some(amount) if !amount.is_empty() => format!("{amount} {name}"),
            _ => name.clone(),
        })
        .filter(|line| !line.trim().is_empty())
        .collect()
}

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let ingredients = paired_ingredients(doc);
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    let keywords = helpers::texts(doc, "[data-testid=\"TagCloudWrapper\"] a").join(", ");
    if !keywords.is_empty() {
        recipe.keywords = keywords;
    }
    recipe
}

use url::Url;

use super::{bonappetit, helpers};
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    let ingredients = bonappetit::paired_ingredients(doc);
    if !ingredients.is_empty() {
        recipe.ingredients = ingredients;
    }

    let steps = helpers::texts(doc, "[data-testid=\"InstructionsWrapper\"] li p");
    if !steps.is_empty() {
        recipe.instructions = steps;
    }

    let yields = helpers::labelled(doc, "[data-testid=\"InfoSliceList\"] li", &["Yield"]);
    let yields = normalize::yields(&yields);
    if yields > 0 {
        recipe.recipe_yield = yields;
    }
    recipe
}

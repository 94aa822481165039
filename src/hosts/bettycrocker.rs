use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const ATTRIBUTES: &str = ".recipePartAttribute";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let ingredients = helpers::joined_rows(
        doc,
        ".recipePartIngredient",
        ".recipePartIngredientQuantity, .recipePartIngredientDescription",
    );

    RecipeSchema {
        name: helpers::text(doc, "h1.recipePartTitleText"),
        description: helpers::text(doc, ".recipePartDescription"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".recipePartImage img"), url),
        ingredients,
        instructions: helpers::texts(doc, ".recipePartStepDescription"),
        recipe_yield: normalize::yields(&helpers::labelled(doc, ATTRIBUTES, &["Servings"])),
        prep_time: helpers::labelled(doc, ATTRIBUTES, &["Prep"]),
        ..Default::default()
    }
}

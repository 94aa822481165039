//! taste.com.au

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const INFOS: &str = ".recipe-cooking-infos li";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    RecipeSchema {
        name: helpers::text(doc, "h1"),
        description: helpers::text(doc, ".single-asset-description-block p"),
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        keywords: helpers::texts(doc, ".tags-list a").join(", "),
        ingredients: helpers::texts(doc, ".ingredient-description"),
        instructions: helpers::texts(doc, ".recipe-method-step-content"),
        recipe_yield: normalize::yields(&helpers::labelled(doc, INFOS, &["Servings", "Makes"])),
        prep_time: helpers::labelled(doc, INFOS, &["Prep"]),
        cook_time: helpers::labelled(doc, INFOS, &["Cook"]),
        nutrition: crate::model::NutritionSchema {
            calories: helpers::labelled(doc, ".nutrition-row", &["Energy"]),
            fat: helpers::labelled(doc, ".nutrition-row", &["Fat Total"]),
            protein: helpers::labelled(doc, ".nutrition-row", &["Protein"]),
            ..Default::default()
        },
        ..Default::default()
    }
}

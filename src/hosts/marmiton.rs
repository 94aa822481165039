//! Marmiton (French).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const TIMES: &str = ".time__details > div";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let ingredients = helpers::joined_rows(
        doc,
        ".card-ingredient",
        ".card-ingredient-quantity, .ingredient-name",
    );

    RecipeSchema {
        name: helpers::text(doc, ".main-title h1, h1"),
        image: normalize::absolute_url(&helpers::image_src(doc, "#recipe-media-viewer-main-picture"), url),
        category: helpers::text(doc, ".modal__tags .modal__tag"),
        ingredients,
        instructions: helpers::texts(doc, ".recipe-step-list__container p"),
        recipe_yield: normalize::yields(&helpers::attr(doc, ".recipe-ingredients__qt-counter__value", "value")),
        prep_time: helpers::labelled(doc, TIMES, &["Préparation"]),
        cook_time: helpers::labelled(doc, TIMES, &["Cuisson"]),
        ..Default::default()
    }
}

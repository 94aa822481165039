use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const TIMES: &str = ".o-RecipeInfo__m-Time li";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let ingredients = helpers::texts(doc, ".o-Ingredients__a-Ingredient--CheckboxLabel")
        .into_iter()
        .filter(|line| !line.eq_ignore_ascii_case("Deselect All"))
        .collect();

    RecipeSchema {
        name: helpers::text(doc, ".o-AssetTitle__a-HeadlineText"),
        description: helpers::meta(doc, "description"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".m-MediaBlock__a-Image"), url),
        category: helpers::text(doc, ".o-Capsule__a-Tag"),
        ingredients,
        instructions: helpers::texts(doc, ".o-Method__m-Step"),
        recipe_yield: normalize::yields(&helpers::labelled(doc, ".o-RecipeInfo__m-Yield li", &["Yield"])),
        prep_time: helpers::labelled(doc, TIMES, &["Prep"]),
        cook_time: helpers::labelled(doc, TIMES, &["Cook"]),
        ..Default::default()
    }
}

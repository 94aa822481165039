use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

/// Cross references to the recipe notes, e.g. "(Note 2)" or "(Notes 1 & 3)".
static NOTE_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\(\s*notes?\s+[\d\s,&and]+\)").expect("Invalid note reference regex")
});

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);

    for line in recipe
        .ingredients
        .iter_mut()
        .chain(recipe.instructions.iter_mut())
    {
        *line = NOTE_REF_REGEX.replace_all(line, "").trim().to_string();
    }

    if recipe.image.is_empty() {
        recipe.image = normalize::absolute_url(&helpers::og_image(doc), url);
    }
    recipe
}

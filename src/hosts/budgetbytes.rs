use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

/// Per-ingredient cost annotations such as "($0.32)" or "($1.05*)".
static COST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\$\d+(?:\.\d+)?\*?\)").expect("Invalid cost regex"));

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);

    recipe.ingredients = recipe
        .ingredients
        .iter()
        .map(|line| COST_REGEX.replace_all(line, "").trim().to_string())
        .collect();

    if recipe.description.is_empty() {
        recipe.description = helpers::meta(doc, "description");
    }
    recipe
}

use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::wprm_card(doc, url);
    if recipe.description.is_empty() {
        recipe.description = helpers::meta(doc, "og:description");
    }
    // Instruction groups repeat their heading inside the first step.
    let groups = helpers::texts(doc, ".wprm-recipe-instruction-group .wprm-recipe-group-name");
    for line in &mut recipe.instructions {
        if let Some(group) = groups.iter().find(|g| line.starts_with(g.as_str())) {
            *line = line[group.len()..].trim_start_matches([':', ' ']).to_string();
        }
    }
    recipe
}

use url::Url;

use super::{helpers, plugins};
use crate::dom::Document;
use crate::model::RecipeSchema;

/// Sally's cards group ingredients under headings and append the notes
/// section to the instruction list; only the numbered steps are kept.
pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = plugins::tasty_card(doc, url);
    recipe.instructions = helpers::texts(doc, ".tasty-recipes-instructions ol > li");
    if recipe.category.is_empty() {
        recipe.category = helpers::text(doc, ".entry-categories a");
    }
    recipe
}

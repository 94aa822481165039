use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::structured;

/// The Kitchn's JSON-LD is complete; the page only adds equipment.
pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);
    if recipe.tools.is_empty() {
        recipe.tools = helpers::texts(doc, ".Recipe__equipment li");
    }
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"@context": "https://schema.org", "@graph": [
          {"@type": "Article", "headline": "How To Make Banana Bread"},
          {"@type": "Recipe", "name": "Banana Bread", "recipeYield": "1 (9x5-inch) loaf",
           "recipeIngredient": ["3 ripe bananas", "1 cup sugar"],
           "recipeInstructions": [{"@type": "HowToSection", "name": "Bake",
             "itemListElement": [{"@type": "HowToStep", "text": "Mash the bananas."},
                                 {"@type": "HowToStep", "text": "Bake 1 hour."}]}],
           "cookTime": "P0DT1H0M"}]}</script>
        </head><body>
        <ul class="Recipe__equipment"><li>Loaf pan</li><li>Mixing bowl</li></ul>
        </body></html>"#;

    #[test]
    fn test_thekitchn() {
        let recipe = testing::extract(PAGE, "https://www.thekitchn.com/banana-bread-recipe", scrape);
        assert_eq!(recipe.name, "Banana Bread");
        assert_eq!(recipe.recipe_yield, 1);
        assert_eq!(recipe.cook_time, "P0DT1H0M");
        assert_eq!(recipe.instructions, vec!["Mash the bananas.", "Bake 1 hour."]);
        assert_eq!(recipe.tools, vec!["Loaf pan", "Mixing bowl"]);
    }
}

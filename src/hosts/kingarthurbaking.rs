use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let mut recipe = structured::first_recipe(doc, url);

    // The JSON-LD yield is a weight ("1 loaf, 24 slices"); the stat block
    // has the piece count.
    let yields = normalize::yields(&helpers::text(doc, ".stat__item--yield span"));
    if yields > 0 {
        recipe.recipe_yield = yields;
    }

    let steps = helpers::texts(doc, ".recipe__instructions .field--recipe-steps li p");
    if !steps.is_empty() {
        recipe.instructions = steps;
    }
    recipe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"@context": "https://schema.org", "@graph": [
          {"@type": "Recipe", "name": "Classic Sandwich Bread", "recipeYield": "1 loaf, 16 slices",
           "recipeIngredient": ["3 cups flour", "1 cup water"],
           "prepTime": "PT15M", "cookTime": "PT35M",
           "recipeInstructions": "Mix.<br>Knead.<br>Bake."}]}</script>
        </head><body>
        <div class="stat__item stat__item--yield"><h3>Yield</h3><span>16 slices</span></div>
        <div class="recipe__instructions"><div class="field--recipe-steps"><ol>
          <li><p>Weigh your flour.</p></li>
          <li><p>Mix and knead to a smooth dough.</p></li>
          <li><p>Bake until golden.</p></li>
        </ol></div></div>
        </body></html>"#;

    #[test]
    fn test_kingarthurbaking() {
        let recipe = testing::extract(PAGE, "https://www.kingarthurbaking.com/recipes/classic-sandwich-bread-recipe", scrape);
        assert_eq!(recipe.name, "Classic Sandwich Bread");
        assert_eq!(recipe.recipe_yield, 16);
        assert_eq!(recipe.prep_time, "PT15M");
        assert_eq!(recipe.instructions.len(), 3);
        assert_eq!(recipe.ingredients, vec!["3 cups flour", "1 cup water"]);
    }
}

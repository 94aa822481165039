//! Tasty (`tasty.co`), BuzzFeed's recipe site.

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    RecipeSchema {
        name: helpers::text(doc, "h1.recipe-name"),
        description: helpers::text(doc, ".description"),
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        keywords: helpers::texts(doc, ".breadcrumbs a").join(", "),
        ingredients: helpers::texts(doc, ".ingredients__section li.ingredient"),
        instructions: helpers::texts(doc, ".preparation ol.prep-steps > li"),
        recipe_yield: normalize::yields(&helpers::text(doc, ".servings-display")),
        nutrition: crate::model::NutritionSchema {
            calories: helpers::labelled(doc, ".nutrition-details li", &["Calories"]),
            fat: helpers::labelled(doc, ".nutrition-details li", &["Fat"]),
            carbohydrates: helpers::labelled(doc, ".nutrition-details li", &["Carbs"]),
            fiber: helpers::labelled(doc, ".nutrition-details li", &["Fiber"]),
            sugar: helpers::labelled(doc, ".nutrition-details li", &["Sugar"]),
            protein: helpers::labelled(doc, ".nutrition-details li", &["Protein"]),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <meta property="og:image" content="https://img.buzzfeed.com/tasty-app-user-assets/honey-garlic.jpg">
        </head><body>
        <nav class="breadcrumbs"><a href="/topic/dinner">Dinner</a><a href="/topic/chicken">Chicken</a></nav>
        <h1 class="recipe-name">Honey Garlic Chicken</h1>
        <p class="description">Sticky, sweet &amp; savory.</p>
        <p class="servings-display">for 4 servings</p>
        <div class="ingredients__section"><ul>
          <li class="ingredient">1 lb chicken thighs</li>
          <li class="ingredient">3 cloves garlic</li>
        </ul></div>
        <div class="preparation"><ol class="prep-steps">
          <li>Season the chicken.</li>
          <li>Pan-fry and glaze.</li>
          <li>Enjoy!</li>
        </ol></div>
        <div class="nutrition-details"><ul>
          <li>Calories 380</li><li>Fat 12g</li><li>Carbs 30g</li><li>Protein 35g</li>
        </ul></div>
        </body></html>"#;

    #[test]
    fn test_tasty() {
        let recipe = testing::extract(PAGE, "https://tasty.co/recipe/honey-garlic-chicken", scrape);
        assert_eq!(recipe.name, "Honey Garlic Chicken");
        assert_eq!(recipe.description, "Sticky, sweet & savory.");
        assert_eq!(recipe.keywords, "Dinner, Chicken");
        assert_eq!(recipe.recipe_yield, 4);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.instructions.len(), 3);
        assert_eq!(recipe.nutrition.calories, "380");
        assert_eq!(recipe.nutrition.carbohydrates, "30g");
        assert_eq!(recipe.nutrition.fiber, "");
    }
}

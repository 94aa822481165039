//! Readers for the recipe-card plugins many food blogs share.
//!
//! Several hosts in the registry are WordPress sites rendering their recipes
//! with WP Recipe Maker or Tasty Recipes. The markup of a card is the same on
//! every site, so each host starts from one of these and adds its own tweaks.

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::{NutritionSchema, RecipeSchema};
use crate::normalize;

/// WP Recipe Maker card (`.wprm-recipe-*`).
pub fn wprm_card(doc: &Document, url: &Url) -> RecipeSchema {
    let ingredients = doc
        .select(".wprm-recipe-ingredient")
        .iter()
        .map(|row| {
            helpers::node_texts(
                row,
                ".wprm-recipe-ingredient-amount, .wprm-recipe-ingredient-unit, .wprm-recipe-ingredient-name, .wprm-recipe-ingredient-notes",
            )
            .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect();

    let nutrition_value = |key: &str| {
        let container = format!(".wprm-nutrition-label-text-nutrition-container-{key}");
        doc.select_first(&container)
            .map(|node| {
                helpers::node_texts(
                    &node,
                    ".wprm-nutrition-label-text-nutrition-value, .wprm-nutrition-label-text-nutrition-unit",
                )
                .join(" ")
            })
            .unwrap_or_default()
    };

    RecipeSchema {
        name: helpers::text(doc, ".wprm-recipe-name"),
        description: helpers::text(doc, ".wprm-recipe-summary"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".wprm-recipe-image img"), url),
        category: helpers::text(doc, ".wprm-recipe-course"),
        cuisine: helpers::text(doc, ".wprm-recipe-cuisine"),
        keywords: helpers::text(doc, ".wprm-recipe-keyword"),
        ingredients,
        instructions: helpers::texts(doc, ".wprm-recipe-instruction-text"),
        tools: helpers::texts(doc, ".wprm-recipe-equipment-name"),
        recipe_yield: normalize::yields(&helpers::text(doc, ".wprm-recipe-servings")),
        prep_time: helpers::text(doc, ".wprm-recipe-prep-time-container .wprm-recipe-time"),
        cook_time: helpers::text(doc, ".wprm-recipe-cook-time-container .wprm-recipe-time"),
        nutrition: NutritionSchema {
            calories: nutrition_value("calories"),
            carbohydrates: nutrition_value("carbohydrates"),
            cholesterol: nutrition_value("cholesterol"),
            fat: nutrition_value("fat"),
            fiber: nutrition_value("fiber"),
            protein: nutrition_value("protein"),
            saturated_fat: nutrition_value("saturated_fat"),
            sodium: nutrition_value("sodium"),
            sugar: nutrition_value("sugar"),
            trans_fat: nutrition_value("trans_fat"),
            unsaturated_fat: nutrition_value("unsaturated_fat"),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tasty Recipes card (`.tasty-recipes-*`).
pub fn tasty_card(doc: &Document, url: &Url) -> RecipeSchema {
    let detail = |class: &str| helpers::text(doc, &format!(".tasty-recipes-{class}"));

    RecipeSchema {
        name: detail("title"),
        description: detail("description"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".tasty-recipes-image img"), url),
        category: detail("category"),
        cuisine: detail("cuisine"),
        cooking_method: detail("method"),
        keywords: normalize::strip_prefixes(&detail("keywords"), &["Keywords"]),
        ingredients: helpers::texts(doc, ".tasty-recipes-ingredients li"),
        instructions: helpers::texts(doc, ".tasty-recipes-instructions li"),
        recipe_yield: normalize::yields(&detail("yield")),
        prep_time: detail("prep-time"),
        cook_time: detail("cook-time"),
        nutrition: NutritionSchema {
            calories: detail("calories"),
            carbohydrates: detail("carbohydrates"),
            cholesterol: detail("cholesterol"),
            fat: detail("fat"),
            fiber: detail("fiber"),
            protein: detail("protein"),
            saturated_fat: detail("saturated"),
            servings: detail("serving-size"),
            sodium: detail("sodium"),
            sugar: detail("sugar"),
            trans_fat: detail("trans-fat"),
            unsaturated_fat: detail("unsaturated"),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const WPRM: &str = r#"<html><body>
        <div class="wprm-recipe-container">
          <h2 class="wprm-recipe-name">One Pot Chili</h2>
          <div class="wprm-recipe-summary">Weeknight chili &amp; cornbread.</div>
          <div class="wprm-recipe-image"><img src="data:image/gif;base64,R0l" data-lazy-src="/wp-content/chili.jpg"></div>
          <div class="wprm-recipe-prep-time-container"><span class="wprm-recipe-details-label">Prep Time</span><span class="wprm-recipe-time">15 mins</span></div>
          <div class="wprm-recipe-cook-time-container"><span class="wprm-recipe-details-label">Cook Time</span><span class="wprm-recipe-time">1 hr</span></div>
          <span class="wprm-recipe-course">Main Course</span>
          <span class="wprm-recipe-cuisine">American</span>
          <span class="wprm-recipe-keyword">chili, beans</span>
          <span class="wprm-recipe-servings">6</span>
          <ul class="wprm-recipe-ingredients">
            <li class="wprm-recipe-ingredient"><span class="wprm-recipe-ingredient-amount">1</span> <span class="wprm-recipe-ingredient-unit">lb</span> <span class="wprm-recipe-ingredient-name">ground beef</span></li>
            <li class="wprm-recipe-ingredient"><span class="wprm-recipe-ingredient-amount">2</span> <span class="wprm-recipe-ingredient-name">onions</span> <span class="wprm-recipe-ingredient-notes">diced</span></li>
          </ul>
          <div class="wprm-recipe-instruction-text">Brown the beef.</div>
          <div class="wprm-recipe-instruction-text">Add everything and simmer.</div>
          <div class="wprm-recipe-equipment-name">Dutch oven</div>
          <span class="wprm-nutrition-label-text-nutrition-container-calories"><span class="wprm-nutrition-label-text-nutrition-value">410</span><span class="wprm-nutrition-label-text-nutrition-unit">kcal</span></span>
        </div></body></html>"#;

    #[test]
    fn test_wprm_card() {
        let recipe = testing::extract(WPRM, "https://blog.example.com/chili/", wprm_card);
        assert_eq!(recipe.name, "One Pot Chili");
        assert_eq!(recipe.description, "Weeknight chili & cornbread.");
        assert_eq!(recipe.image, "https://blog.example.com/wp-content/chili.jpg");
        assert_eq!(recipe.prep_time, "PT15M");
        assert_eq!(recipe.cook_time, "PT1H");
        assert_eq!(recipe.category, "Main Course");
        assert_eq!(recipe.keywords, "chili, beans");
        assert_eq!(recipe.recipe_yield, 6);
        assert_eq!(recipe.ingredients, vec!["1 lb ground beef", "2 onions diced"]);
        assert_eq!(
            recipe.instructions,
            vec!["Brown the beef.", "Add everything and simmer."]
        );
        assert_eq!(recipe.tools, vec!["Dutch oven"]);
        assert_eq!(recipe.nutrition.calories, "410 kcal");
        assert_eq!(recipe.nutrition.fat, "");
    }

    const TASTY: &str = r#"<html><body>
        <div class="tasty-recipes">
          <h2 class="tasty-recipes-title">Soft Sugar Cookies</h2>
          <div class="tasty-recipes-image"><img src="https://cdn.example.com/cookies.jpg"></div>
          <div class="tasty-recipes-description"><p>Soft and chewy.</p></div>
          <span class="tasty-recipes-prep-time">2 hours</span>
          <span class="tasty-recipes-cook-time">12 minutes</span>
          <span class="tasty-recipes-yield">24 cookies</span>
          <span class="tasty-recipes-category">Dessert</span>
          <div class="tasty-recipes-ingredients"><ul><li>2 cups flour</li><li>1 cup sugar</li></ul></div>
          <div class="tasty-recipes-instructions"><ol><li>Mix.</li><li>Chill.</li><li>Bake.</li></ol></div>
          <span class="tasty-recipes-keywords">Keywords: cookies, sugar cookies</span>
          <span class="tasty-recipes-calories">150</span>
        </div></body></html>"#;

    #[test]
    fn test_tasty_card() {
        let recipe = testing::extract(TASTY, "https://blog.example.com/cookies/", tasty_card);
        assert_eq!(recipe.name, "Soft Sugar Cookies");
        assert_eq!(recipe.description, "Soft and chewy.");
        assert_eq!(recipe.prep_time, "PT2H");
        assert_eq!(recipe.cook_time, "PT12M");
        assert_eq!(recipe.recipe_yield, 24);
        assert_eq!(recipe.keywords, "cookies, sugar cookies");
        assert_eq!(recipe.ingredients, vec!["2 cups flour", "1 cup sugar"]);
        assert_eq!(recipe.instructions, vec!["Mix.", "Chill.", "Bake."]);
        assert_eq!(recipe.nutrition.calories, "150");
    }
}

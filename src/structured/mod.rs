//! Embedded structured data: JSON-LD islands and microdata items typed `Recipe`.

mod json_ld;
mod microdata;

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize::{self, ImageValue, InstructionValue, NutritionValue, TextValue, YieldValue};

/// Older vocabulary names still found in the wild, mapped to current ones.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("ingredients", "recipeIngredient"),
    ("instructions", "recipeInstructions"),
    ("tools", "tool"),
    ("yield", "recipeYield"),
];

/// Raw candidates in source order: JSON-LD first, then microdata.
pub fn extract_candidates(document: &Document) -> Vec<Map<String, Value>> {
    let mut candidates = json_ld::extract(document);
    candidates.extend(microdata::extract(document));
    candidates
}

/// All candidates coerced into records, in source order.
pub fn extract_recipes(document: &Document, base: &Url) -> Vec<RecipeSchema> {
    extract_candidates(document)
        .iter()
        .map(|candidate| candidate_to_recipe(candidate, base))
        .collect()
}

/// The first structured candidate that has a name.
///
/// Per-host extractors use this when a site's structured data is good enough
/// and only a few fields need patching from the DOM.
pub fn first_recipe(document: &Document, base: &Url) -> RecipeSchema {
    extract_recipes(document, base)
        .into_iter()
        .find(|recipe| !recipe.name.is_empty())
        .unwrap_or_default()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecipe {
    name: Option<TextValue>,
    url: Option<TextValue>,
    description: Option<TextValue>,
    image: Option<ImageValue>,
    #[serde(rename = "recipeCategory")]
    category: Option<TextValue>,
    #[serde(rename = "recipeCuisine")]
    cuisine: Option<TextValue>,
    #[serde(rename = "cookingMethod")]
    cooking_method: Option<TextValue>,
    keywords: Option<TextValue>,
    #[serde(rename = "recipeIngredient")]
    ingredients: Option<TextValue>,
    #[serde(rename = "recipeInstructions")]
    instructions: Option<InstructionValue>,
    tool: Option<TextValue>,
    #[serde(rename = "recipeYield")]
    recipe_yield: Option<YieldValue>,
    #[serde(rename = "prepTime")]
    prep_time: Option<TextValue>,
    #[serde(rename = "cookTime")]
    cook_time: Option<TextValue>,
    #[serde(rename = "datePublished")]
    date_published: Option<TextValue>,
    #[serde(rename = "dateModified")]
    date_modified: Option<TextValue>,
    #[serde(rename = "dateCreated")]
    date_created: Option<TextValue>,
    nutrition: Option<NutritionValue>,
}

/// Coerce one raw structured-data map into a normalized record.
pub fn candidate_to_recipe(candidate: &Map<String, Value>, base: &Url) -> RecipeSchema {
    let mut map = candidate.clone();
    for (legacy, current) in LEGACY_KEYS {
        if let Some(value) = map.remove(*legacy) {
            map.entry(current.to_string()).or_insert(value);
        }
    }

    let raw: RawRecipe = normalize::from_value(&Value::Object(map)).unwrap_or_default();

    let text = |value: &Option<TextValue>| {
        value
            .as_ref()
            .and_then(TextValue::first)
            .unwrap_or_default()
    };

    let mut recipe = RecipeSchema {
        name: text(&raw.name),
        url: text(&raw.url),
        description: text(&raw.description),
        image: raw
            .image
            .as_ref()
            .map(|img| normalize::image(img, base))
            .unwrap_or_default(),
        category: raw.category.as_ref().map(normalize::first_term).unwrap_or_default(),
        cuisine: raw.cuisine.as_ref().map(normalize::first_term).unwrap_or_default(),
        cooking_method: raw
            .cooking_method
            .as_ref()
            .map(normalize::first_term)
            .unwrap_or_default(),
        keywords: raw.keywords.as_ref().map(normalize::keywords).unwrap_or_default(),
        ingredients: raw
            .ingredients
            .as_ref()
            .map(normalize::ingredients)
            .unwrap_or_default(),
        instructions: raw
            .instructions
            .as_ref()
            .map(normalize::instructions)
            .unwrap_or_default(),
        tools: raw.tool.as_ref().map(normalize::ingredients).unwrap_or_default(),
        recipe_yield: raw
            .recipe_yield
            .as_ref()
            .map(normalize::recipe_yield)
            .unwrap_or_default(),
        prep_time: text(&raw.prep_time),
        cook_time: text(&raw.cook_time),
        date_published: text(&raw.date_published),
        date_modified: text(&raw.date_modified),
        date_created: text(&raw.date_created),
        nutrition: raw
            .nutrition
            .as_ref()
            .map(normalize::nutrition)
            .unwrap_or_default(),
        ..Default::default()
    };

    normalize::normalize_recipe(&mut recipe, base);
    recipe
}

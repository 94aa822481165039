//! Pure field normalizers.
//!
//! Structured data publishes the same field in many shapes; all coercion into
//! the [`RecipeSchema`] representation happens here and nowhere else.
//! Normalizers never fail: bad input becomes the empty value of the field.

mod duration;
mod fields;
mod text;
mod values;
mod yields;

use url::Url;

use crate::model::{RecipeSchema, SchemaType, SCHEMA_CONTEXT};

pub use duration::{duration, is_iso_duration};
pub use fields::{
    absolute_url, first_term, image, ingredients, instructions, keywords, keywords_str,
    nutrition, recipe_yield,
};
pub use text::{
    clean_description, clean_line, clean_text, collapse_whitespace, decode_entities,
    split_lines, strip_prefixes, strip_tags,
};
pub use values::{
    from_value, HowToNode, ImageObject, ImageValue, InstructionValue, NamedObject,
    NutritionValue, TextValue, YieldObject, YieldValue,
};
pub use yields::{yields, yields_from_number};

/// Run every normalizer over `recipe`. Running it twice changes nothing.
pub fn normalize_recipe(recipe: &mut RecipeSchema, base: &Url) {
    recipe.at_context = SCHEMA_CONTEXT.to_string();
    recipe.at_type = SchemaType::Recipe;

    recipe.name = clean_text(&recipe.name);
    recipe.description = clean_description(&recipe.description);
    recipe.url = absolute_url(&recipe.url, base);
    recipe.image = absolute_url(&recipe.image, base);

    recipe.category = clean_text(&recipe.category);
    recipe.cuisine = clean_text(&recipe.cuisine);
    recipe.cooking_method = clean_text(&recipe.cooking_method);
    recipe.keywords = keywords_str(&recipe.keywords);

    clean_lines(&mut recipe.ingredients);
    clean_lines(&mut recipe.instructions);
    clean_lines(&mut recipe.tools);

    recipe.recipe_yield = recipe.recipe_yield.max(0);
    recipe.prep_time = duration(&recipe.prep_time);
    recipe.cook_time = duration(&recipe.cook_time);

    for date in [
        &mut recipe.date_published,
        &mut recipe.date_modified,
        &mut recipe.date_created,
    ] {
        *date = date.trim().to_string();
    }

    for field in recipe.nutrition.fields_mut() {
        *field = clean_text(field);
    }
}

fn clean_lines(lines: &mut Vec<String>) {
    *lines = lines
        .iter()
        .map(|line| clean_line(line))
        .filter(|line| !line.is_empty())
        .collect();
}

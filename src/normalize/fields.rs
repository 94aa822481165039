use serde_json::{Map, Value};
use url::Url;

use super::text::{clean_line, clean_text, split_lines};
use super::values::{ImageValue, InstructionValue, NutritionValue, TextValue, YieldValue};
use super::yields::{yields, yields_from_number};
use crate::model::NutritionSchema;

/// Category, cuisine and cooking method: the first scalar, trimmed.
pub fn first_term(value: &TextValue) -> String {
    value.first().map(|s| clean_text(&s)).unwrap_or_default()
}

/// Keywords joined with `", "`, source order kept, duplicates kept.
pub fn keywords(value: &TextValue) -> String {
    join_keywords(value.scalars().iter().map(String::as_str))
}

/// Re-join an already flattened keyword string.
pub fn keywords_str(text: &str) -> String {
    join_keywords(std::iter::once(text))
}

fn join_keywords<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(|part| part.split(','))
        .map(clean_text)
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ingredient lines. A single string is split into lines; list entries are
/// kept one per line.
pub fn ingredients(value: &TextValue) -> Vec<String> {
    match value {
        TextValue::Text(s) => split_lines(s),
        other => other
            .scalars()
            .iter()
            .map(|s| clean_line(s))
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

/// Instruction steps, flattening `HowToSection`/`ItemList` groups.
pub fn instructions(value: &InstructionValue) -> Vec<String> {
    let mut out = Vec::new();
    push_instructions(value, true, &mut out);
    out
}

fn push_instructions(value: &InstructionValue, top_level: bool, out: &mut Vec<String>) {
    match value {
        InstructionValue::Text(s) if top_level => out.extend(split_lines(s)),
        InstructionValue::Text(s) => push_line(s, out),
        InstructionValue::List(items) => {
            for item in items {
                push_instructions(item, false, out);
            }
        }
        InstructionValue::Step(node) => {
            if let Some(items) = &node.items {
                push_instructions(items, false, out);
            } else if let Some(text) = node.text.as_ref().filter(|t| !t.trim().is_empty()) {
                push_line(text, out);
            } else if let Some(name) = &node.name {
                push_line(name, out);
            }
        }
        InstructionValue::Other(_) => {}
    }
}

fn push_line(text: &str, out: &mut Vec<String>) {
    let line = clean_line(text);
    if !line.is_empty() {
        out.push(line);
    }
}

pub fn recipe_yield(value: &YieldValue) -> i16 {
    match value {
        YieldValue::Number(n) => yields_from_number(*n),
        YieldValue::Text(s) => yields(s),
        YieldValue::List(items) => items
            .iter()
            .map(recipe_yield)
            .find(|n| *n > 0)
            .unwrap_or(0),
        YieldValue::Object(obj) => obj
            .max_value
            .as_deref()
            .or(obj.value.as_deref())
            .map(recipe_yield)
            .unwrap_or(0),
        YieldValue::Other(_) => 0,
    }
}

/// First usable image URL, resolved against `base`.
pub fn image(value: &ImageValue, base: &Url) -> String {
    value
        .urls()
        .iter()
        .map(|candidate| absolute_url(candidate, base))
        .find(|url| !url.is_empty())
        .unwrap_or_default()
}

/// Resolve `raw` against `base`. Only http(s) results are kept.
pub fn absolute_url(raw: &str, base: &Url) -> String {
    let raw = clean_text(raw);
    if raw.is_empty() || raw.starts_with("data:") {
        return String::new();
    }
    match base.join(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        _ => String::new(),
    }
}

/// Nutrition facts from a `NutritionInformation` object or a flat map.
pub fn nutrition(value: &NutritionValue) -> NutritionSchema {
    match value {
        NutritionValue::Object(map) => nutrition_from_map(map),
        NutritionValue::List(items) => items
            .iter()
            .map(nutrition)
            .find(|n| !n.is_empty())
            .unwrap_or_default(),
        NutritionValue::Other(_) => NutritionSchema::default(),
    }
}

fn nutrition_from_map(map: &Map<String, Value>) -> NutritionSchema {
    let mut out = NutritionSchema::default();
    for (key, value) in map {
        let Some(slot) = nutrition_slot(&mut out, key) else {
            continue;
        };
        if let Some(text) = scalar(value) {
            *slot = clean_text(&text);
        }
    }
    out
}

fn nutrition_slot<'a>(n: &'a mut NutritionSchema, key: &str) -> Option<&'a mut String> {
    let key = key.to_ascii_lowercase();
    let key = key.strip_suffix("content").unwrap_or(&key);
    let slot = match key {
        "calories" => &mut n.calories,
        "carbohydrate" | "carbohydrates" => &mut n.carbohydrates,
        "cholesterol" => &mut n.cholesterol,
        "fat" => &mut n.fat,
        "fiber" | "fibre" => &mut n.fiber,
        "protein" => &mut n.protein,
        "saturatedfat" => &mut n.saturated_fat,
        "servingsize" | "servings" => &mut n.servings,
        "sodium" => &mut n.sodium,
        "sugar" | "sugars" => &mut n.sugar,
        "transfat" => &mut n.trans_fat,
        "unsaturatedfat" => &mut n.unsaturated_fat,
        _ => return None,
    };
    Some(slot)
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.iter().find_map(scalar),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::values::from_value;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://example.com/cake").unwrap()
    }

    #[test]
    fn test_first_term() {
        let v: TextValue = from_value(&json!(["  Dessert ", "Snack"])).unwrap();
        assert_eq!(first_term(&v), "Dessert");
        let v: TextValue = from_value(&json!({"name": "Baking"})).unwrap();
        assert_eq!(first_term(&v), "Baking");
    }

    #[test]
    fn test_keywords_keep_order_and_duplicates() {
        let v: TextValue = from_value(&json!("cake,chocolate ,  cake")).unwrap();
        assert_eq!(keywords(&v), "cake, chocolate, cake");
        let v: TextValue = from_value(&json!(["easy", "quick, weeknight"])).unwrap();
        assert_eq!(keywords(&v), "easy, quick, weeknight");
        assert_eq!(keywords_str(&keywords(&v)), "easy, quick, weeknight");
    }

    #[test]
    fn test_ingredients_from_string_and_list() {
        let v: TextValue = from_value(&json!("1 cup flour<br>2  eggs")).unwrap();
        assert_eq!(ingredients(&v), vec!["1 cup flour", "2 eggs"]);
        let v: TextValue = from_value(&json!([" 1 cup flour ", "", "2 eggs &amp; milk"])).unwrap();
        assert_eq!(ingredients(&v), vec!["1 cup flour", "2 eggs & milk"]);
    }

    #[test]
    fn test_instructions_flatten_sections() {
        let v: InstructionValue = from_value(&json!([
            {"@type": "HowToSection", "name": "Dough", "itemListElement": [
                {"@type": "HowToStep", "text": "Mix flour."},
                {"@type": "HowToStep", "name": "Knead."}
            ]},
            {"@type": "HowToStep", "text": "Bake &amp; cool."},
            "Serve."
        ]))
        .unwrap();
        assert_eq!(
            instructions(&v),
            vec!["Mix flour.", "Knead.", "Bake & cool.", "Serve."]
        );
    }

    #[test]
    fn test_instructions_from_br_paragraph() {
        let v: InstructionValue =
            from_value(&json!("Boil water.<br/>Add pasta.<br>Drain.")).unwrap();
        assert_eq!(instructions(&v), vec!["Boil water.", "Add pasta.", "Drain."]);
    }

    #[test]
    fn test_recipe_yield_shapes() {
        let v: YieldValue = from_value(&json!(["4", "4 servings"])).unwrap();
        assert_eq!(recipe_yield(&v), 4);
        let v: YieldValue = from_value(&json!(6)).unwrap();
        assert_eq!(recipe_yield(&v), 6);
        let v: YieldValue = from_value(&json!({"@type": "QuantitativeValue", "value": "8"})).unwrap();
        assert_eq!(recipe_yield(&v), 8);
        let v: YieldValue = from_value(&json!(null)).unwrap();
        assert_eq!(recipe_yield(&v), 0);
    }

    #[test]
    fn test_image_resolution() {
        let v: ImageValue = from_value(&json!("/img/cake.jpg")).unwrap();
        assert_eq!(image(&v, &base()), "https://example.com/img/cake.jpg");

        let v: ImageValue =
            from_value(&json!(["data:image/png;base64,AAAA", " //cdn.example.com/c.jpg "])).unwrap();
        assert_eq!(image(&v, &base()), "https://cdn.example.com/c.jpg");

        let v: ImageValue = from_value(&json!([])).unwrap();
        assert_eq!(image(&v, &base()), "");
    }

    #[test]
    fn test_absolute_url_rejects_other_schemes() {
        assert_eq!(absolute_url("mailto:chef@example.com", &base()), "");
        assert_eq!(absolute_url("", &base()), "");
        assert_eq!(
            absolute_url("https://other.org/x", &base()),
            "https://other.org/x"
        );
    }

    #[test]
    fn test_nutrition_from_object_and_flat_map() {
        let v: NutritionValue = from_value(&json!({
            "@type": "NutritionInformation",
            "calories": "250 kcal",
            "fatContent": "12 g",
            "servingSize": 1,
            "sugarContent": ["9 g"]
        }))
        .unwrap();
        let n = nutrition(&v);
        assert_eq!(n.calories, "250 kcal");
        assert_eq!(n.fat, "12 g");
        assert_eq!(n.servings, "1");
        assert_eq!(n.sugar, "9 g");
        assert_eq!(n.protein, "");

        let v: NutritionValue = from_value(&json!({"Calories": "100", "SaturatedFat": "2 g"})).unwrap();
        let n = nutrition(&v);
        assert_eq!(n.calories, "100");
        assert_eq!(n.saturated_fat, "2 g");
    }
}

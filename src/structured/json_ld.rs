use log::{debug, warn};
use serde_json::{Map, Value};

use crate::dom::Document;

/// Collect every `Recipe` node from the page's JSON-LD islands, in source order.
pub fn extract(document: &Document) -> Vec<Map<String, Value>> {
    let scripts: Vec<_> = document
        .select("script[type]")
        .into_iter()
        .filter(|script| {
            script
                .attr("type")
                .trim()
                .eq_ignore_ascii_case("application/ld+json")
        })
        .collect();
    debug!("JsonLd: found {} JSON-LD script tags", scripts.len());

    let mut recipes = Vec::new();
    for (index, script) in scripts.iter().enumerate() {
        let raw_json = script.raw_text();
        if raw_json.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(&sanitize_json(&raw_json)) {
            Ok(json_ld) => {
                let before = recipes.len();
                collect_recipes(&json_ld, &mut recipes);
                debug!(
                    "JsonLd: script {} held {} recipe node(s)",
                    index,
                    recipes.len() - before
                );
            }
            Err(e) => {
                warn!("JsonLd: skipping malformed JSON-LD script {}: {}", index, e);
            }
        }
    }
    recipes
}

/// Depth-first walk collecting every object typed as `Recipe`.
fn collect_recipes(value: &Value, out: &mut Vec<Map<String, Value>>) {
    match value {
        Value::Object(obj) => {
            if obj.get("@type").is_some_and(is_recipe_type) {
                out.push(obj.clone());
            }
            for child in obj.values() {
                collect_recipes(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_recipes(item, out);
            }
        }
        _ => {}
    }
}

/// `@type` is "Recipe" (any case, or a schema.org IRI), either alone or in a list.
pub(crate) fn is_recipe_type(type_value: &Value) -> bool {
    match type_value {
        Value::String(s) => is_recipe_name(s),
        Value::Array(items) => items
            .iter()
            .any(|item| item.as_str().is_some_and(is_recipe_name)),
        _ => false,
    }
}

pub(crate) fn is_recipe_name(name: &str) -> bool {
    let name = name.trim();
    let last = name.rsplit(['/', '#']).next().unwrap_or(name);
    last.eq_ignore_ascii_case("recipe")
}

/// Repair the most common JSON-LD defects: raw control characters inside
/// strings and trailing commas before a closing bracket.
fn sanitize_json(json_str: &str) -> String {
    let mut out = String::with_capacity(json_str.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut pending_comma = false;

    for c in json_str.trim().chars() {
        if in_string {
            match c {
                _ if escaped => {
                    escaped = false;
                    out.push(c);
                }
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {}
                _ => out.push(c),
            }
            continue;
        }

        match c {
            ',' => {
                if pending_comma {
                    // duplicate comma, keep one
                    continue;
                }
                pending_comma = true;
            }
            ']' | '}' => {
                pending_comma = false;
                out.push(c);
            }
            c if c.is_whitespace() => {}
            _ => {
                if pending_comma {
                    out.push(',');
                    pending_comma = false;
                }
                if c == '"' {
                    in_string = true;
                }
                out.push(c);
            }
        }
    }
    out
}

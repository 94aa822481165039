use log::debug;
use serde_json::{Map, Value};

use super::json_ld::is_recipe_name;
use crate::dom::{Document, Node};

const LIST_PROPS: &[&str] = &[
    "recipeInstructions",
    "instructions",
    "recipeIngredient",
    "ingredients",
];

/// Every top-level microdata `Recipe` item on the page as a raw map.
pub fn extract(document: &Document) -> Vec<Map<String, Value>> {
    let mut scopes = Vec::new();
    find_recipe_scopes(document.root(), &mut scopes);
    debug!("MicroData: found {} Recipe item(s)", scopes.len());

    scopes.into_iter().map(parse_item).collect()
}

fn find_recipe_scopes<'a>(node: Node<'a>, out: &mut Vec<Node<'a>>) {
    for child in node.children() {
        if is_recipe_scope(&child) {
            out.push(child);
        } else {
            find_recipe_scopes(child, out);
        }
    }
}

fn is_recipe_scope(node: &Node<'_>) -> bool {
    node.has_attr("itemscope")
        && node
            .attr("itemtype")
            .split_whitespace()
            .any(is_recipe_name)
}

fn parse_item(scope: Node<'_>) -> Map<String, Value> {
    let mut map = Map::new();
    let item_type = scope.attr("itemtype");
    if let Some(first) = item_type.split_whitespace().next() {
        let name = first.rsplit(['/', '#']).next().unwrap_or(first);
        map.insert("@type".to_string(), Value::String(name.to_string()));
    }
    collect_props(scope, &mut map);
    map
}

fn collect_props(node: Node<'_>, map: &mut Map<String, Value>) {
    for child in node.children() {
        let itemprop = child.attr("itemprop");
        let props: Vec<&str> = itemprop.split_whitespace().collect();
        let is_scope = child.has_attr("itemscope");

        if !props.is_empty() {
            for prop in &props {
                let value = if is_scope {
                    Value::Object(parse_item(child))
                } else {
                    prop_value(child, prop)
                };
                insert_value(map, prop, value);
            }
        }

        // Properties below a nested item belong to that item.
        if !is_scope {
            collect_props(child, map);
        }
    }
}

/// Value of an `itemprop` element, following the HTML microdata rules.
fn prop_value(node: Node<'_>, prop: &str) -> Value {
    if LIST_PROPS.contains(&prop) {
        let items: Vec<Value> = node
            .select("li")
            .iter()
            .map(|li| li.text())
            .filter(|t| !t.is_empty())
            .map(Value::String)
            .collect();
        if !items.is_empty() {
            return Value::Array(items);
        }
        if prop.ends_with("nstructions") {
            let lines = node.lines();
            if lines.len() > 1 {
                return Value::Array(lines.into_iter().map(Value::String).collect());
            }
        }
    }

    let attr = match node.tag() {
        "meta" => Some("content"),
        "img" | "audio" | "video" | "source" | "embed" | "iframe" | "track" => Some("src"),
        "a" | "area" | "link" => Some("href"),
        "object" => Some("data"),
        "data" | "meter" => Some("value"),
        "time" if node.has_attr("datetime") => Some("datetime"),
        _ if node.has_attr("content") => Some("content"),
        _ => None,
    };

    match attr {
        Some(name) => Value::String(node.attr(name).trim().to_string()),
        None => Value::String(node.text()),
    }
}

fn insert_value(map: &mut Map<String, Value>, prop: &str, value: Value) {
    match map.get_mut(prop) {
        None => {
            map.insert(prop.to_string(), value);
        }
        Some(Value::Array(existing)) => match value {
            Value::Array(more) => existing.extend(more),
            single => existing.push(single),
        },
        Some(existing) => {
            let first = existing.take();
            let mut items = vec![first];
            match value {
                Value::Array(more) => items.extend(more),
                single => items.push(single),
            }
            *existing = Value::Array(items);
        }
    }
}

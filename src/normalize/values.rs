//! Sum types for the shapes structured data takes for a single field.
//!
//! Every enum ends in a catch-all variant so an unexpected shape degrades to
//! "unset" for that field instead of failing the whole candidate.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Text-like field: a string, a number, a list, or an object carrying a name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Number(Number),
    List(Vec<TextValue>),
    Object(NamedObject),
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedObject {
    pub name: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "@value")]
    pub value: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageValue {
    Url(String),
    List(Vec<ImageValue>),
    Object(ImageObject),
    Other(Value),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageObject {
    pub url: Option<Box<ImageValue>>,
    #[serde(rename = "contentUrl")]
    pub content_url: Option<Box<ImageValue>>,
    #[serde(rename = "@list")]
    pub list: Option<Vec<ImageValue>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YieldValue {
    Number(f64),
    Text(String),
    List(Vec<YieldValue>),
    Object(YieldObject),
    Other(Value),
}

/// `QuantitativeValue`-like yield object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct YieldObject {
    pub value: Option<Box<YieldValue>>,
    #[serde(rename = "maxValue")]
    pub max_value: Option<Box<YieldValue>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InstructionValue {
    Text(String),
    List(Vec<InstructionValue>),
    Step(HowToNode),
    Other(Value),
}

/// A `HowToStep`, `HowToSection` or `ItemList` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HowToNode {
    pub text: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "itemListElement")]
    pub items: Option<Box<InstructionValue>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NutritionValue {
    Object(Map<String, Value>),
    List(Vec<NutritionValue>),
    Other(Value),
}

impl TextValue {
    /// Every scalar held by this value, in source order.
    pub fn scalars(&self) -> Vec<String> {
        match self {
            TextValue::Text(s) => vec![s.clone()],
            TextValue::Number(n) => vec![n.to_string()],
            TextValue::List(items) => items.iter().flat_map(TextValue::scalars).collect(),
            TextValue::Object(obj) => obj
                .name
                .as_ref()
                .or(obj.text.as_ref())
                .or(obj.value.as_ref())
                .or(obj.url.as_ref())
                .map(|s| vec![s.clone()])
                .unwrap_or_default(),
            TextValue::Other(_) => Vec::new(),
        }
    }

    /// First scalar that is not blank.
    pub fn first(&self) -> Option<String> {
        self.scalars().into_iter().find(|s| !s.trim().is_empty())
    }
}

impl ImageValue {
    /// Candidate URLs in source order.
    pub fn urls(&self) -> Vec<String> {
        match self {
            ImageValue::Url(s) => vec![s.clone()],
            ImageValue::List(items) => items.iter().flat_map(ImageValue::urls).collect(),
            ImageValue::Object(obj) => {
                let mut out = Vec::new();
                if let Some(url) = &obj.url {
                    out.extend(url.urls());
                }
                if let Some(url) = &obj.content_url {
                    out.extend(url.urls());
                }
                if let Some(list) = &obj.list {
                    out.extend(list.iter().flat_map(ImageValue::urls));
                }
                out
            }
            ImageValue::Other(_) => Vec::new(),
        }
    }
}

/// Deserialize a field shape from a raw JSON value, never failing.
pub fn from_value<T: for<'de> Deserialize<'de>>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

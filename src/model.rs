use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The schema.org type tag of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    #[default]
    Recipe,
}

/// Normalized schema.org `Recipe` record.
///
/// Unset fields hold the empty value of their type; serialisation skips them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeSchema {
    #[serde(rename = "@context", skip_serializing_if = "String::is_empty")]
    pub at_context: String,
    #[serde(rename = "@type")]
    pub at_type: SchemaType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(rename = "recipeCategory", skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(rename = "recipeCuisine", skip_serializing_if = "String::is_empty")]
    pub cuisine: String,
    #[serde(rename = "cookingMethod", skip_serializing_if = "String::is_empty")]
    pub cooking_method: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keywords: String,
    #[serde(rename = "recipeIngredient", skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(rename = "recipeInstructions", skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(rename = "tool", skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(rename = "recipeYield", skip_serializing_if = "is_zero")]
    pub recipe_yield: i16,
    #[serde(rename = "prepTime", skip_serializing_if = "String::is_empty")]
    pub prep_time: String,
    #[serde(rename = "cookTime", skip_serializing_if = "String::is_empty")]
    pub cook_time: String,
    #[serde(rename = "datePublished", skip_serializing_if = "String::is_empty")]
    pub date_published: String,
    #[serde(rename = "dateModified", skip_serializing_if = "String::is_empty")]
    pub date_modified: String,
    #[serde(rename = "dateCreated", skip_serializing_if = "String::is_empty")]
    pub date_created: String,
    #[serde(rename = "nutrition", skip_serializing_if = "NutritionSchema::is_empty")]
    pub nutrition: NutritionSchema,
}

/// Nutrition facts, values kept as published (units included).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionSchema {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub calories: String,
    #[serde(rename = "carbohydrateContent", skip_serializing_if = "String::is_empty")]
    pub carbohydrates: String,
    #[serde(rename = "cholesterolContent", skip_serializing_if = "String::is_empty")]
    pub cholesterol: String,
    #[serde(rename = "fatContent", skip_serializing_if = "String::is_empty")]
    pub fat: String,
    #[serde(rename = "fiberContent", skip_serializing_if = "String::is_empty")]
    pub fiber: String,
    #[serde(rename = "proteinContent", skip_serializing_if = "String::is_empty")]
    pub protein: String,
    #[serde(rename = "saturatedFatContent", skip_serializing_if = "String::is_empty")]
    pub saturated_fat: String,
    #[serde(rename = "servingSize", skip_serializing_if = "String::is_empty")]
    pub servings: String,
    #[serde(rename = "sodiumContent", skip_serializing_if = "String::is_empty")]
    pub sodium: String,
    #[serde(rename = "sugarContent", skip_serializing_if = "String::is_empty")]
    pub sugar: String,
    #[serde(rename = "transFatContent", skip_serializing_if = "String::is_empty")]
    pub trans_fat: String,
    #[serde(rename = "unsaturatedFatContent", skip_serializing_if = "String::is_empty")]
    pub unsaturated_fat: String,
}

fn is_zero(value: &i16) -> bool {
    *value == 0
}

impl NutritionSchema {
    /// Mutable access to every sub-field, in declaration order.
    pub fn fields_mut(&mut self) -> [&mut String; 12] {
        [
            &mut self.calories,
            &mut self.carbohydrates,
            &mut self.cholesterol,
            &mut self.fat,
            &mut self.fiber,
            &mut self.protein,
            &mut self.saturated_fat,
            &mut self.servings,
            &mut self.sodium,
            &mut self.sugar,
            &mut self.trans_fat,
            &mut self.unsaturated_fat,
        ]
    }

    pub fn fields(&self) -> [&String; 12] {
        [
            &self.calories,
            &self.carbohydrates,
            &self.cholesterol,
            &self.fat,
            &self.fiber,
            &self.protein,
            &self.saturated_fat,
            &self.servings,
            &self.sodium,
            &self.sugar,
            &self.trans_fat,
            &self.unsaturated_fat,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_empty())
    }
}

impl RecipeSchema {
    /// Number of data fields that hold a value. `@context`/`@type` are not counted.
    pub fn set_field_count(&self) -> usize {
        let strings = [
            &self.name,
            &self.url,
            &self.description,
            &self.image,
            &self.category,
            &self.cuisine,
            &self.cooking_method,
            &self.keywords,
            &self.prep_time,
            &self.cook_time,
            &self.date_published,
            &self.date_modified,
            &self.date_created,
        ];
        let lists = [&self.ingredients, &self.instructions, &self.tools];

        strings.iter().filter(|s| !s.is_empty()).count()
            + lists.iter().filter(|l| !l.is_empty()).count()
            + usize::from(self.recipe_yield > 0)
            + usize::from(!self.nutrition.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_schema_org_shape() {
        let recipe = RecipeSchema {
            at_context: SCHEMA_CONTEXT.to_string(),
            name: "Pancakes".to_string(),
            ingredients: vec!["1 cup flour".to_string(), "1 egg".to_string()],
            recipe_yield: 4,
            prep_time: "PT10M".to_string(),
            nutrition: NutritionSchema {
                calories: "210 kcal".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Recipe");
        assert_eq!(json["recipeYield"], 4);
        assert_eq!(json["recipeIngredient"][1], "1 egg");
        assert_eq!(json["nutrition"]["calories"], "210 kcal");
        assert!(json.get("cookTime").is_none());
        assert!(json.get("tool").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let recipe = RecipeSchema {
            at_context: SCHEMA_CONTEXT.to_string(),
            name: "Soup".to_string(),
            ingredients: vec!["water".to_string(), "salt".to_string()],
            instructions: vec!["Boil.".to_string(), "Season.".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: RecipeSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_set_field_count() {
        let mut recipe = RecipeSchema::default();
        assert_eq!(recipe.set_field_count(), 0);

        recipe.name = "Tea".to_string();
        recipe.tools = vec!["kettle".to_string()];
        recipe.recipe_yield = 1;
        recipe.nutrition.sugar = "0 g".to_string();
        assert_eq!(recipe.set_field_count(), 4);
    }
}

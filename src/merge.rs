//! Combine the per-host candidate with the structured-data candidates.

use url::Url;

use crate::model::RecipeSchema;

/// Merge one per-host candidate and the structured-data candidates into a
/// single record.
///
/// The primary record is the host candidate when it has a name, otherwise the
/// first structured candidate with a name, otherwise whichever candidate has
/// the most fields set (earliest wins a tie). Every field the primary leaves
/// unset is then taken from the first candidate in `host, structured[0], ...`
/// order that has it. Lists are taken whole; nutrition is merged sub-field by
/// sub-field. `url` falls back to `request_url`.
pub fn merge(host: RecipeSchema, structured: Vec<RecipeSchema>, request_url: &Url) -> RecipeSchema {
    let mut candidates = Vec::with_capacity(structured.len() + 1);
    candidates.push(host);
    candidates.extend(structured);

    let primary_index = primary_index(&candidates);
    let mut merged = candidates[primary_index].clone();

    for candidate in &candidates {
        fill_from(&mut merged, candidate);
    }

    if merged.url.is_empty() {
        merged.url = request_url.to_string();
    }
    merged
}

fn primary_index(candidates: &[RecipeSchema]) -> usize {
    if let Some(index) = candidates.iter().position(|c| !c.name.is_empty()) {
        return index;
    }

    let mut best = 0;
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.set_field_count() > candidates[best].set_field_count() {
            best = index;
        }
    }
    best
}

fn fill_from(target: &mut RecipeSchema, source: &RecipeSchema) {
    fill_string(&mut target.name, &source.name);
    fill_string(&mut target.url, &source.url);
    fill_string(&mut target.description, &source.description);
    fill_string(&mut target.image, &source.image);
    fill_string(&mut target.category, &source.category);
    fill_string(&mut target.cuisine, &source.cuisine);
    fill_string(&mut target.cooking_method, &source.cooking_method);
    fill_string(&mut target.keywords, &source.keywords);
    fill_list(&mut target.ingredients, &source.ingredients);
    fill_list(&mut target.instructions, &source.instructions);
    fill_list(&mut target.tools, &source.tools);
    if target.recipe_yield <= 0 && source.recipe_yield > 0 {
        target.recipe_yield = source.recipe_yield;
    }
    fill_string(&mut target.prep_time, &source.prep_time);
    fill_string(&mut target.cook_time, &source.cook_time);
    fill_string(&mut target.date_published, &source.date_published);
    fill_string(&mut target.date_modified, &source.date_modified);
    fill_string(&mut target.date_created, &source.date_created);

    for (target, source) in target
        .nutrition
        .fields_mut()
        .into_iter()
        .zip(source.nutrition.fields())
    {
        fill_string(target, source);
    }
}

fn fill_string(target: &mut String, source: &str) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_string();
    }
}

fn fill_list(target: &mut Vec<String>, source: &[String]) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_url() -> Url {
        Url::parse("https://example.com/cake").unwrap()
    }

    fn named(name: &str) -> RecipeSchema {
        RecipeSchema {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_host_fields_win() {
        let mut host = named("Host Cake");
        host.recipe_yield = 6;
        let mut structured = named("LD Cake");
        structured.recipe_yield = 4;
        structured.prep_time = "PT20M".to_string();

        let merged = merge(host, vec![structured], &request_url());
        assert_eq!(merged.name, "Host Cake");
        assert_eq!(merged.recipe_yield, 6);
        assert_eq!(merged.prep_time, "PT20M");
    }

    #[test]
    fn test_structured_primary_when_host_has_no_name() {
        let mut host = RecipeSchema::default();
        host.ingredients = vec!["1 egg".to_string()];
        let mut first = named("First");
        first.ingredients = vec!["2 eggs".to_string(), "milk".to_string()];
        let second = named("Second");

        let merged = merge(host, vec![first, second], &request_url());
        assert_eq!(merged.name, "First");
        // the primary's own list is kept whole
        assert_eq!(merged.ingredients, vec!["2 eggs", "milk"]);
    }

    #[test]
    fn test_lists_are_not_interleaved() {
        let host = named("Soup");
        let mut first = RecipeSchema::default();
        first.instructions = vec!["Chop.".to_string()];
        let mut second = RecipeSchema::default();
        second.instructions = vec!["Boil.".to_string(), "Serve.".to_string()];

        let merged = merge(host, vec![first, second], &request_url());
        assert_eq!(merged.instructions, vec!["Chop."]);
    }

    #[test]
    fn test_nutrition_merges_per_field() {
        let mut host = named("Salad");
        host.nutrition.calories = "200 kcal".to_string();
        let mut structured = RecipeSchema::default();
        structured.nutrition.calories = "180 kcal".to_string();
        structured.nutrition.protein = "5 g".to_string();

        let merged = merge(host, vec![structured], &request_url());
        assert_eq!(merged.nutrition.calories, "200 kcal");
        assert_eq!(merged.nutrition.protein, "5 g");
    }

    #[test]
    fn test_most_fields_primary_without_names() {
        let host = RecipeSchema {
            image: "https://example.com/a.jpg".to_string(),
            ..Default::default()
        };
        let richer = RecipeSchema {
            image: "https://example.com/b.jpg".to_string(),
            prep_time: "PT5M".to_string(),
            ..Default::default()
        };

        let merged = merge(host, vec![richer], &request_url());
        assert_eq!(merged.image, "https://example.com/b.jpg");
        assert_eq!(merged.prep_time, "PT5M");
    }

    #[test]
    fn test_url_falls_back_to_request_url() {
        let merged = merge(named("Pie"), Vec::new(), &request_url());
        assert_eq!(merged.url, "https://example.com/cake");

        let mut declared = named("Pie");
        declared.url = "https://example.com/pie".to_string();
        let merged = merge(declared, Vec::new(), &request_url());
        assert_eq!(merged.url, "https://example.com/pie");
    }

    #[test]
    fn test_merge_is_deterministic() {
        let host = named("Bread");
        let mut structured = named("Loaf");
        structured.keywords = "yeast, flour".to_string();

        let a = merge(host.clone(), vec![structured.clone()], &request_url());
        let b = merge(host, vec![structured], &request_url());
        assert_eq!(a, b);
    }
}

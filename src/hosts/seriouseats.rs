use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;
use crate::structured;

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let structured = structured::first_recipe(doc, url);
    let meta = |class: &str| helpers::text(doc, &format!(".project-meta__{class} .meta-text__data"));

    RecipeSchema {
        name: helpers::text(doc, "h1.heading__title"),
        description: helpers::text(doc, ".heading__subtitle"),
        image: normalize::absolute_url(&helpers::image_src(doc, ".primary-image__image"), url),
        category: structured.category,
        cuisine: structured.cuisine,
        ingredients: helpers::texts(doc, ".structured-ingredients__list-item"),
        instructions: helpers::texts(doc, ".structured-project__steps ol > li > p"),
        recipe_yield: normalize::yields(&meta("recipe-serving")),
        prep_time: meta("prep-time"),
        cook_time: meta("cook-time"),
        date_published: structured.date_published,
        date_modified: structured.date_modified,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <script type="application/ld+json">{"@graph": [{"@type": "Recipe", "name": "Pizza",
          "recipeCategory": ["Mains"], "recipeCuisine": "Italian",
          "datePublished": "2019-05-01T10:00:00.000-04:00"}]}</script>
        </head><body>
        <h1 class="heading__title">Neapolitan-Style Pizza Dough</h1>
        <h2 class="heading__subtitle">A soft, chewy crust.</h2>
        <img class="primary-image__image" src="https://www.seriouseats.com/thmb/pizza.jpg">
        <div class="project-meta__prep-time"><span class="meta-text__label">Prep:</span><span class="meta-text__data">20 mins</span></div>
        <div class="project-meta__cook-time"><span class="meta-text__label">Cook:</span><span class="meta-text__data">5 mins</span></div>
        <div class="project-meta__recipe-serving"><span class="meta-text__label">Serves:</span><span class="meta-text__data">4 pizzas</span></div>
        <ul class="structured-ingredients__list">
          <li class="structured-ingredients__list-item"><p>500g flour</p></li>
          <li class="structured-ingredients__list-item"><p>325g water</p></li>
        </ul>
        <section class="structured-project__steps"><ol>
          <li><p>Combine flour and water.</p></li>
          <li><p>Knead, then rest overnight.</p></li>
        </ol></section>
        </body></html>"#;

    #[test]
    fn test_seriouseats() {
        let recipe = testing::extract(PAGE, "https://www.seriouseats.com/basic-neapolitan-pizza-dough", scrape);
        assert_eq!(recipe.name, "Neapolitan-Style Pizza Dough");
        assert_eq!(recipe.description, "A soft, chewy crust.");
        assert_eq!(recipe.image, "https://www.seriouseats.com/thmb/pizza.jpg");
        assert_eq!(recipe.category, "Mains");
        assert_eq!(recipe.cuisine, "Italian");
        assert_eq!(recipe.recipe_yield, 4);
        assert_eq!(recipe.prep_time, "PT20M");
        assert_eq!(recipe.cook_time, "PT5M");
        assert_eq!(recipe.date_published, "2019-05-01T10:00:00.000-04:00");
        assert_eq!(recipe.ingredients, vec!["500g flour", "325g water"]);
        assert_eq!(recipe.instructions.len(), 2);
    }
}

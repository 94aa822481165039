//! GialloZafferano (Italian).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const FEATURED: &str = ".gz-list-featured-data li";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let ingredients = doc
        .select(".gz-ingredient")
        .iter()
        .map(|row| {
            let name = helpers::node_text(row, "a");
            let amount = helpers::node_text(row, "span");
            format!("{amount} {name}").trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect();

    RecipeSchema {
        name: helpers::text(doc, "h1.gz-title-recipe"),
        description: helpers::text(doc, ".gz-content-recipe-presentation .gz-text-expanded p"),
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        category: helpers::text(doc, ".gz-breadcrumb li:last-child a"),
        ingredients,
        instructions: helpers::texts(doc, ".gz-content-recipe-step p"),
        recipe_yield: normalize::yields(&helpers::labelled(doc, FEATURED, &["Dosi per"])),
        prep_time: helpers::labelled(doc, FEATURED, &["Preparazione"]),
        cook_time: helpers::labelled(doc, FEATURED, &["Cottura"]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <meta property="og:image" content="https://www.giallozafferano.it/images/carbonara.jpg">
        </head><body>
        <ul class="gz-breadcrumb"><li><a href="/">Ricette</a></li><li><a href="/primi">Primi piatti</a></li></ul>
        <h1 class="gz-title-recipe">Spaghetti alla Carbonara</h1>
        <div class="gz-content-recipe-presentation"><div class="gz-text-expanded"><p>Un classico della cucina romana.</p></div></div>
        <ul class="gz-list-featured-data">
          <li><span>Difficoltà:</span> <strong>Facile</strong></li>
          <li><span>Preparazione:</span> <strong>15 min</strong></li>
          <li><span>Cottura:</span> <strong>10 min</strong></li>
          <li><span>Dosi per:</span> <strong>4 persone</strong></li>
        </ul>
        <dd class="gz-ingredient"><a href="/spaghetti">Spaghetti</a> <span>320 g</span></dd>
        <dd class="gz-ingredient"><a href="/guanciale">Guanciale</a> <span>150 g</span></dd>
        <dd class="gz-ingredient"><a href="/pepe">Pepe nero</a> <span>q.b.</span></dd>
        <div class="gz-content-recipe-step"><p>Tagliate il guanciale.</p></div>
        <div class="gz-content-recipe-step"><p>Cuocete gli spaghetti.</p></div>
        </body></html>"#;

    #[test]
    fn test_giallozafferano() {
        let recipe = testing::extract(PAGE, "https://ricette.giallozafferano.it/Spaghetti-alla-Carbonara.html", scrape);
        assert_eq!(recipe.name, "Spaghetti alla Carbonara");
        assert_eq!(recipe.category, "Primi piatti");
        assert_eq!(recipe.prep_time, "PT15M");
        assert_eq!(recipe.cook_time, "PT10M");
        assert_eq!(recipe.recipe_yield, 4);
        assert_eq!(
            recipe.ingredients,
            vec!["320 g Spaghetti", "150 g Guanciale", "q.b. Pepe nero"]
        );
        assert_eq!(recipe.instructions.len(), 2);
    }
}

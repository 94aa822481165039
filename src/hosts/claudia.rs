//! Claudia (`claudia.abril.com.br`, Brazilian Portuguese).

use url::Url;

use super::helpers;
use crate::dom::Document;
use crate::model::RecipeSchema;
use crate::normalize;

const INFO: &str = ".recipe-info li";

pub fn scrape(doc: &Document, url: &Url) -> RecipeSchema {
    let body = ".entry-content";

    RecipeSchema {
        name: helpers::text(doc, "h1.entry-title"),
        description: helpers::meta(doc, "description"),
        image: normalize::absolute_url(&helpers::og_image(doc), url),
        category: helpers::text(doc, ".entry-category a"),
        ingredients: helpers::section_items(doc, body, &["Ingredientes"]),
        instructions: helpers::section_items(doc, body, &["Modo de preparo", "Preparo"]),
        recipe_yield: normalize::yields(&helpers::labelled(doc, INFO, &["Rendimento"])),
        prep_time: helpers::labelled(doc, INFO, &["Tempo de preparo"]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::helpers::testing;

    const PAGE: &str = r#"<html><head>
        <meta name="description" content="Um bolo fofinho para o café da tarde.">
        </head><body>
        <h1 class="entry-title">Bolo de cenoura com cobertura de chocolate</h1>
        <div class="entry-category"><a href="/receitas/bolos">Bolos</a></div>
        <ul class="recipe-info">
          <li>Tempo de preparo: 1 hora</li>
          <li>Rendimento: 12 porções</li>
          <li>Dificuldade: fácil</li>
        </ul>
        <div class="entry-content">
          <p>Introdução da receita.</p>
          <h3>Ingredientes</h3>
          <ul><li>3 cenouras médias</li><li>4 ovos</li><li>2 xícaras de açúcar</li></ul>
          <h3>Modo de preparo</h3>
          <ol><li>Bata as cenouras com os ovos.</li><li>Asse por 40 minutos.</li></ol>
          <h3>Dicas</h3>
          <ul><li>Sirva morno.</li></ul>
        </div>
        </body></html>"#;

    #[test]
    fn test_claudia() {
        let recipe = testing::extract(PAGE, "https://claudia.abril.com.br/receitas/bolo-de-cenoura/", scrape);
        assert_eq!(recipe.name, "Bolo de cenoura com cobertura de chocolate");
        assert_eq!(recipe.description, "Um bolo fofinho para o café da tarde.");
        assert_eq!(recipe.category, "Bolos");
        assert_eq!(recipe.prep_time, "PT1H");
        assert_eq!(recipe.recipe_yield, 12);
        assert_eq!(
            recipe.ingredients,
            vec!["3 cenouras médias", "4 ovos", "2 xícaras de açúcar"]
        );
        assert_eq!(
            recipe.instructions,
            vec!["Bata as cenouras com os ovos.", "Asse por 40 minutos."]
        );
    }
}

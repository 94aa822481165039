//! Per-host extractors.
//!
//! Each module knows the markup of one site and exposes
//! `scrape(&Document, &Url) -> RecipeSchema`. Extractors are pure: the same
//! document and URL always give the same record, and fields the site does not
//! publish stay unset.
//!
//! To support a new site, add a module and append its host (plus any alias
//! hosts serving the same markup) to [`HOSTS`].

pub(crate) mod helpers;
mod plugins;

mod allrecipes;
mod bbc;
mod bbcgoodfood;
mod bettycrocker;
mod bonappetit;
mod budgetbytes;
mod chefkoch;
mod claudia;
mod cookbooks101;
mod cookieandkate;
mod delish;
mod epicurious;
mod food;
mod foodnetwork;
mod giallozafferano;
mod halfbakedharvest;
mod jamieoliver;
mod kingarthurbaking;
mod loveandlemons;
mod marmiton;
mod minimalistbaker;
mod natashaskitchen;
mod nytimes;
mod pinchofyum;
mod recipetineats;
mod ricardocuisine;
mod sallysbakingaddiction;
mod seriouseats;
mod simplyrecipes;
mod skinnytaste;
mod smittenkitchen;
mod tasty;
mod tastecomau;
mod thekitchn;
mod wikibooks;

use crate::registry::HostExtractor;

/// Canonical host keys and their extractors. Append only.
pub const HOSTS: &[(&str, HostExtractor)] = &[
    ("101cookbooks.com", cookbooks101::scrape),
    ("allrecipes.com", allrecipes::scrape),
    ("bbc.co.uk", bbc::scrape),
    ("bbc.com", bbc::scrape),
    ("bbcgoodfood.com", bbcgoodfood::scrape),
    ("bettycrocker.com", bettycrocker::scrape),
    ("bonappetit.com", bonappetit::scrape),
    ("budgetbytes.com", budgetbytes::scrape),
    ("chefkoch.de", chefkoch::scrape),
    ("claudia.abril.com.br", claudia::scrape),
    ("cookieandkate.com", cookieandkate::scrape),
    ("cooking.nytimes.com", nytimes::scrape),
    ("delish.com", delish::scrape),
    ("en.wikibooks.org", wikibooks::scrape),
    ("epicurious.com", epicurious::scrape),
    ("food.com", food::scrape),
    ("foodnetwork.com", foodnetwork::scrape),
    ("giallozafferano.it", giallozafferano::scrape),
    ("ricette.giallozafferano.it", giallozafferano::scrape),
    ("halfbakedharvest.com", halfbakedharvest::scrape),
    ("jamieoliver.com", jamieoliver::scrape),
    ("kingarthurbaking.com", kingarthurbaking::scrape),
    ("loveandlemons.com", loveandlemons::scrape),
    ("marmiton.org", marmiton::scrape),
    ("minimalistbaker.com", minimalistbaker::scrape),
    ("natashaskitchen.com", natashaskitchen::scrape),
    ("pinchofyum.com", pinchofyum::scrape),
    ("recipetineats.com", recipetineats::scrape),
    ("ricardocuisine.com", ricardocuisine::scrape),
    ("sallysbakingaddiction.com", sallysbakingaddiction::scrape),
    ("seriouseats.com", seriouseats::scrape),
    ("simplyrecipes.com", simplyrecipes::scrape),
    ("skinnytaste.com", skinnytaste::scrape),
    ("smittenkitchen.com", smittenkitchen::scrape),
    ("taste.com.au", tastecomau::scrape),
    ("tasty.co", tasty::scrape),
    ("thekitchn.com", thekitchn::scrape),
];
